use thiserror::Error;

use crate::client::tasks::ActionKey;
use crate::domain::comparison::ComparisonError;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("network error: {0}")]
    Network(String),

    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    #[error("unexpected response: {0}")]
    Decode(String),

    #[error("local storage error: {0}")]
    Storage(String),

    #[error("{0}")]
    Validation(String),

    #[error("{0} is already in progress")]
    InFlight(ActionKey),

    #[error("vehicle {0} not found")]
    NotFound(String),

    #[error("sign in required")]
    SignInRequired,

    #[error(transparent)]
    Comparison(#[from] ComparisonError),
}

impl From<reqwest::Error> for ClientError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ClientError::Decode(e.to_string())
        } else {
            ClientError::Network(e.to_string())
        }
    }
}

impl From<std::io::Error> for ClientError {
    fn from(e: std::io::Error) -> Self {
        ClientError::Storage(e.to_string())
    }
}

use astra::Response;
use thiserror::Error;

/// Errors originating from either the server logic
/// (routing, auth, missing resources, etc.) or downstream layers (DB, export).
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Database Error: {0}")]
    DbError(String),

    #[error("Spreadsheet Error: {0}")]
    XlsxError(String),

    #[error("Internal Server Error")]
    InternalError,
}

impl ServerError {
    pub fn status(&self) -> u16 {
        match self {
            ServerError::NotFound => 404,
            ServerError::BadRequest(_) => 400,
            ServerError::Unauthorized(_) => 401,
            ServerError::Forbidden(_) => 403,
            ServerError::Conflict(_) => 409,
            ServerError::DbError(_) | ServerError::XlsxError(_) | ServerError::InternalError => 500,
        }
    }

    /// Message safe to show to the caller. Storage failures stay in the logs.
    pub fn public_message(&self) -> String {
        match self {
            ServerError::NotFound => "Not found".to_string(),
            ServerError::BadRequest(msg)
            | ServerError::Unauthorized(msg)
            | ServerError::Forbidden(msg)
            | ServerError::Conflict(msg) => msg.clone(),
            ServerError::DbError(_) | ServerError::XlsxError(_) | ServerError::InternalError => {
                "Internal server error".to_string()
            }
        }
    }
}

impl From<rusqlite::Error> for ServerError {
    fn from(e: rusqlite::Error) -> Self {
        ServerError::DbError(e.to_string())
    }
}

impl From<rust_xlsxwriter::XlsxError> for ServerError {
    fn from(e: rust_xlsxwriter::XlsxError) -> Self {
        ServerError::XlsxError(e.to_string())
    }
}

// Type alias commonly used by route handlers.
pub type ResultResp = Result<Response, ServerError>;

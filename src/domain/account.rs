use serde::{Deserialize, Serialize};

use crate::domain::validation::{is_valid_email, is_valid_phone};

pub const MIN_PASSWORD_LEN: usize = 6;

/// Public view of an account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub email: String,
    #[serde(rename = "nombre", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "telefono", default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    #[serde(alias = "username")]
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegisterRequest {
    #[serde(alias = "username")]
    pub email: String,
    pub password: String,
    #[serde(rename = "nombre", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "telefono", default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl RegisterRequest {
    pub fn check(&self) -> Result<(), String> {
        if !is_valid_email(self.email.trim()) {
            return Err("Enter a valid email address".into());
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(format!(
                "Password must be at least {MIN_PASSWORD_LEN} characters"
            ));
        }
        if let Some(phone) = self.phone.as_deref().filter(|p| !p.trim().is_empty()) {
            if !is_valid_phone(phone) {
                return Err("Enter a valid 10-digit phone number".into());
            }
        }
        Ok(())
    }
}

/// Login answer: the bearer token and the account it belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    #[serde(rename = "usuario")]
    pub user: User,
}

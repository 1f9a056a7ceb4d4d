use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::listing::Listing;
use crate::domain::validation::{is_present, is_valid_email, is_valid_phone};

pub const STATUS_PENDING: &str = "pendiente";

/// Quote request sent from a listing's detail view.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuoteRequest {
    #[serde(rename = "vehiculoId")]
    pub car_id: String,
    #[serde(rename = "nombre", default)]
    pub name: String,
    pub email: String,
    #[serde(rename = "telefono", default)]
    pub phone: String,
    #[serde(rename = "ciudad", default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// Whole percent as typed, e.g. "20".
    #[serde(rename = "enganche", default, skip_serializing_if = "Option::is_none")]
    pub down_payment: Option<String>,
    #[serde(rename = "plazo", default, skip_serializing_if = "Option::is_none")]
    pub term: Option<String>,
    #[serde(rename = "comentarios", default, skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
}

impl QuoteRequest {
    pub fn check(&self) -> Result<(), String> {
        if !is_present(Some(&self.car_id)) {
            return Err("vehiculoId is required".into());
        }
        if !is_valid_email(&self.email) {
            return Err("Enter a valid email address".into());
        }
        if !is_valid_phone(&self.phone) {
            return Err("Enter a valid 10-digit phone number".into());
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactRequest {
    #[serde(rename = "nombre", default)]
    pub name: String,
    pub email: String,
    #[serde(rename = "telefono", default)]
    pub phone: String,
    #[serde(rename = "asunto", default)]
    pub subject: String,
    #[serde(rename = "mensaje", default)]
    pub message: String,
}

impl ContactRequest {
    pub fn check(&self) -> Result<(), String> {
        if !is_valid_email(&self.email) {
            return Err("Enter a valid email address".into());
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TestDriveRequest {
    #[serde(rename = "vehiculoId", default)]
    pub car_id: String,
    #[serde(rename = "nombre", default)]
    pub name: String,
    pub email: String,
    #[serde(rename = "telefono", default)]
    pub phone: String,
    #[serde(rename = "licencia", default, skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,
    /// Preferred date as entered (`YYYY-MM-DD`).
    #[serde(rename = "fecha", default)]
    pub date: String,
    #[serde(rename = "hora", default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(rename = "sucursal", default, skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,
    #[serde(rename = "comentarios", default, skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
}

impl TestDriveRequest {
    pub fn check(&self) -> Result<(), String> {
        if !is_valid_email(&self.email) {
            return Err("Enter a valid email address".into());
        }
        Ok(())
    }
}

/// One row of a user's quote history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteRecord {
    pub id: i64,
    #[serde(rename = "vehiculo", default)]
    pub listing: Option<Listing>,
    #[serde(rename = "fecha")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "estado")]
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quote() -> QuoteRequest {
        QuoteRequest {
            car_id: "3".into(),
            name: "Ana".into(),
            email: "ana@correo.mx".into(),
            phone: "5512345678".into(),
            ..Default::default()
        }
    }

    #[test]
    fn quote_needs_email_and_phone() {
        assert!(quote().check().is_ok());

        let mut q = quote();
        q.email = "ana".into();
        assert!(q.check().is_err());

        let mut q = quote();
        q.phone = "123".into();
        assert_eq!(
            q.check().unwrap_err(),
            "Enter a valid 10-digit phone number"
        );
    }

    #[test]
    fn quote_reads_form_names() {
        let q: QuoteRequest = serde_json::from_str(
            r#"{"vehiculoId":"3","nombre":"Ana","email":"a@b.co","telefono":"5512345678","enganche":"30","plazo":"48"}"#,
        )
        .unwrap();
        assert_eq!(q.down_payment.as_deref(), Some("30"));
        assert_eq!(q.term.as_deref(), Some("48"));
    }

    #[test]
    fn contact_only_checks_email() {
        let c = ContactRequest {
            email: "x@y.mx".into(),
            ..Default::default()
        };
        assert!(c.check().is_ok());
    }
}

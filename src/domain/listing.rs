use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

pub const DEFAULT_IMAGE: &str = "/images/auto-default.jpg";

/// A single vehicle offered for sale.
///
/// Field names on the wire follow the catalog client (`marca`, `modelo`, ...).
/// The capitalized names used by early backend drafts (`Marca`, `Precio`, ...)
/// are accepted on input so old documents still load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    #[serde(default, alias = "_id")]
    pub id: String,

    #[serde(rename = "marca", alias = "Marca")]
    pub brand: String,
    #[serde(rename = "modelo", alias = "Modelo")]
    pub model: String,
    #[serde(rename = "año", alias = "Año", alias = "anio")]
    pub year: i32,
    #[serde(rename = "version", default, skip_serializing_if = "Option::is_none")]
    pub trim: Option<String>,
    #[serde(rename = "tipo", alias = "Tipo", default, skip_serializing_if = "Option::is_none")]
    pub body_type: Option<String>,

    #[serde(rename = "precio", alias = "Precio")]
    pub price: f64,
    #[serde(rename = "precioAnterior", default, skip_serializing_if = "Option::is_none")]
    pub previous_price: Option<f64>,
    #[serde(rename = "kilometraje", alias = "Kilometraje", default)]
    pub mileage: u64,

    #[serde(rename = "motor", default, skip_serializing_if = "Option::is_none")]
    pub engine: Option<String>,
    #[serde(
        rename = "transmision",
        alias = "Transmisión",
        alias = "transmisión",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub transmission: Option<String>,
    #[serde(rename = "combustible", alias = "Combustible", default, skip_serializing_if = "Option::is_none")]
    pub fuel: Option<String>,
    #[serde(rename = "potencia", default, skip_serializing_if = "Option::is_none")]
    pub power: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(rename = "puertas", default, skip_serializing_if = "Option::is_none")]
    pub doors: Option<u8>,

    #[serde(rename = "imagenes", default)]
    pub images: Vec<String>,
    #[serde(rename = "caracteristicas", default)]
    pub features: BTreeSet<String>,
    #[serde(rename = "descripcion", default)]
    pub description: String,

    #[serde(rename = "destacado", default)]
    pub featured: bool,
    #[serde(rename = "nuevo", default)]
    pub is_new: bool,

    #[serde(rename = "fechaCreacion", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Listing {
    /// "Brand Model", used for card titles and name ordering.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.brand, self.model)
    }

    /// The lowercase "brand model trim" string the search box matches against.
    pub fn search_haystack(&self) -> String {
        format!(
            "{} {} {}",
            self.brand,
            self.model,
            self.trim.as_deref().unwrap_or("")
        )
        .to_lowercase()
    }

    pub fn primary_image(&self) -> &str {
        self.images
            .first()
            .map(String::as_str)
            .unwrap_or(DEFAULT_IMAGE)
    }

    /// Whole-percent discount against the previous price, if there was one.
    pub fn discount_percent(&self) -> Option<i64> {
        match self.previous_price {
            Some(prev) if prev > 0.0 && prev > self.price => {
                Some(((1.0 - self.price / prev) * 100.0).round() as i64)
            }
            _ => None,
        }
    }

    /// Basic sanity checks applied before a listing is stored.
    pub fn check(&self) -> Result<(), String> {
        if self.brand.trim().is_empty() {
            return Err("brand is required".into());
        }
        if self.model.trim().is_empty() {
            return Err("model is required".into());
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Err("price must be a non-negative number".into());
        }
        if let Some(prev) = self.previous_price {
            if !prev.is_finite() || prev < 0.0 {
                return Err("previous price must be a non-negative number".into());
            }
        }
        Ok(())
    }
}

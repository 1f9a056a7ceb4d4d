//! Plain data the presentation layer renders. Built by the controller from
//! [`AppState`](super::AppState); nothing here touches the network.

use crate::domain::format::{format_currency, format_date, format_mileage};
use crate::domain::{Listing, PageWindow, QuoteRecord};

#[derive(Debug, Clone, PartialEq)]
pub struct CardView {
    pub id: String,
    pub title: String,
    pub year: i32,
    pub trim: String,
    pub image: String,
    pub price: String,
    pub previous_price: Option<String>,
    pub mileage: String,
    pub featured: bool,
    pub is_new: bool,
    pub in_comparison: bool,
    pub favorite: bool,
}

impl CardView {
    pub fn new(l: &Listing, in_comparison: bool, favorite: bool) -> Self {
        Self {
            id: l.id.clone(),
            title: l.display_name(),
            year: l.year,
            trim: l.trim.clone().unwrap_or_default(),
            image: l.primary_image().to_string(),
            price: format_currency(l.price),
            previous_price: l.previous_price.map(format_currency),
            mileage: format_mileage(l.mileage),
            featured: l.featured,
            is_new: l.is_new,
            in_comparison,
            favorite,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CatalogView {
    pub cards: Vec<CardView>,
    pub window: PageWindow,
    pub page: usize,
    /// Size of the whole filtered set, e.g. "25 vehículos encontrados".
    pub total: usize,
}

impl CatalogView {
    pub fn result_count(&self) -> String {
        format!("{} vehículos encontrados", self.total)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Suggestion {
    pub id: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct QuoteHistoryRow {
    pub title: String,
    pub date: String,
    pub status: String,
    pub price: String,
}

impl QuoteHistoryRow {
    pub fn new(q: &QuoteRecord) -> Self {
        let (title, price) = match &q.listing {
            Some(l) => (l.display_name(), format_currency(l.price)),
            None => ("Vehículo no disponible".to_string(), format_currency(0.0)),
        };
        Self {
            title,
            date: format_date(&q.created_at),
            status: q.status.clone(),
            price,
        }
    }
}

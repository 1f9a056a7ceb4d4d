use crate::domain::format::{format_currency, format_mileage};
use crate::domain::listing::Listing;
use serde::Serialize;
use thiserror::Error;

pub const MAX_COMPARISON: usize = 4;
pub const MIN_TO_COMPARE: usize = 2;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ComparisonError {
    #[error("at most {} vehicles can be compared", MAX_COMPARISON)]
    LimitReached,
    #[error("add at least {} vehicles to compare", MIN_TO_COMPARE)]
    TooFew,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Added,
    Removed,
}

/// Ordered, id-deduplicated selection of at most [`MAX_COMPARISON`] listings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComparisonSet {
    items: Vec<Listing>,
}

impl ComparisonSet {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.items.iter().any(|l| l.id == id)
    }

    pub fn listings(&self) -> &[Listing] {
        &self.items
    }

    /// Removes the listing if present, otherwise appends it. A full set is
    /// left untouched.
    pub fn toggle(&mut self, listing: &Listing) -> Result<ToggleOutcome, ComparisonError> {
        if let Some(pos) = self.items.iter().position(|l| l.id == listing.id) {
            self.items.remove(pos);
            return Ok(ToggleOutcome::Removed);
        }
        if self.items.len() >= MAX_COMPARISON {
            return Err(ComparisonError::LimitReached);
        }
        self.items.push(listing.clone());
        Ok(ToggleOutcome::Added)
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// The id list kept in durable storage.
    pub fn persisted_ids(&self) -> Vec<String> {
        self.items.iter().map(|l| l.id.clone()).collect()
    }

    /// Rebuilds a set from stored ids. Ids with no listing are dropped
    /// silently; duplicates and overflow beyond the limit are ignored.
    pub fn rehydrate(ids: &[String], listings: &[Listing]) -> Self {
        let mut set = Self::default();
        for id in ids {
            if set.items.len() >= MAX_COMPARISON {
                break;
            }
            if set.contains(id) {
                continue;
            }
            if let Some(l) = listings.iter().find(|l| &l.id == id) {
                set.items.push(l.clone());
            }
        }
        set
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attribute {
    Price,
    Year,
    Engine,
    Transmission,
    Fuel,
    Mileage,
    Power,
    Color,
    Doors,
}

impl Attribute {
    pub const ORDER: [Attribute; 9] = [
        Attribute::Price,
        Attribute::Year,
        Attribute::Engine,
        Attribute::Transmission,
        Attribute::Fuel,
        Attribute::Mileage,
        Attribute::Power,
        Attribute::Color,
        Attribute::Doors,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Attribute::Price => "Precio",
            Attribute::Year => "Año",
            Attribute::Engine => "Motor",
            Attribute::Transmission => "Transmisión",
            Attribute::Fuel => "Combustible",
            Attribute::Mileage => "Kilometraje",
            Attribute::Power => "Potencia",
            Attribute::Color => "Color",
            Attribute::Doors => "Puertas",
        }
    }

    pub fn render(self, l: &Listing) -> String {
        fn or_na(v: Option<&str>) -> String {
            v.filter(|s| !s.is_empty()).unwrap_or("N/A").to_string()
        }

        match self {
            Attribute::Price => format_currency(l.price),
            Attribute::Mileage => format_mileage(l.mileage),
            Attribute::Year => l.year.to_string(),
            Attribute::Engine => or_na(l.engine.as_deref()),
            Attribute::Transmission => or_na(l.transmission.as_deref()),
            Attribute::Fuel => or_na(l.fuel.as_deref()),
            Attribute::Power => or_na(l.power.as_deref()),
            Attribute::Color => or_na(l.color.as_deref()),
            Attribute::Doors => l
                .doors
                .map(|d| d.to_string())
                .unwrap_or_else(|| "N/A".to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonColumn {
    pub id: String,
    pub title: String,
    pub year: i32,
    pub image: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonRow {
    pub label: &'static str,
    pub values: Vec<String>,
}

/// Side-by-side table, one column per listing in selection order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonTable {
    pub columns: Vec<ComparisonColumn>,
    pub rows: Vec<ComparisonRow>,
}

pub fn comparison_table(listings: &[Listing]) -> Result<ComparisonTable, ComparisonError> {
    if listings.len() < MIN_TO_COMPARE {
        return Err(ComparisonError::TooFew);
    }

    let columns = listings
        .iter()
        .map(|l| ComparisonColumn {
            id: l.id.clone(),
            title: l.display_name(),
            year: l.year,
            image: l.primary_image().to_string(),
        })
        .collect();

    let rows = Attribute::ORDER
        .iter()
        .map(|attr| ComparisonRow {
            label: attr.label(),
            values: listings.iter().map(|l| attr.render(l)).collect(),
        })
        .collect();

    Ok(ComparisonTable { columns, rows })
}

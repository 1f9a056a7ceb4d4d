use crate::domain::listing::Listing;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Distinct filter values offered in the catalog selects.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Facets {
    pub brands: Vec<String>,
    pub body_types: Vec<String>,
    pub years: Vec<i32>,
}

fn distinct_in_order<I>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut seen = HashSet::new();
    values
        .into_iter()
        .filter(|v| seen.insert(v.clone()))
        .collect()
}

impl Facets {
    /// Brands and types keep first-seen order; years are newest first.
    pub fn from_listings(listings: &[Listing]) -> Self {
        let brands = distinct_in_order(listings.iter().map(|l| l.brand.clone()));
        let body_types = distinct_in_order(listings.iter().filter_map(|l| l.body_type.clone()));

        let mut years: Vec<i32> = listings.iter().map(|l| l.year).collect();
        years.sort_unstable_by(|a, b| b.cmp(a));
        years.dedup();

        Self {
            brands,
            body_types,
            years,
        }
    }
}

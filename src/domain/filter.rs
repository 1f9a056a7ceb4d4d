use crate::domain::listing::Listing;

/// Raw values as they come from the filter form or a query string.
/// Empty strings mean "not set".
#[derive(Debug, Clone, Default)]
pub struct FilterInputs {
    pub brand: String,
    pub body_type: String,
    pub year: String,
    pub min_price: String,
    pub max_price: String,
    pub search: String,
}

/// The active catalog filter. Always rebuilt as a whole from [`FilterInputs`],
/// never merged into a previous state.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterState {
    pub brand: Option<String>,
    pub body_type: Option<String>,
    pub year: Option<i32>,
    pub min_price: f64,
    pub max_price: f64,
    /// Already lowercased.
    pub search_text: String,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            brand: None,
            body_type: None,
            year: None,
            min_price: 0.0,
            max_price: f64::INFINITY,
            search_text: String::new(),
        }
    }
}

fn non_empty(s: &str) -> Option<String> {
    let t = s.trim();
    (!t.is_empty()).then(|| t.to_string())
}

fn parse_price(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

impl FilterState {
    /// Unparsable min price means 0, unparsable max price means no ceiling.
    /// A year that does not parse can match nothing, so it is kept as a filter
    /// that rejects every listing.
    pub fn from_inputs(inputs: &FilterInputs) -> Self {
        let year = non_empty(&inputs.year).map(|y| y.parse::<i32>().unwrap_or(i32::MIN));

        Self {
            brand: non_empty(&inputs.brand),
            body_type: non_empty(&inputs.body_type),
            year,
            min_price: parse_price(&inputs.min_price).unwrap_or(0.0),
            max_price: parse_price(&inputs.max_price).unwrap_or(f64::INFINITY),
            search_text: inputs.search.trim().to_lowercase(),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn matches(&self, listing: &Listing) -> bool {
        let brand_ok = self.brand.as_deref().map_or(true, |b| listing.brand == b);
        let type_ok = self
            .body_type
            .as_deref()
            .map_or(true, |t| listing.body_type.as_deref() == Some(t));
        let year_ok = self.year.map_or(true, |y| listing.year == y);
        let price_ok = listing.price >= self.min_price && listing.price <= self.max_price;
        let search_ok =
            self.search_text.is_empty() || listing.search_haystack().contains(&self.search_text);

        brand_ok && type_ok && year_ok && price_ok && search_ok
    }
}

/// Listings that satisfy every active predicate, in their original order.
pub fn apply_filters(listings: &[Listing], state: &FilterState) -> Vec<Listing> {
    listings
        .iter()
        .filter(|l| state.matches(l))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::listing::fixtures::listing;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    const BRANDS: [&str; 4] = ["Toyota", "Honda", "Ford", "Chevrolet"];
    const TYPES: [&str; 3] = ["Sedán", "SUV", "Pickup"];
    const MODELS: [&str; 5] = ["Corolla", "Civic", "Ranger", "Aveo", "RAV4"];
    const TRIMS: [&str; 3] = ["LE", "Sport", "Limited"];

    fn random_listing(rng: &mut StdRng, i: usize) -> Listing {
        let mut l = listing(
            &i.to_string(),
            BRANDS[rng.gen_range(0..BRANDS.len())],
            MODELS[rng.gen_range(0..MODELS.len())],
            rng.gen_range(2015..=2024),
            rng.gen_range(100_000..=900_000) as f64,
        );
        if rng.gen_bool(0.8) {
            l.body_type = Some(TYPES[rng.gen_range(0..TYPES.len())].to_string());
        }
        if rng.gen_bool(0.7) {
            l.trim = Some(TRIMS[rng.gen_range(0..TRIMS.len())].to_string());
        }
        l
    }

    fn random_inputs(rng: &mut StdRng) -> FilterInputs {
        let pick = |rng: &mut StdRng, opts: &[&str]| -> String {
            if rng.gen_bool(0.5) {
                opts[rng.gen_range(0..opts.len())].to_string()
            } else {
                String::new()
            }
        };
        FilterInputs {
            brand: pick(rng, &BRANDS),
            body_type: pick(rng, &TYPES),
            year: if rng.gen_bool(0.3) {
                rng.gen_range(2015..=2024).to_string()
            } else {
                String::new()
            },
            min_price: if rng.gen_bool(0.4) {
                rng.gen_range(0..500_000).to_string()
            } else {
                String::new()
            },
            max_price: if rng.gen_bool(0.4) {
                rng.gen_range(300_000..1_000_000).to_string()
            } else {
                String::new()
            },
            search: pick(rng, &["cor", "CIVIC", "sport", "ford r", "a"]),
        }
    }

    /// Each predicate evaluated on its own, independent of `matches`.
    fn independently_matches(l: &Listing, i: &FilterInputs) -> bool {
        if !i.brand.is_empty() && l.brand != i.brand {
            return false;
        }
        if !i.body_type.is_empty() && l.body_type.as_deref() != Some(i.body_type.as_str()) {
            return false;
        }
        if !i.year.is_empty() && l.year.to_string() != i.year {
            return false;
        }
        let min: f64 = i.min_price.parse().unwrap_or(0.0);
        let max: f64 = i.max_price.parse().unwrap_or(f64::INFINITY);
        if l.price < min || l.price > max {
            return false;
        }
        let hay = format!(
            "{} {} {}",
            l.brand,
            l.model,
            l.trim.clone().unwrap_or_default()
        )
        .to_lowercase();
        hay.contains(&i.search.to_lowercase())
    }

    #[test]
    fn filtered_result_is_exactly_the_listings_passing_every_predicate() {
        let mut rng = StdRng::seed_from_u64(20240611);

        for _ in 0..200 {
            let n = rng.gen_range(0..40);
            let listings: Vec<Listing> = (0..n).map(|i| random_listing(&mut rng, i)).collect();
            let inputs = random_inputs(&mut rng);
            let state = FilterState::from_inputs(&inputs);

            let result = apply_filters(&listings, &state);
            let expected: Vec<&Listing> = listings
                .iter()
                .filter(|l| independently_matches(l, &inputs))
                .collect();

            assert_eq!(result.len(), expected.len(), "inputs: {inputs:?}");
            for (got, want) in result.iter().zip(expected) {
                assert_eq!(got.id, want.id);
            }
        }
    }

    #[test]
    fn empty_inputs_build_the_default_state() {
        let state = FilterState::from_inputs(&FilterInputs::default());
        assert!(state.is_empty());
        assert_eq!(state.max_price, f64::INFINITY);
    }

    #[test]
    fn unparsable_prices_fall_back_to_open_bounds() {
        let state = FilterState::from_inputs(&FilterInputs {
            min_price: "abc".into(),
            max_price: "".into(),
            ..Default::default()
        });
        assert_eq!(state.min_price, 0.0);
        assert!(state.max_price.is_infinite());
    }

    #[test]
    fn search_is_case_insensitive_and_covers_trim() {
        let mut l = listing("1", "Toyota", "Corolla", 2020, 300_000.0);
        l.trim = Some("Hybrid LE".into());

        let state = FilterState::from_inputs(&FilterInputs {
            search: "  HYBRID ".into(),
            ..Default::default()
        });
        assert!(state.matches(&l));
    }

    #[test]
    fn bad_year_matches_nothing() {
        let l = listing("1", "Toyota", "Corolla", 2020, 300_000.0);
        let state = FilterState::from_inputs(&FilterInputs {
            year: "veinte".into(),
            ..Default::default()
        });
        assert!(!state.matches(&l));
    }
}

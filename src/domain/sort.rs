use crate::domain::listing::Listing;
use std::cmp::Ordering;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortCriterion {
    PriceAsc,
    PriceDesc,
    YearAsc,
    YearDesc,
    MileageAsc,
    MileageDesc,
    NameAsc,
    Recent,
}

impl SortCriterion {
    pub const ALL: [SortCriterion; 8] = [
        SortCriterion::PriceAsc,
        SortCriterion::PriceDesc,
        SortCriterion::YearDesc,
        SortCriterion::YearAsc,
        SortCriterion::MileageAsc,
        SortCriterion::MileageDesc,
        SortCriterion::NameAsc,
        SortCriterion::Recent,
    ];

    pub fn key(self) -> &'static str {
        match self {
            SortCriterion::PriceAsc => "price-asc",
            SortCriterion::PriceDesc => "price-desc",
            SortCriterion::YearAsc => "year-asc",
            SortCriterion::YearDesc => "year-desc",
            SortCriterion::MileageAsc => "mileage-asc",
            SortCriterion::MileageDesc => "mileage-desc",
            SortCriterion::NameAsc => "name-asc",
            SortCriterion::Recent => "recent",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortCriterion::PriceAsc => "Precio: menor a mayor",
            SortCriterion::PriceDesc => "Precio: mayor a menor",
            SortCriterion::YearAsc => "Año: más antiguo",
            SortCriterion::YearDesc => "Año: más reciente",
            SortCriterion::MileageAsc => "Kilometraje: menor",
            SortCriterion::MileageDesc => "Kilometraje: mayor",
            SortCriterion::NameAsc => "Nombre: A-Z",
            SortCriterion::Recent => "Recién agregados",
        }
    }

    fn compare(self, a: &Listing, b: &Listing) -> Ordering {
        match self {
            SortCriterion::PriceAsc => a.price.total_cmp(&b.price),
            SortCriterion::PriceDesc => b.price.total_cmp(&a.price),
            SortCriterion::YearAsc => a.year.cmp(&b.year),
            SortCriterion::YearDesc => b.year.cmp(&a.year),
            SortCriterion::MileageAsc => a.mileage.cmp(&b.mileage),
            SortCriterion::MileageDesc => b.mileage.cmp(&a.mileage),
            SortCriterion::NameAsc => collate(&a.display_name(), &b.display_name()),
            // Listings without a creation date sink to the end.
            SortCriterion::Recent => b.created_at.cmp(&a.created_at),
        }
    }
}

impl FromStr for SortCriterion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "price-asc" | "precio-asc" => Ok(SortCriterion::PriceAsc),
            "price-desc" | "precio-desc" => Ok(SortCriterion::PriceDesc),
            "year-asc" | "año-asc" => Ok(SortCriterion::YearAsc),
            "year-desc" | "año-desc" => Ok(SortCriterion::YearDesc),
            "mileage-asc" | "km-asc" => Ok(SortCriterion::MileageAsc),
            "mileage-desc" | "km-desc" => Ok(SortCriterion::MileageDesc),
            "name-asc" | "nombre-asc" => Ok(SortCriterion::NameAsc),
            "recent" | "reciente" => Ok(SortCriterion::Recent),
            other => Err(format!("unknown sort criterion: {other}")),
        }
    }
}

/// Spanish-aware folding: case and accents are ignored on the first pass,
/// "ñ" sorts right after "n".
fn collation_key(s: &str) -> Vec<(char, u8)> {
    s.chars()
        .flat_map(char::to_lowercase)
        .map(|c| match c {
            'á' | 'à' | 'ä' | 'â' => ('a', 1),
            'é' | 'è' | 'ë' | 'ê' => ('e', 1),
            'í' | 'ì' | 'ï' | 'î' => ('i', 1),
            'ó' | 'ò' | 'ö' | 'ô' => ('o', 1),
            'ú' | 'ù' | 'ü' | 'û' => ('u', 1),
            'ñ' => ('n', 2),
            c => (c, 0),
        })
        .collect()
}

fn collate(a: &str, b: &str) -> Ordering {
    let ka = collation_key(a);
    let kb = collation_key(b);

    let base = ka
        .iter()
        .map(|(c, _)| *c)
        .cmp(kb.iter().map(|(c, _)| *c));

    base.then_with(|| ka.iter().map(|(_, m)| *m).cmp(kb.iter().map(|(_, m)| *m)))
        .then_with(|| a.cmp(b))
}

/// Stable sort: listings with equal keys keep their relative order.
pub fn sort_listings(listings: &mut [Listing], criterion: SortCriterion) {
    listings.sort_by(|a, b| criterion.compare(a, b));
}

pub mod account;
pub mod comparison;
pub mod facets;
pub mod filter;
pub mod financing;
pub mod format;
pub mod leads;
pub mod listing;
pub mod pagination;
pub mod sort;
pub mod validation;

pub use account::{AuthResponse, LoginRequest, RegisterRequest, User};
pub use comparison::{ComparisonSet, ComparisonTable};
pub use facets::Facets;
pub use filter::{apply_filters, FilterInputs, FilterState};
pub use financing::{estimate_financing, FinancingEstimate};
pub use leads::{ContactRequest, QuoteRecord, QuoteRequest, TestDriveRequest};
pub use listing::Listing;
pub use pagination::{page_count, page_slice, page_window, PageWindow, PAGE_SIZE};
pub use sort::{sort_listings, SortCriterion};

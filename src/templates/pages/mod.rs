pub mod catalog;
pub mod compare;
pub mod detail;
pub mod error;

pub use catalog::{catalog_href, catalog_page, CatalogVm};
pub use compare::compare_page;
pub use detail::detail_page;
pub use error::error_page;

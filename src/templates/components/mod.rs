pub mod card;
pub mod comparison;
pub mod financing;
pub mod pagination;

pub use card::{price_block, vehicle_card};
pub use comparison::comparison_table_view;
pub use financing::financing_summary;
pub use pagination::pagination_nav;

pub mod comparison_xlsx;

pub use comparison_xlsx::{comparison_workbook, export_comparison_xlsx, COMPARISON_FILENAME};

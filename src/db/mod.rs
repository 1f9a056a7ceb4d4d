pub mod cars;
pub mod connection;
pub mod favorites;
pub mod leads;
pub mod users;

pub use connection::{init_db, Database};

pub mod auth;
pub mod cars;
pub mod leads;
pub mod pages;

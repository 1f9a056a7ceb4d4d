pub mod auth;
pub mod client;
pub mod config;
pub mod db;
pub mod domain;
pub mod errors;
pub mod responses;
pub mod router;
pub mod routes;
pub mod spreadsheets;
pub mod templates;

#[cfg(test)]
mod tests;

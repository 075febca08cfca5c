pub mod basket;
pub mod categories;
pub mod config;

//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `catalog` - JSON category catalogs (CategorySource)
//! - `basket_script` - JSON basket action scripts
//! - `clock` - Deterministic clocks

pub mod basket_script;
pub mod catalog;
pub mod clock;

pub use basket_script::{load_script, parse_script};
pub use catalog::{parse_catalog, JsonCatalog};
pub use clock::{FixedClock, SteppingClock};

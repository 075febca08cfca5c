//! Configuration module for Bazaar
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (BAZAAR_*)
//! 3. Explicit `--config` file, else `./bazaar.toml`
//! 4. User config (~/.config/bazaar/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use crate::domain::value_objects::ConfigWarning;

pub use loader::{parse_with_warnings, user_config_path, PROJECT_CONFIG_FILE};
pub use types::{BasketConfig, CategoryConfig, Config, OutputConfig, Verbosity};

//! Configuration type definitions

use std::collections::BTreeMap;
use std::path::Path;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{CategoryWeights, ConfigWarning, DEFAULT_CATEGORY_WEIGHT};
use crate::error::BazaarResult;

use super::loader;

/// Basket configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BasketConfig {
    /// Protection fee fraction applied when an added item does not carry one
    #[serde(default = "default_protection_fee")]
    pub default_protection_fee: Decimal,
}

impl Default for BasketConfig {
    fn default() -> Self {
        Self {
            default_protection_fee: default_protection_fee(),
        }
    }
}

fn default_protection_fee() -> Decimal {
    // 7.2%
    Decimal::new(72, 3)
}

/// Category display-ordering configuration
///
/// ```toml
/// [categories]
/// default_weight = 5
///
/// [categories.weights]
/// mens = 10
/// vintage = 8
/// ```
///
/// Entries in `weights` are layered over the built-in table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryConfig {
    #[serde(default = "default_weight")]
    pub default_weight: i32,

    #[serde(default)]
    pub weights: BTreeMap<String, i32>,
}

impl Default for CategoryConfig {
    fn default() -> Self {
        Self {
            default_weight: default_weight(),
            weights: BTreeMap::new(),
        }
    }
}

fn default_weight() -> i32 {
    DEFAULT_CATEGORY_WEIGHT
}

impl CategoryConfig {
    /// Built-in weights with configured overrides applied.
    pub fn weights(&self) -> CategoryWeights {
        let mut table = CategoryWeights::default();
        table.set_default_weight(self.default_weight);
        for (slug, weight) in &self.weights {
            table.set(slug.clone(), *weight);
        }
        table
    }
}

/// Output configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub verbosity: Verbosity,
}

/// Verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
    Debug,
}

impl Verbosity {
    /// Default tracing filter directive for this verbosity.
    pub fn filter_directive(&self) -> &'static str {
        match self {
            Verbosity::Quiet => "error",
            Verbosity::Normal => "warn",
            Verbosity::Verbose => "info",
            Verbosity::Debug => "debug",
        }
    }

    /// Raise the level by the number of `-v` flags given.
    pub fn bumped(self, count: u8) -> Self {
        match (self, count) {
            (level, 0) => level,
            (Verbosity::Quiet | Verbosity::Normal, 1) => Verbosity::Verbose,
            _ => Verbosity::Debug,
        }
    }
}

impl FromStr for Verbosity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "quiet" => Ok(Verbosity::Quiet),
            "normal" => Ok(Verbosity::Normal),
            "verbose" => Ok(Verbosity::Verbose),
            "debug" => Ok(Verbosity::Debug),
            other => Err(format!("unknown verbosity '{}'", other)),
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub basket: BasketConfig,

    #[serde(default)]
    pub categories: CategoryConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> BazaarResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> BazaarResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Resolve the effective configuration: explicit file, `./bazaar.toml`,
    /// user config, then defaults; env overrides are applied last.
    pub fn resolve(
        explicit: Option<&Path>,
        working_dir: &Path,
    ) -> BazaarResult<(Self, Vec<ConfigWarning>)> {
        loader::resolve(explicit, working_dir)
    }

    /// Apply environment variable overrides (BAZAAR_* prefix); unusable
    /// values are skipped and reported.
    pub fn with_env_overrides(self) -> (Self, Vec<ConfigWarning>) {
        loader::with_env_overrides(self)
    }

    /// The effective category weight table.
    pub fn category_weights(&self) -> CategoryWeights {
        self.categories.weights()
    }

    /// Copy with `categories.weights` expanded to the full effective table,
    /// built-in entries included.
    pub fn effective(&self) -> Self {
        let mut config = self.clone();
        config.categories.weights = self
            .category_weights()
            .entries()
            .map(|(slug, weight)| (slug.to_string(), weight))
            .collect();
        config
    }
}

//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use rust_decimal::Decimal;
use tracing::debug;

use crate::domain::value_objects::ConfigWarning;
use crate::error::{BazaarError, BazaarResult};

use super::types::{Config, Verbosity};

/// File name looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = "bazaar.toml";

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> BazaarResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;
    parse_with_warnings(&content, path)
}

/// Parse TOML content; `path` is only used for diagnostics.
pub fn parse_with_warnings(content: &str, path: &Path) -> BazaarResult<(Config, Vec<ConfigWarning>)> {
    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| BazaarError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning::UnknownKey {
                line: find_line_number(content, &key),
                suggestion: suggest_key(&key),
                file: path.to_path_buf(),
                key,
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Explicit path first, then `./bazaar.toml`, then the user config
/// directory, then defaults. Env overrides always apply on top.
///
/// Any file that is found but cannot be read or parsed is an error.
/// Unknown keys and unusable env values come back as warnings; this runs
/// before logging is configured, so callers report them.
pub fn resolve(
    explicit: Option<&Path>,
    working_dir: &Path,
) -> BazaarResult<(Config, Vec<ConfigWarning>)> {
    let candidate = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => implicit_config_path(working_dir),
    };

    let (config, mut warnings) = match candidate {
        Some(path) => {
            debug!(path = %path.display(), "loading config");
            load_with_warnings(&path)?
        }
        None => {
            debug!("no config file found, using defaults");
            (Config::default(), Vec::new())
        }
    };

    let (config, env_warnings) = with_env_overrides(config);
    warnings.extend(env_warnings);
    Ok((config, warnings))
}

fn implicit_config_path(working_dir: &Path) -> Option<PathBuf> {
    let project = working_dir.join(PROJECT_CONFIG_FILE);
    if project.is_file() {
        return Some(project);
    }
    user_config_path().filter(|p| p.is_file())
}

/// `$XDG_CONFIG_HOME/bazaar/config.toml` (or the platform equivalent)
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("bazaar").join("config.toml"))
}

/// Apply environment variable overrides (BAZAAR_* prefix)
pub fn with_env_overrides(config: Config) -> (Config, Vec<ConfigWarning>) {
    apply_overrides(config, |key| std::env::var(key).ok())
}

/// Override logic with an injectable variable lookup. Values that cannot be
/// used leave the setting unchanged and produce a warning.
pub(crate) fn apply_overrides(
    mut config: Config,
    lookup: impl Fn(&str) -> Option<String>,
) -> (Config, Vec<ConfigWarning>) {
    let mut warnings = Vec::new();
    let mut reject = |var: &'static str, value: String, expected: &'static str| {
        debug!(var, value = %value, "ignoring invalid env override");
        warnings.push(ConfigWarning::InvalidEnv {
            var,
            value,
            expected,
        });
    };

    if let Some(raw) = lookup("BAZAAR_PROTECTION_FEE") {
        match Decimal::from_str(raw.trim()) {
            Ok(fee) if !fee.is_sign_negative() => config.basket.default_protection_fee = fee,
            _ => reject("BAZAAR_PROTECTION_FEE", raw, "a non-negative decimal"),
        }
    }

    if let Some(raw) = lookup("BAZAAR_DEFAULT_WEIGHT") {
        match raw.trim().parse::<i32>() {
            Ok(weight) => config.categories.default_weight = weight,
            Err(_) => reject("BAZAAR_DEFAULT_WEIGHT", raw, "an integer"),
        }
    }

    if let Some(raw) = lookup("BAZAAR_VERBOSITY") {
        match Verbosity::from_str(&raw) {
            Ok(verbosity) => config.output.verbosity = verbosity,
            Err(_) => reject("BAZAAR_VERBOSITY", raw, "quiet, normal, verbose or debug"),
        }
    }

    (config, warnings)
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "basket",
        "default_protection_fee",
        "categories",
        "default_weight",
        "weights",
        "output",
        "verbosity",
    ];

    CANDIDATES
        .iter()
        .map(|candidate| (*candidate, levenshtein(unknown, candidate)))
        .min_by_key(|(_, dist)| *dist)
        .filter(|(_, dist)| *dist <= 2)
        .map(|(candidate, _)| candidate.to_string())
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}


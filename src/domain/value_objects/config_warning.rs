//! Configuration warning value object.

use std::path::PathBuf;

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
    /// A key in a config file that no setting recognises
    UnknownKey {
        /// The unrecognised key (last path segment)
        key: String,
        /// The file where the key appeared
        file: PathBuf,
        /// 1-indexed line number, when the key could be located
        line: Option<usize>,
        /// Closest known key, if any
        suggestion: Option<String>,
    },
    /// A `BAZAAR_*` override whose value could not be used; the setting
    /// keeps its file or default value.
    InvalidEnv {
        var: &'static str,
        value: String,
        expected: &'static str,
    },
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigWarning::UnknownKey {
                key,
                file,
                line,
                suggestion,
            } => {
                write!(f, "unknown config key '{}' in {}", key, file.display())?;
                if let Some(line) = line {
                    write!(f, ":{}", line)?;
                }
                if let Some(suggestion) = suggestion {
                    write!(f, " (did you mean '{}'?)", suggestion)?;
                }
                Ok(())
            }
            ConfigWarning::InvalidEnv {
                var,
                value,
                expected,
            } => write!(f, "ignoring {}='{}' (expected {})", var, value, expected),
        }
    }
}

//! Diagnostics printed to stderr.

use std::fmt::Write as _;

use bazaar::config::ConfigWarning;

pub fn print_config_warnings(warnings: &[ConfigWarning]) {
    eprint!("{}", format_config_warnings(warnings));
}

fn format_config_warnings(warnings: &[ConfigWarning]) -> String {
    let mut out = String::new();
    for w in warnings {
        match w {
            ConfigWarning::UnknownKey {
                key,
                file,
                line,
                suggestion,
            } => {
                match line {
                    Some(line) => {
                        let _ = writeln!(out, "! Unknown config key '{}' in {}:{}", key, file.display(), line);
                    }
                    None => {
                        let _ = writeln!(out, "! Unknown config key '{}' in {}", key, file.display());
                    }
                }
                if let Some(suggestion) = suggestion {
                    let _ = writeln!(out, "   Did you mean '{}'?", suggestion);
                }
            }
            ConfigWarning::InvalidEnv {
                var,
                value,
                expected,
            } => {
                let _ = writeln!(out, "! Ignoring {}='{}'", var, value);
                let _ = writeln!(out, "   Expected {}", expected);
            }
        }
    }
    out
}

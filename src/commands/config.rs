use anyhow::{Context, Result};
use bazaar::config::{Config, ConfigWarning};
use serde_json::json;

use crate::ui::json::events::{CompleteEvent, DataEvent, StartEvent};
use crate::ui::json::emit_event;
use crate::ui::output::print_config_warnings;

const COMMAND: &str = "config show";

/// Weights are shown as the full effective table, not just the overrides.
pub fn cmd_config_show(config: &Config, warnings: &[ConfigWarning], json: bool) -> Result<()> {
    let config = config.effective();
    if json {
        emit_event(&StartEvent::new(COMMAND))?;
        let warnings: Vec<String> = warnings.iter().map(|w| w.to_string()).collect();
        emit_event(&DataEvent::new(
            "config",
            COMMAND,
            json!({
                "config": &config,
                "warnings": warnings,
            }),
        ))?;
        emit_event(&CompleteEvent::success(COMMAND))?;
        return Ok(());
    }

    print_config_warnings(warnings);
    let rendered = toml::to_string_pretty(&config).context("Failed to render configuration")?;
    print!("{}", rendered);
    Ok(())
}

//! JSON basket scripts
//!
//! A script is a list of recorded basket actions, either bare or wrapped:
//! `[ {"action": "add", ...} ]` or `{ "actions": [ ... ] }`.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::application::basket_replay::BasketAction;
use crate::error::{BazaarError, BazaarResult};

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ScriptDe {
    List(Vec<BasketAction>),
    Wrapped { actions: Vec<BasketAction> },
}

/// Decode a script document; `origin` is only used in error messages.
pub fn parse_script(content: &str, origin: &Path) -> BazaarResult<Vec<BasketAction>> {
    let script: ScriptDe =
        serde_json::from_str(content).map_err(|e| BazaarError::InvalidScript {
            file: origin.to_path_buf(),
            message: e.to_string(),
        })?;
    Ok(match script {
        ScriptDe::List(actions) => actions,
        ScriptDe::Wrapped { actions } => actions,
    })
}

pub fn load_script(path: &Path) -> BazaarResult<Vec<BasketAction>> {
    let content = fs::read_to_string(path)?;
    parse_script(&content, path)
}

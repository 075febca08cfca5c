//! JSON category catalog
//!
//! Implements the CategorySource port over a JSON export of the search
//! backend's category collection. Two shapes are accepted:
//!
//! ```json
//! [ { "id": 1, "name": "Mens", "slug": "mens", "children": [] } ]
//! ```
//!
//! ```json
//! { "categories": [ { "id": 1, "name": "Mens", "slug": "mens" } ] }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::domain::entities::Category;
use crate::domain::ports::CategorySource;
use crate::domain::services::walk;
use crate::error::{BazaarError, BazaarResult};

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CatalogDe {
    List(Vec<Category>),
    Wrapped { categories: Vec<Category> },
}

/// Decode a catalog document; `origin` is only used in error messages.
pub fn parse_catalog(content: &str, origin: &Path) -> BazaarResult<Vec<Category>> {
    let catalog: CatalogDe =
        serde_json::from_str(content).map_err(|e| BazaarError::InvalidCatalog {
            file: origin.to_path_buf(),
            message: e.to_string(),
        })?;
    Ok(match catalog {
        CatalogDe::List(categories) => categories,
        CatalogDe::Wrapped { categories } => categories,
    })
}

/// Category tree read from a JSON file on every request.
#[derive(Debug, Clone)]
pub struct JsonCatalog {
    path: PathBuf,
}

impl JsonCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CategorySource for JsonCatalog {
    fn load_tree(&self) -> BazaarResult<Vec<Category>> {
        let content = fs::read_to_string(&self.path)?;
        let tree = parse_catalog(&content, &self.path)?;
        debug!(
            path = %self.path.display(),
            roots = tree.len(),
            nodes = walk(&tree).count(),
            "loaded category catalog"
        );
        Ok(tree)
    }
}

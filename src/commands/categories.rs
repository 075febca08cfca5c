use std::path::Path;

use anyhow::{Context, Result};
use bazaar::application::{CategoryQuery, CategoryQueryResult, CategoryQueryUseCase};
use bazaar::config::Config;
use bazaar::infrastructure::JsonCatalog;
use serde_json::json;

use crate::ui::json::events::{CompleteEvent, DataEvent, StartEvent};
use crate::ui::json::{categories_value, emit_event};
use crate::ui::render::{render_categories, render_path};

pub fn cmd_categories(tree: &Path, query: CategoryQuery, config: &Config, json: bool) -> Result<()> {
    let command = format!("categories {}", query.name());
    if json {
        emit_event(&StartEvent::new(&command))?;
    }

    let use_case = CategoryQueryUseCase::new(JsonCatalog::new(tree), config.category_weights());
    let result = use_case
        .execute(&query)
        .with_context(|| format!("Failed to load category tree {}", tree.display()))?;

    if json {
        emit_event(&DataEvent::new(
            "categories",
            &command,
            json!({
                "query": query.name(),
                "count": result.len(),
                "categories": categories_value(result.nodes()),
            }),
        ))?;
        emit_event(&CompleteEvent::success(&command))?;
        return Ok(());
    }

    print!("{}", render_result(&query, &result));
    Ok(())
}

fn render_result(query: &CategoryQuery, result: &CategoryQueryResult) -> String {
    match query {
        CategoryQuery::Find { slug } | CategoryQuery::Path { slug } if result.is_empty() => {
            format!("No category with slug '{}'\n", slug)
        }
        CategoryQuery::Filter { term } if result.is_empty() => {
            format!("No categories match '{}'\n", term.trim())
        }
        CategoryQuery::Leaves | CategoryQuery::Sort if result.is_empty() => {
            "Category tree is empty\n".to_string()
        }
        CategoryQuery::Path { .. } => render_path(result.nodes()),
        CategoryQuery::Find { .. } | CategoryQuery::Filter { .. } => {
            render_categories(result.nodes(), true)
        }
        CategoryQuery::Leaves | CategoryQuery::Sort => render_categories(result.nodes(), false),
    }
}

use std::path::PathBuf;

use bazaar::application::CategoryQuery;
use clap::{Args, Parser, Subcommand};

/// Bazaar - basket totals and category navigation for marketplace data
#[derive(Parser, Debug)]
#[command(name = "bazaar")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Emit NDJSON events instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file (defaults to ./bazaar.toml, then the user config)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Query a category tree exported from the search backend
    Categories {
        #[command(subcommand)]
        query: CategoryCommand,
    },

    /// Run basket actions and show the resulting basket
    Basket {
        #[command(subcommand)]
        action: BasketCommand,
    },

    /// Inspect configuration
    Config {
        #[command(subcommand)]
        action: ConfigCommand,
    },
}

#[derive(Args, Debug, Clone)]
pub struct TreeArgs {
    /// Category tree JSON file
    #[arg(short, long)]
    pub tree: PathBuf,
}

#[derive(Subcommand, Debug)]
pub enum CategoryCommand {
    /// Find a category by slug
    Find {
        #[command(flatten)]
        tree: TreeArgs,
        slug: String,
    },

    /// Show the path from the root to a category
    Path {
        #[command(flatten)]
        tree: TreeArgs,
        slug: String,
    },

    /// List every category without children
    Leaves {
        #[command(flatten)]
        tree: TreeArgs,
    },

    /// Keep categories whose name or description contains a term
    Filter {
        #[command(flatten)]
        tree: TreeArgs,
        /// Search term (blank returns the tree unchanged)
        #[arg(default_value = "")]
        term: String,
    },

    /// Order top-level categories by display weight
    Sort {
        #[command(flatten)]
        tree: TreeArgs,
    },
}

impl CategoryCommand {
    pub fn into_query(self) -> (PathBuf, CategoryQuery) {
        match self {
            CategoryCommand::Find { tree, slug } => (tree.tree, CategoryQuery::Find { slug }),
            CategoryCommand::Path { tree, slug } => (tree.tree, CategoryQuery::Path { slug }),
            CategoryCommand::Leaves { tree } => (tree.tree, CategoryQuery::Leaves),
            CategoryCommand::Filter { tree, term } => (tree.tree, CategoryQuery::Filter { term }),
            CategoryCommand::Sort { tree } => (tree.tree, CategoryQuery::Sort),
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum BasketCommand {
    /// Apply a JSON script of add/remove/update/clear actions
    Replay {
        /// Basket script JSON file
        #[arg(short, long)]
        script: PathBuf,

        /// Stamp line item ids with a fixed time (reproducible output)
        #[arg(long)]
        frozen_clock: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Print the effective configuration
    Show,
}

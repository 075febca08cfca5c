//! Bazaar CLI - basket totals and category navigation for marketplace data
//!
//! Usage: bazaar [--json] [-v..] [--config FILE] <COMMAND>
//!
//! Commands:
//!   categories  Query a category tree (find, path, leaves, filter, sort)
//!   basket      Replay basket actions and show the totals
//!   config      Show the effective configuration

use std::process::ExitCode;

use anyhow::Result;
use bazaar::config::{Config, Verbosity};
use clap::Parser;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod ui;

use cli::{BasketCommand, Cli, Commands, ConfigCommand};
use ui::json::emit_event;
use ui::json::events::ErrorEvent;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let json = cli.json;
    let command = command_label(&cli.command);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if json {
                let _ = emit_event(&ErrorEvent::new(command, format!("{:#}", e)));
            } else {
                eprintln!("Error: {:#}", e);
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let (config, warnings) = Config::resolve(cli.config.as_deref(), &cwd)?;

    init_tracing(config.output.verbosity.bumped(cli.verbose));

    match cli.command {
        Commands::Categories { query } => {
            ui::output::print_config_warnings(&warnings);
            let (tree, query) = query.into_query();
            commands::categories::cmd_categories(&tree, query, &config, cli.json)
        }
        Commands::Basket {
            action: BasketCommand::Replay {
                script,
                frozen_clock,
            },
        } => {
            ui::output::print_config_warnings(&warnings);
            commands::basket::cmd_basket_replay(&script, frozen_clock, &config, cli.json)
        }
        Commands::Config {
            action: ConfigCommand::Show,
        } => commands::config::cmd_config_show(&config, &warnings, cli.json),
    }
}

/// Logs go to stderr so stdout stays parseable in `--json` mode.
/// `RUST_LOG` takes precedence over the configured verbosity.
fn init_tracing(verbosity: Verbosity) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity.filter_directive()));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init();
}

fn command_label(command: &Commands) -> &'static str {
    match command {
        Commands::Categories { .. } => "categories",
        Commands::Basket { .. } => "basket replay",
        Commands::Config { .. } => "config show",
    }
}

use std::path::Path;

use anyhow::{Context, Result};
use bazaar::application::{BasketReplay, ReplayReport};
use bazaar::config::Config;
use bazaar::domain::entities::Basket;
use bazaar::domain::ports::Clock;
use bazaar::infrastructure::{load_script, FixedClock};
use serde_json::json;
use tracing::debug;

use crate::ui::json::events::{CompleteEvent, DataEvent, StartEvent};
use crate::ui::json::{basket_value, emit_event};
use crate::ui::render::{render_basket, render_replay};

const COMMAND: &str = "basket replay";

pub fn cmd_basket_replay(script: &Path, frozen_clock: bool, config: &Config, json: bool) -> Result<()> {
    if json {
        emit_event(&StartEvent::new(COMMAND))?;
    }

    let actions = load_script(script)
        .with_context(|| format!("Failed to load basket script {}", script.display()))?;
    debug!(actions = actions.len(), frozen_clock, "loaded basket script");

    let replay = BasketReplay::new(config.basket.default_protection_fee);
    if frozen_clock {
        let mut basket = Basket::with_clock(FixedClock::default());
        let report = replay.run(&mut basket, &actions);
        finish(&basket, &report, json)
    } else {
        let mut basket = Basket::new();
        let report = replay.run(&mut basket, &actions);
        finish(&basket, &report, json)
    }
}

fn finish<C: Clock>(
    basket: &Basket<C>,
    report: &ReplayReport,
    json: bool,
) -> Result<()> {
    if json {
        emit_event(&DataEvent::new(
            "replay",
            COMMAND,
            json!({
                "changed": report.changed(),
                "ignored": report.ignored(),
                "steps": report.steps,
            }),
        ))?;
        emit_event(&DataEvent::new("basket", COMMAND, basket_value(basket)))?;
        emit_event(&CompleteEvent::success(COMMAND))?;
        return Ok(());
    }

    print!("{}", render_replay(report));
    println!();
    print!("{}", render_basket(basket));
    Ok(())
}

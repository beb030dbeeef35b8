//! Run a single poll cycle

use std::path::Path;

use anyhow::Context;
use chrono::Utc;

use routewatch::adapters::json::parse_timestamp;
use routewatch::adapters::{ConsoleSink, JsonFileFeed};
use routewatch::core::services::{RelevanceEngine, run_cycle};
use routewatch::output::{CycleSummary, OutputMode};

use super::setup::load_validated;

/// Fetch the feed once, print alerts and a summary
pub fn check(config: Option<&Path>, now: Option<&str>, mode: OutputMode) -> anyhow::Result<()> {
    let app = load_validated(config)?;

    let now = match now {
        Some(raw) => parse_timestamp(raw).with_context(|| format!("Invalid --now value: {raw}"))?,
        None => Utc::now(),
    };

    let feed = JsonFileFeed::new(&app.feed_path);
    let engine = RelevanceEngine::new(app.rules, &app.registry);
    let sink = ConsoleSink::new(mode);

    let report = run_cycle(&app.users, &feed, &engine, &sink, now)?;
    CycleSummary::from_report(&report, now.to_rfc3339()).render(mode);

    Ok(())
}

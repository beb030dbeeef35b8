//! Polling loop
//!
//! Sleeps, runs a cycle, repeats. A failed cycle is logged and the next
//! tick tries again; there is no other retry.

use std::path::Path;
use std::thread;
use std::time::Duration;

use chrono::Utc;
use log::{error, info};

use routewatch::adapters::{ConsoleSink, JsonFileFeed};
use routewatch::core::services::{RelevanceEngine, run_cycle};
use routewatch::output::{OutputMode, UserListResult};

use super::setup::load_validated;

/// Poll the feed until interrupted
pub fn watch(config: Option<&Path>, interval: Option<u64>, mode: OutputMode) -> anyhow::Result<()> {
    let app = load_validated(config)?;

    let interval = match interval {
        Some(0) => anyhow::bail!("--interval must be greater than zero"),
        Some(secs) => Duration::from_secs(secs),
        None => app.poll_interval,
    };

    if mode == OutputMode::Human {
        UserListResult::build(&app.users, &app.registry).render(mode);
        println!();
    }

    let feed = JsonFileFeed::new(&app.feed_path);
    let engine = RelevanceEngine::new(app.rules, &app.registry);
    let sink = ConsoleSink::new(mode);

    info!(
        "Watching {} for {} user(s), polling every {}s",
        feed.path().display(),
        app.users.len(),
        interval.as_secs()
    );

    loop {
        thread::sleep(interval);

        if let Err(e) = run_cycle(&app.users, &feed, &engine, &sink, Utc::now()) {
            error!("Poll failed: {e:#}");
        }
    }
}

//! Initialize routewatch in the current directory

use std::fs;
use std::path::Path;

use chrono::{DateTime, SecondsFormat, TimeDelta, Utc};

use routewatch::adapters::json::FeedRecord;
use routewatch::adapters::toml::sample_config;
use routewatch::output::{OperationResult, OutputMode};
use routewatch::paths::{CONFIG_FILE, FEED_FILE};

/// Write a starter config and a sample feed
pub fn init(force: bool, mode: OutputMode) -> anyhow::Result<()> {
    let config_path = Path::new(CONFIG_FILE);

    if config_path.exists() && !force {
        OperationResult {
            success: false,
            message: format!(
                "Already initialized ({CONFIG_FILE} exists). Use --force to overwrite."
            ),
        }
        .render(mode);
        return Ok(());
    }

    fs::write(config_path, sample_config(FEED_FILE))?;
    fs::write(FEED_FILE, sample_feed(Utc::now())?)?;

    OperationResult {
        success: true,
        message: format!(
            "Created {CONFIG_FILE} and {FEED_FILE}.\n\
             Run 'routewatch users' to see who watches what, then 'routewatch check'."
        ),
    }
    .render(mode);

    Ok(())
}

/// A handful of readings around `now`: some congested, one clear, one stale
fn sample_feed(now: DateTime<Utc>) -> anyhow::Result<String> {
    let record = |osm_id: u64, avg_ds: f64, age: TimeDelta| FeedRecord {
        osm_id,
        avg_ds,
        updated_at: Some((now - age).to_rfc3339_opts(SecondsFormat::Secs, true)),
    };

    let records = vec![
        record(1, 0.6, TimeDelta::minutes(10)),
        record(4, 2.0, TimeDelta::hours(1)),
        record(5, 1.2, TimeDelta::hours(9)),
        record(9, 1.4, TimeDelta::minutes(30)),
        record(99, 5.0, TimeDelta::zero()),
    ];

    Ok(serde_json::to_string_pretty(&records)?)
}

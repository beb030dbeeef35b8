//! Console alert sink
//!
//! Implements `AlertSink` by printing to stdout, one line per alert.

use std::io::{self, Write};

use colored::Colorize;
use log::error;

use crate::core::ports::AlertSink;
use crate::output::OutputMode;

/// Sink that prints alerts to stdout
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSink {
    mode: OutputMode,
}

impl ConsoleSink {
    /// Create a sink rendering in the given mode
    #[must_use]
    pub const fn new(mode: OutputMode) -> Self {
        Self { mode }
    }
}

impl AlertSink for ConsoleSink {
    fn publish(&self, user: &str, message: &str) {
        let line = format_alert_line(self.mode, user, message);
        let mut stdout = io::stdout().lock();
        if let Err(e) = writeln!(stdout, "{line}") {
            error!("Failed to deliver alert for {user}: {e}");
        }
    }
}

/// Render one alert line
///
/// Human mode: `ALERT for Alice: Congestion at ...`. JSON mode: a single
/// compact object per line.
#[must_use]
pub fn format_alert_line(mode: OutputMode, user: &str, message: &str) -> String {
    match mode {
        OutputMode::Human => format!("{} {message}", format!("ALERT for {user}:").red().bold()),
        OutputMode::Json => serde_json::json!({ "user": user, "message": message }).to_string(),
    }
}

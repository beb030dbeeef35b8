//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON. Alerts themselves are
//! printed by the console sink as they are published; the types here cover
//! the summaries around them.

use serde::Serialize;

use crate::core::models::User;
use crate::core::ports::LocationRegistry;
use crate::core::services::CycleReport;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable, one document per line)
    Json,
}

/// Summary of one poll cycle
#[derive(Debug, Serialize)]
pub struct CycleSummary {
    /// Reference time used for freshness (RFC 3339)
    pub checked_at: String,
    /// Observations returned by the feed
    pub observations: usize,
    /// Users evaluated
    pub users: usize,
    /// Alerts raised
    pub alerts: usize,
}

impl CycleSummary {
    /// Summarize a cycle report
    #[must_use]
    pub fn from_report(report: &CycleReport, checked_at: String) -> Self {
        Self {
            checked_at,
            observations: report.observations,
            users: report.users,
            alerts: report.alerts.len(),
        }
    }

    /// Render the summary based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.human_line()),
            OutputMode::Json => {
                println!("{}", serde_json::to_string(self).unwrap_or_default());
            },
        }
    }

    /// The human-readable summary line
    #[must_use]
    pub fn human_line(&self) -> String {
        if self.alerts == 0 {
            format!(
                "No alerts ({} observation(s) checked for {} user(s)).",
                self.observations, self.users
            )
        } else {
            format!(
                "{} alert(s) from {} observation(s) across {} user(s).",
                self.alerts, self.observations, self.users
            )
        }
    }
}

/// Users and what they watch
#[derive(Debug, Serialize)]
pub struct UserListResult {
    /// Users in configuration order
    pub users: Vec<UserInfo>,
}

/// One user's watch set
#[derive(Debug, Serialize)]
pub struct UserInfo {
    /// Display name
    pub name: String,
    /// Watched locations in id order
    pub locations: Vec<LocationInfo>,
}

/// A watched location with its description
#[derive(Debug, Serialize)]
pub struct LocationInfo {
    /// Location id
    pub id: u64,
    /// Description, if the registry has one
    pub description: Option<String>,
}

impl UserListResult {
    /// Build the listing from users and a registry
    #[must_use]
    pub fn build(users: &[User], registry: &dyn LocationRegistry) -> Self {
        let users = users
            .iter()
            .map(|user| UserInfo {
                name: user.name().to_string(),
                locations: user
                    .watched_ids()
                    .into_iter()
                    .map(|id| LocationInfo {
                        id: id.0,
                        description: registry.describe(id),
                    })
                    .collect(),
            })
            .collect();
        Self { users }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        if self.users.is_empty() {
            println!("No users configured.");
            return;
        }

        for user in &self.users {
            println!("\n{}:", user.name);
            if user.locations.is_empty() {
                println!("  (no watched locations)");
            }
            for loc in &user.locations {
                match &loc.description {
                    Some(desc) => println!("  {desc}"),
                    None => println!("  [{}] (no description)", loc.id),
                }
            }
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

/// Generic operation result for simple commands
#[derive(Debug, Serialize)]
pub struct OperationResult {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable message
    pub message: String,
}

impl OperationResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.message),
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }
}

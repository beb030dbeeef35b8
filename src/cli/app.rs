//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::commands;
use routewatch::output::OutputMode;

/// routewatch - Traffic alerts for watched routes
#[derive(Parser, Debug)]
#[command(
    name = "routewatch",
    version,
    about = "Traffic alerts for watched routes",
    long_about = "Match live traffic congestion data against the locations users care about.\n\n\
                  Each user watches a set of map nodes. Every poll, observations that are\n\
                  on a watched node, congested, and recent enough raise an alert."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Configuration file (default: ./routewatch.toml, then the user config dir)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write a starter routewatch.toml and sample traffic feed
    Init {
        /// Overwrite existing files
        #[arg(short, long)]
        force: bool,
    },

    /// List users and the locations they watch
    Users,

    /// Run one poll cycle and print any alerts
    Check {
        /// Reference time for freshness (RFC 3339); defaults to now
        #[arg(long, value_name = "TIME")]
        now: Option<String>,
    },

    /// Poll the feed repeatedly and print alerts as they arise
    Watch {
        /// Seconds between polls (overrides feed.poll_interval_secs)
        #[arg(short, long, value_name = "SECS")]
        interval: Option<u64>,
    },

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };
    let config = cli.config.as_deref();

    match cli.command {
        Some(Command::Init { force }) => commands::init(force, output_mode),
        Some(Command::Users) => commands::users(config, output_mode),
        Some(Command::Check { now }) => commands::check(config, now.as_deref(), output_mode),
        Some(Command::Watch { interval }) => commands::watch(config, interval, output_mode),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": routewatch::VERSION
                    })
                );
            } else {
                println!("routewatch v{}", routewatch::VERSION);
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": routewatch::VERSION,
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("routewatch v{}", routewatch::VERSION);
                println!("\nRun 'routewatch --help' for usage");
                println!("Run 'routewatch init' to get started");
            }
            Ok(())
        },
    }
}

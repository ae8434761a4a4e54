use clap::{Parser, Subcommand};
use jiff::civil::Date;

/// Daily task planner served over the Model Context Protocol
///
/// dayplan keeps a bucket of reusable tasks, a plan for the current day
/// chosen from that bucket, and a history of what every past day's plan
/// looked like. All state lives in memory for the lifetime of the process;
/// the plan resets on its own when the calendar date changes.
#[derive(Parser)]
#[command(version, about, name = "dp")]
pub struct Args {
    /// Pin "today" to a fixed date (YYYY-MM-DD) instead of the wall clock
    #[arg(long, global = true, value_parser = parse_today)]
    pub today: Option<Date>,

    /// Roll days over at local midnight instead of UTC midnight
    #[arg(long, global = true, conflicts_with = "today")]
    pub local_time: bool,

    /// Start with an empty bucket instead of the sample items
    #[arg(long, global = true)]
    pub empty: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the dayplan CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Start the MCP server on stdio (default)
    Serve,
    /// List the tools the MCP server exposes
    Tools,
}

fn parse_today(value: &str) -> Result<Date, String> {
    dayplan_core::params::parse_date("today", value).map_err(|e| e.to_string())
}

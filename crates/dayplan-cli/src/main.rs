//! dayplan CLI Application
//!
//! Runs the daily planning engine behind an MCP stdio server.

mod args;
mod mcp;

use std::sync::Arc;

use Commands::*;
use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use dayplan_core::{Clock, ManualClock, PlannerBuilder, SystemClock};
use log::info;
use mcp::{DayplanMcpServer, run_stdio_server};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        today,
        local_time,
        empty,
        command,
    } = Args::parse();

    let clock: Arc<dyn Clock> = match (today, local_time) {
        (Some(date), _) => {
            info!("Clock pinned to {date}");
            Arc::new(ManualClock::new(date))
        }
        (None, true) => Arc::new(SystemClock::local()),
        (None, false) => Arc::new(SystemClock::utc()),
    };

    let planner = PlannerBuilder::new()
        .with_clock(clock)
        .with_sample_items(!empty)
        .build();

    info!("dayplan started for {}", planner.today());

    match command {
        Some(Tools) => {
            for tool in DayplanMcpServer::new(planner).tools() {
                println!("{tool}");
            }
            Ok(())
        }
        Some(Serve) | None => {
            info!("Starting dayplan MCP server");
            run_stdio_server(DayplanMcpServer::new(planner))
                .await
                .context("MCP server failed")
        }
    }
}

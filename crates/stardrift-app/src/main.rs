//! `stardrift` command-line runner.
//!
//! Loads a config, flies one or more sessions with the autopilot and writes
//! a JSON summary of the run.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use stardrift_app::config::load_config;
use stardrift_app::game_loop;
use stardrift_core::enums::ShipKind;

#[derive(Debug, Parser)]
#[command(name = "stardrift", version, about = "Fly the stardrift asteroid field headless")]
struct Args {
    /// JSON simulation config. Missing fields take their defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the config seed.
    #[arg(long)]
    seed: Option<u64>,

    /// Simulation ticks to run.
    #[arg(long, default_value_t = 3000)]
    ticks: u64,

    /// Ship to fly: 0 delta, 1 cube, 2 cruiser.
    #[arg(long, default_value_t = 0, value_parser = clap::value_parser!(u8).range(0..=2))]
    ship: u8,

    /// Run on the paced 30Hz loop thread instead of as fast as possible.
    #[arg(long)]
    realtime: bool,

    /// Write the summary here instead of stdout.
    #[arg(long)]
    summary: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = load_config(args.config.as_deref(), args.seed)?;
    let ship = ShipKind::try_from(args.ship)?;
    info!(seed = config.seed, ?ship, ticks = args.ticks, realtime = args.realtime, "starting run");

    let summary = if args.realtime {
        game_loop::run_realtime(config, ship, args.ticks)?
    } else {
        game_loop::run_headless(config, ship, args.ticks)
    };

    let json = serde_json::to_string_pretty(&summary).context("serializing run summary")?;
    match &args.summary {
        Some(path) => std::fs::write(path, json)
            .with_context(|| format!("writing summary to {}", path.display()))?,
        None => println!("{json}"),
    }
    Ok(())
}

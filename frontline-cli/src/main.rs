//! `frontline-cli` reads one export directory (`daily_areas.json`, plus the
//! optional `events.json` and `metadata.json`) and prints a processed view
//! of a territorial-control layer as JSON or CSV:
//!
//! - `layer`: raw, interpolated and smoothed series
//! - `monthly`: month-over-month net change
//! - `rate`: centered rate of change in km² per 30 days
//! - `trend`: least-squares trend line
//! - `summary`: current area, net change and visible events
//! - `correlate`: Pearson r between two layers
//! - `info`: the export metadata
//!
//! Progress goes to stderr through `RUST_LOG`, e.g. `RUST_LOG=info`.

use clap::Parser;
use log::debug;

#[derive(Parser)]
#[command(
    name = "frontline-cli",
    version,
    about = "Territorial-control time-series toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: frontline_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let args = cli.command.dataset_args();
    debug!(
        "frontline-cli {} reading {}",
        env!("CARGO_PKG_VERSION"),
        args.data_dir.display()
    );
    frontline_cmd::run(cli.command).await
}

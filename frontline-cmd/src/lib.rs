//! Command implementations for the Frontline CLI.
//!
//! Every subcommand loads an export directory, builds the view state from
//! the shared flags, runs one processing step over the selected layer and
//! prints the result to stdout.

use anyhow::Context;
use clap::{Args, Subcommand};
use frontline_types::{DateRange, LayerType};
use frontline_utils::dates::parse_date;
use log::info;
use std::path::PathBuf;

pub mod loader;
pub mod output;
pub mod state;
pub mod summary;
pub mod territory;

use loader::Dataset;
use output::OutputFormat;
use state::{DashboardAction, DashboardState};

/// Flags shared by every subcommand.
#[derive(Args, Debug, Clone)]
pub struct DatasetArgs {
    /// Directory holding daily_areas.json, events.json and metadata.json
    #[arg(short = 'd', long, default_value = "data")]
    pub data_dir: PathBuf,

    /// Layer to process (e.g. ukraine_control_map, kursk_russian_advances)
    #[arg(short = 'l', long, default_value = LayerType::UKRAINE_CONTROL_MAP)]
    pub layer: String,

    /// First day to include, YYYY-MM-DD (defaults to the start of the export)
    #[arg(long)]
    pub start: Option<String>,

    /// Last day to include, YYYY-MM-DD (defaults to the end of the export)
    #[arg(long)]
    pub end: Option<String>,

    /// Use the raw control-map snapshots instead of the interpolated series
    #[arg(long)]
    pub raw: bool,

    /// Event names to select for overlays (repeatable)
    #[arg(short = 'e', long = "event")]
    pub events: Vec<String>,

    /// JSON file with processing parameters (threshold, medianWindow, ...)
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,
}

impl DatasetArgs {
    pub fn layer_type(&self) -> LayerType {
        LayerType::from(self.layer.as_str())
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the raw, interpolated and smoothed series of a layer
    Layer {
        #[command(flatten)]
        args: DatasetArgs,
    },

    /// Print month-over-month net change of a layer
    Monthly {
        #[command(flatten)]
        args: DatasetArgs,
    },

    /// Print the centered rolling rate of change (km² per 30 days)
    Rate {
        #[command(flatten)]
        args: DatasetArgs,
    },

    /// Print the least-squares trend line of a layer
    Trend {
        #[command(flatten)]
        args: DatasetArgs,
    },

    /// Print current area, net change and average monthly change
    Summary {
        #[command(flatten)]
        args: DatasetArgs,
    },

    /// Correlate two layers over the days they share
    Correlate {
        #[command(flatten)]
        args: DatasetArgs,

        /// Layer to compare against
        #[arg(short = 'o', long, default_value = LayerType::KURSK_RUSSIAN_ADVANCES)]
        other: String,

        /// Lag in days for the percent-change correlation (defaults to the config value)
        #[arg(long)]
        lag: Option<usize>,
    },

    /// Print the export metadata
    Info {
        #[command(flatten)]
        args: DatasetArgs,
    },
}

impl Command {
    pub fn dataset_args(&self) -> &DatasetArgs {
        match self {
            Command::Layer { args }
            | Command::Monthly { args }
            | Command::Rate { args }
            | Command::Trend { args }
            | Command::Summary { args }
            | Command::Correlate { args, .. }
            | Command::Info { args } => args,
        }
    }
}

/// Build the view state from the export's span and the command-line flags.
///
/// A requested range is clamped to the export's span; either bound may be
/// omitted. Without any span (empty export, no metadata) and without both
/// bounds, no date filtering is applied.
pub fn initial_state(dataset: &Dataset, args: &DatasetArgs) -> anyhow::Result<DashboardState> {
    let mut actions = Vec::new();
    let full = dataset.full_date_range();
    if let Some(full) = full {
        actions.push(DashboardAction::SetFullDateRange(full));
    }

    let start = args.start.as_deref().map(parse_date).transpose().context("invalid --start")?;
    let end = args.end.as_deref().map(parse_date).transpose().context("invalid --end")?;
    let requested = match (start, end, full) {
        (None, None, _) => None,
        (Some(start), Some(end), None) => Some(DateRange::new(start, end)?),
        (start, end, Some(full)) => {
            let range = DateRange::new(start.unwrap_or(full.start()), end.unwrap_or(full.end()))?;
            Some(range.clamp_to(&full))
        }
        (_, _, None) => anyhow::bail!("both --start and --end are required when the export has no dates"),
    };
    if let Some(range) = requested {
        actions.push(DashboardAction::SetDateRange(range));
    }

    if args.raw {
        actions.push(DashboardAction::ToggleInterpolation);
    }
    if !args.events.is_empty() {
        actions.push(DashboardAction::SetSelectedEvents(args.events.clone()));
    }

    Ok(DashboardState::default().reduce_all(actions))
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    let args = command.dataset_args();
    let config = loader::load_config(args.config.as_deref()).await?;
    let dataset = loader::load_dataset(&args.data_dir).await?;
    let state = initial_state(&dataset, args)?;
    let layer = args.layer_type();
    let format = args.format;

    if let Some(range) = state.date_range {
        let (start, end) = range.bounds();
        info!("Processing {} from {} to {}", layer, start, end);
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match &command {
        Command::Layer { .. } => territory::run_layer(&mut out, format, &state, &dataset.areas, &layer, &config),
        Command::Monthly { .. } => {
            territory::run_monthly(&mut out, format, &state, &dataset.areas, &layer, &config)
        }
        Command::Rate { .. } => territory::run_rate(&mut out, format, &state, &dataset.areas, &layer, &config),
        Command::Trend { .. } => territory::run_trend(&mut out, format, &state, &dataset.areas, &layer, &config),
        Command::Summary { .. } => summary::run_summary(&mut out, format, &state, &dataset, &layer, &config),
        Command::Correlate { other, lag, .. } => {
            let other = LayerType::from(other.as_str());
            let lag = lag.unwrap_or(config.percent_change_lag);
            summary::run_correlate(&mut out, format, &state, &dataset, (&layer, &other), lag, &config)
        }
        Command::Info { .. } => summary::run_info(&mut out, format, &dataset),
    }
}

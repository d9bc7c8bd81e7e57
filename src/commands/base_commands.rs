use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser)]
#[command(author, version, about)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Aggregate approved submissions into a day-bucketed milestone report
    Milestones {
        /// Submission export JSON file
        #[arg(short, long)]
        input: String,
        /// Output JSON file
        #[arg(short, long)]
        output: String,
        /// Count timestamps before this UTC hour towards the previous day
        #[arg(long, conflicts_with = "event_start")]
        day_start_hour: Option<u32>,
        /// Bucket by day index from this RFC 3339 instant instead of calendar dates
        #[arg(long)]
        event_start: Option<String>,
        /// Include per-team hourly breakdowns
        #[arg(long)]
        hourly: bool,
    },
    /// Rank teams by their approved submission totals
    Standings {
        /// Submission export JSON file
        #[arg(short, long)]
        input: String,
        /// Optional JSON output file; prints a table when omitted
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Validate and normalize a single submitted value
    Value {
        /// Raw value as typed by a participant (e.g. "2.5m")
        input: String,
    },
    /// Fetch all participants' hiscores into a new snapshot directory
    FetchHiscores {
        /// Event config YAML
        #[arg(short, long)]
        config: String,
    },
    /// Diff the earliest and latest snapshots into per-player gains
    Gains {
        /// Event config YAML
        #[arg(short, long)]
        config: String,
        /// Output JSON file
        #[arg(short, long)]
        output: String,
    },
    /// Fetch the latest prices for the event's tracked items
    Prices {
        /// Event config YAML
        #[arg(short, long)]
        config: String,
    },
    /// Plot per-team cumulative progress into a PNG chart
    PlotProgress {
        /// Submission export JSON file
        #[arg(short, long)]
        input: String,
        /// Output PNG file
        #[arg(short, long)]
        output: String,
        /// Count timestamps before this UTC hour towards the previous day
        #[arg(long, conflicts_with = "event_start")]
        day_start_hour: Option<u32>,
        /// Bucket by day index from this RFC 3339 instant instead of calendar dates
        #[arg(long)]
        event_start: Option<String>,
    },
    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

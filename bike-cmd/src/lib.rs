//! Command implementations for the bike-share CLI.
//!
//! Provides subcommands for summarizing the rental datasets over a date
//! range and for downloading them as local fixtures.

use bike_core::source::{DEFAULT_DAY_URL, DEFAULT_HOUR_URL};
use clap::Subcommand;
use std::time::Duration;

pub mod fetch;
pub mod summary;

/// Per-request timeout for dataset downloads.
pub(crate) const HTTP_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Subcommand)]
pub enum Command {
    /// Print headline totals, monthly sums and weather/season breakdowns
    Summary {
        /// Daily dataset: URL or file path
        #[arg(long, default_value = DEFAULT_DAY_URL)]
        day: String,

        /// Hourly dataset: URL or file path
        #[arg(long, default_value = DEFAULT_HOUR_URL)]
        hour: String,

        /// First date to include, YYYY-MM-DD (default: earliest date in the data)
        #[arg(short = 's', long)]
        start: Option<String>,

        /// Last date to include, YYYY-MM-DD (default: latest date in the data)
        #[arg(short = 'e', long)]
        end: Option<String>,

        /// Print the full view model as JSON
        #[arg(long)]
        json: bool,
    },

    /// Download both datasets and write them as day.csv and hour.csv
    Fetch {
        /// Output directory
        #[arg(short = 'o', long, default_value = "fixtures")]
        out_dir: String,

        #[arg(long, default_value = DEFAULT_DAY_URL)]
        day_url: String,

        #[arg(long, default_value = DEFAULT_HOUR_URL)]
        hour_url: String,
    },
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Summary {
            day,
            hour,
            start,
            end,
            json,
        } => summary::run_summary(&day, &hour, start.as_deref(), end.as_deref(), json).await,
        Command::Fetch {
            out_dir,
            day_url,
            hour_url,
        } => fetch::run_fetch(&out_dir, &day_url, &hour_url).await,
    }
}

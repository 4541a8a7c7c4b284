//! Fetch command: download both datasets into local CSV fixtures.

use anyhow::Context;
use bike_core::loader::{parse_daily, parse_hourly};
use bike_core::source::{DataSource, Loader};
use log::info;
use std::path::Path;

/// Download the daily and hourly datasets and write them to
/// `<out_dir>/day.csv` and `<out_dir>/hour.csv`.
///
/// Both bodies are parsed before anything is written, so a malformed
/// download never replaces a good fixture.
pub async fn run_fetch(out_dir: &str, day_url: &str, hour_url: &str) -> anyhow::Result<()> {
    let client = reqwest::Client::builder()
        .timeout(crate::HTTP_TIMEOUT)
        .build()?;
    let mut loader = Loader::new(client);

    let day_body = loader
        .text(&DataSource::parse(day_url))
        .await
        .with_context(|| format!("failed to fetch daily dataset from {}", day_url))?;
    let hour_body = loader
        .text(&DataSource::parse(hour_url))
        .await
        .with_context(|| format!("failed to fetch hourly dataset from {}", hour_url))?;

    let daily = parse_daily(&day_body).context("daily dataset is malformed")?;
    let hourly = parse_hourly(&hour_body).context("hourly dataset is malformed")?;

    let out = Path::new(out_dir);
    std::fs::create_dir_all(out).with_context(|| format!("failed to create {}", out.display()))?;
    std::fs::write(out.join("day.csv"), &day_body)?;
    std::fs::write(out.join("hour.csv"), &hour_body)?;

    info!(
        "Fetch complete. {} daily and {} hourly records written to {}",
        daily.len(),
        hourly.len(),
        out.display()
    );
    Ok(())
}

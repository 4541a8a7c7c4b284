//! bike-cli - Command line tool for summarizing bike-share rental data.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "bike-cli",
    version,
    about = "Bike-sharing rentals toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: bike_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    log::debug!("bike-cli starting");
    bike_cmd::run(cli.command).await
}

//! CHT CLI - Command line client for the heatwave trend endpoint.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "cht-cli",
    version,
    about = "Climate hazard trend analyzer"
)]
struct Cli {
    #[command(subcommand)]
    command: cht_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    log::debug!("Starting cht-cli");
    cht_cmd::run(cli.command).await
}

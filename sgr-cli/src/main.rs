//! sgr-cli - render a GitHub contribution calendar as an animated submarine SVG.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "sgr-cli",
    version,
    about = "Submarine contribution graph renderer"
)]
struct Cli {
    #[command(subcommand)]
    command: sgr_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    sgr_cmd::run(cli.command).await
}

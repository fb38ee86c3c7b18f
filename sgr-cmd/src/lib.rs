//! Command implementations for the submarine graph CLI.
//!
//! Provides subcommands for rendering a live contribution calendar fetched
//! from GitHub, or one saved to disk as a GraphQL response body.

use clap::Subcommand;
use std::path::PathBuf;

pub mod render;

use sgr_github::client::{DEFAULT_TIMEOUT_SECS, DEFAULT_USERNAME, GITHUB_GRAPHQL_URL};
use sgr_render::svg::DEFAULT_OUTPUT;

#[derive(Subcommand)]
pub enum Command {
    /// Fetch the trailing year of contributions and render the SVG
    Render {
        /// GitHub login whose calendar is rendered
        #[arg(short = 'u', long, default_value = DEFAULT_USERNAME)]
        user: String,

        /// Output path for the SVG (overwritten if present)
        #[arg(short = 'o', long, default_value = DEFAULT_OUTPUT)]
        output: PathBuf,

        /// GraphQL endpoint
        #[arg(long, default_value = GITHUB_GRAPHQL_URL)]
        endpoint: String,

        /// Request timeout in seconds
        #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
        timeout_secs: u64,

        /// Seed for the submarine's path, random when omitted
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Render the SVG from a saved GraphQL response body
    RenderFile {
        /// Path to a contribution calendar response JSON
        #[arg(short = 'i', long)]
        input: PathBuf,

        /// Output path for the SVG (overwritten if present)
        #[arg(short = 'o', long, default_value = DEFAULT_OUTPUT)]
        output: PathBuf,

        /// Seed for the submarine's path, random when omitted
        #[arg(long)]
        seed: Option<u64>,
    },
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Render {
            user,
            output,
            endpoint,
            timeout_secs,
            seed,
        } => {
            let fetch = sgr_github::client::FetchConfig {
                endpoint,
                username: user,
                timeout: std::time::Duration::from_secs(timeout_secs),
            };
            render::run_render(&fetch, &output, seed).await
        }
        Command::RenderFile {
            input,
            output,
            seed,
        } => render::run_render_file(&input, &output, seed),
    }
}

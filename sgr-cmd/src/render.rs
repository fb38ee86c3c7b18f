//! Fetch, bucketize and render pipeline.

use anyhow::Context;
use log::info;
use rand::{rngs::StdRng, SeedableRng};
use sgr_github::{
    bucket::colorize,
    calendar::parse_calendar,
    client::{fetch_contributions, token_from_env, FetchConfig},
    day_record::DayRecord,
};
use sgr_render::{render_svg, write_svg, GridConfig};
use std::path::Path;

fn rng_for(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Bucketize `days`, render them and write the SVG to `output`.
fn render_days(
    days: &[DayRecord],
    config: &GridConfig,
    output: &Path,
    seed: Option<u64>,
) -> anyhow::Result<()> {
    let colored = colorize(days, &config.palette);
    let svg = render_svg(&colored, config, &mut rng_for(seed));
    write_svg(output, &svg)?;
    info!("SVG saved as {}", output.display());
    println!("SVG saved as {}", output.display());
    Ok(())
}

fn announce_fetch(username: &str) {
    info!("Fetching GitHub contributions for {}...", username);
    println!("Fetching GitHub contributions for {}...", username);
}

/// Fetch the trailing year for `fetch.username` and render it.
pub async fn run_render(
    fetch: &FetchConfig,
    output: &Path,
    seed: Option<u64>,
) -> anyhow::Result<()> {
    let token = token_from_env()?;
    announce_fetch(&fetch.username);
    let days = fetch_contributions(fetch, &token).await?;
    render_days(&days, &GridConfig::default(), output, seed)
}

/// Render a contribution calendar saved as a GraphQL response body.
pub fn run_render_file(input: &Path, output: &Path, seed: Option<u64>) -> anyhow::Result<()> {
    let body = std::fs::read_to_string(input)
        .with_context(|| format!("Failed to read {}", input.display()))?;
    let days = parse_calendar(&body)?;
    info!("Loaded {} days from {}", days.len(), input.display());
    render_days(&days, &GridConfig::default(), output, seed)
}

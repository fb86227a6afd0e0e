//! `refurb collect`: tiles in, dataset out.
//!
//! Only configuration problems abort the run. Individual tiles that cannot be
//! enriched or priced still produce a listing.

use std::path::Path;

use refurb_core::{load_locales, AppConfig, Dataset};
use refurb_scraper::{collect_listings, retain_selected, PageClient, TileSnapshot};

pub(crate) async fn run_collect(
    config: &AppConfig,
    tiles_path: &Path,
    countries: &[String],
    output: Option<&Path>,
) -> anyhow::Result<()> {
    let locales = load_locales(&config.locales_path)?;
    let selected = locales.select(countries)?;

    let all_tiles = read_tiles(tiles_path)?;
    let tile_count = all_tiles.len();
    let tiles = retain_selected(all_tiles, &selected);
    if tiles.len() < tile_count {
        tracing::info!(
            dropped = tile_count - tiles.len(),
            "ignoring tiles from markets that were not selected"
        );
    }

    let client = PageClient::new(config.request_timeout_secs, &config.user_agent)?;
    let (dataset, summary) =
        collect_listings(tiles, &locales, &client, config.max_concurrent_listings).await;

    write_dataset(&dataset, output)?;
    if let Some(path) = output {
        println!(
            "wrote {} listings to {} ({} enriched, {} enrichment failures, {} unparsed prices)",
            summary.listings,
            path.display(),
            summary.enriched,
            summary.enrichment_failures,
            summary.missing_prices
        );
    }
    Ok(())
}

fn read_tiles(path: &Path) -> anyhow::Result<Vec<TileSnapshot>> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("failed to read tile file {}: {e}", path.display()))?;
    parse_tiles(&content)
        .map_err(|e| anyhow::anyhow!("invalid tile file {}: {e}", path.display()))
}

fn parse_tiles(content: &str) -> serde_json::Result<Vec<TileSnapshot>> {
    serde_json::from_str(content)
}

/// Writes `dataset` as pretty JSON to `output`, or stdout when `None`.
fn write_dataset(dataset: &Dataset, output: Option<&Path>) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(dataset)?;
    match output {
        Some(path) => std::fs::write(path, json + "\n")
            .map_err(|e| anyhow::anyhow!("failed to write {}: {e}", path.display()))?,
        None => println!("{json}"),
    }
    Ok(())
}

#[cfg(test)]
#[path = "collect_test.rs"]
mod tests;

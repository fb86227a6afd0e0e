//! `refurb inspect`: one-off spec extraction for a single product page.

use std::path::Path;

use refurb_core::{AppConfig, SpecSet};
use refurb_scraper::{extract, html_to_text, normalize, PageClient};

pub(crate) async fn run_inspect(
    config: &AppConfig,
    url: Option<&str>,
    file: Option<&Path>,
) -> anyhow::Result<()> {
    let text = match (url, file) {
        (Some(url), _) => {
            let client = PageClient::new(config.request_timeout_secs, &config.user_agent)?;
            client.fetch_page_text(url).await?
        }
        (None, Some(path)) => {
            let html = std::fs::read_to_string(path)
                .map_err(|e| anyhow::anyhow!("failed to read {}: {e}", path.display()))?;
            html_to_text(&html)
        }
        (None, None) => anyhow::bail!("either --url or --file is required"),
    };

    let specs = inspect_text(&text);
    println!("{}", serde_json::to_string_pretty(&specs)?);
    Ok(())
}

fn inspect_text(text: &str) -> SpecSet {
    let normalized = normalize(text);
    tracing::debug!(chars = normalized.chars().count(), "extracting specs from page text");
    extract(&normalized)
}

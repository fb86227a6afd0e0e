//! Batch processing of catalog tiles into a [`Dataset`].
//!
//! Tiles are independent: each one is resolved and assembled on its own,
//! with up to `max_concurrent` in flight. A tile that cannot be processed is
//! skipped without affecting the rest of the batch.

use chrono::Utc;
use futures::stream::{self, StreamExt};
use refurb_core::{Dataset, LocaleProfile, LocaleTable, ProductListing};

use crate::assemble::assemble;
use crate::client::SecondaryTextSource;
use crate::enrich::{resolve_with_outcome, EnrichmentOutcome};
use crate::types::TileSnapshot;

/// Per-run counters, logged when a batch completes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub tiles: usize,
    pub listings: usize,
    /// Tiles whose locale is not in the table.
    pub skipped: usize,
    pub enriched: usize,
    pub enrichment_failures: usize,
    pub missing_prices: usize,
}

enum TileOutcome {
    Listed(Box<ProductListing>, EnrichmentOutcome),
    Skipped,
}

/// Keeps only tiles that belong to one of the `selected` markets.
#[must_use]
pub fn retain_selected(tiles: Vec<TileSnapshot>, selected: &[&LocaleProfile]) -> Vec<TileSnapshot> {
    tiles
        .into_iter()
        .filter(|t| {
            selected
                .iter()
                .any(|p| p.country_code.eq_ignore_ascii_case(t.locale.trim()))
        })
        .collect()
}

/// Turns every tile into a [`ProductListing`].
///
/// Product pages are fetched through `source` only for tiles missing memory
/// or storage, once per tile and without retries.
pub async fn collect_listings<S>(
    tiles: Vec<TileSnapshot>,
    locales: &LocaleTable,
    source: &S,
    max_concurrent: usize,
) -> (Dataset, BatchSummary)
where
    S: SecondaryTextSource + Sync,
{
    let mut summary = BatchSummary {
        tiles: tiles.len(),
        ..BatchSummary::default()
    };
    let mut dataset = Dataset::new(Utc::now());

    let mut outcomes = stream::iter(tiles)
        .map(|tile| process_tile(tile, locales, source))
        .buffer_unordered(max_concurrent.max(1));

    while let Some(outcome) = outcomes.next().await {
        match outcome {
            TileOutcome::Listed(listing, enrichment) => {
                match enrichment {
                    EnrichmentOutcome::Enriched => summary.enriched += 1,
                    EnrichmentOutcome::FetchFailed => summary.enrichment_failures += 1,
                    EnrichmentOutcome::NotNeeded => {}
                }
                if listing.price_missing {
                    summary.missing_prices += 1;
                }
                summary.listings += 1;
                dataset.push(*listing);
            }
            TileOutcome::Skipped => summary.skipped += 1,
        }
    }

    tracing::info!(
        tiles = summary.tiles,
        listings = summary.listings,
        skipped = summary.skipped,
        enriched = summary.enriched,
        enrichment_failures = summary.enrichment_failures,
        missing_prices = summary.missing_prices,
        "batch complete"
    );

    (dataset, summary)
}

async fn process_tile<S>(tile: TileSnapshot, locales: &LocaleTable, source: &S) -> TileOutcome
where
    S: SecondaryTextSource + Sync,
{
    let Some(locale) = locales.get(&tile.locale) else {
        tracing::warn!(locale = %tile.locale, name = %tile.name, "skipping tile from unknown locale");
        return TileOutcome::Skipped;
    };

    let (specs, enrichment) = resolve_with_outcome(&tile.tile_text, || {
        tracing::info!(
            locale = %locale.country_code,
            url = %tile.product_url,
            "tile is missing specs; visiting product page"
        );
        source.secondary_text(&tile.product_url)
    })
    .await;

    let listing = assemble(tile.identity(), locale, &tile.price_text, specs);
    TileOutcome::Listed(Box::new(listing), enrichment)
}

#[cfg(test)]
mod tests {
    use std::future::{ready, Future};
    use std::sync::atomic::{AtomicUsize, Ordering};

    use rust_decimal::Decimal;

    use super::*;
    use crate::error::FetchError;

    struct StubSource {
        calls: AtomicUsize,
        page: Option<&'static str>,
    }

    impl StubSource {
        fn serving(page: &'static str) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                page: Some(page),
            }
        }

        fn failing() -> Self {
            Self {
                calls: AtomicUsize::new(0),
                page: None,
            }
        }
    }

    impl SecondaryTextSource for StubSource {
        fn secondary_text(
            &self,
            product_url: &str,
        ) -> impl Future<Output = Result<String, FetchError>> + Send {
            self.calls.fetch_add(1, Ordering::SeqCst);
            ready(self.page.map(str::to_owned).ok_or_else(|| FetchError::NotFound {
                url: product_url.to_owned(),
            }))
        }
    }

    fn table() -> LocaleTable {
        LocaleTable::new("EUR", vec![profile("DE"), profile("NL")]).expect("valid table")
    }

    fn profile(code: &str) -> LocaleProfile {
        LocaleProfile {
            country_code: code.to_owned(),
            source_url: format!("https://www.apple.com/{}/shop/refurbished/mac", code.to_lowercase()),
            currency_symbol: "€".to_owned(),
            currency_label: "EUR".to_owned(),
            reference_rate: Decimal::ONE,
            uses_comma_decimal: code != "IE",
        }
    }

    fn tile(locale: &str) -> TileSnapshot {
        TileSnapshot {
            locale: locale.to_owned(),
            name: format!("tile {locale}"),
            product_url: format!("https://www.apple.com/{locale}/p"),
            image_url: String::new(),
            price_text: "999,00 €".to_owned(),
            tile_text: "MacBook Air 8GB unified memory 256GB SSD".to_owned(),
        }
    }

    #[test]
    fn retain_selected_filters_by_locale_case_insensitively() {
        let de = profile("DE");
        let nl = profile("NL");
        let tiles = vec![tile("de"), tile("FR"), tile("NL"), tile("IE")];
        let kept = retain_selected(tiles, &[&de, &nl]);
        let locales: Vec<_> = kept.iter().map(|t| t.locale.as_str()).collect();
        assert_eq!(locales, vec!["de", "NL"]);
    }

    #[tokio::test]
    async fn complete_tiles_are_listed_without_fetching() {
        let source = StubSource::serving("32GB unified memory 2TB SSD");
        let tiles = vec![tile("DE"), tile("NL")];
        let (dataset, summary) = collect_listings(tiles, &table(), &source, 4).await;

        assert_eq!(source.calls.load(Ordering::SeqCst), 0);
        assert_eq!(dataset.len(), 2);
        assert_eq!(summary.listings, 2);
        assert_eq!(summary.enriched, 0);
        for listing in dataset.listings() {
            assert_eq!(listing.specs.ram_gb, Some(8));
            assert_eq!(listing.specs.storage_gb, Some(256));
            assert_eq!(listing.price_amount, Decimal::from(999));
        }
    }

    #[tokio::test]
    async fn incomplete_tile_is_enriched_once() {
        let source = StubSource::serving("Apple M2 Pro, 16GB unified memory, 1TB SSD");
        let mut incomplete = tile("DE");
        incomplete.tile_text = "Mac mini M2 Pro".to_owned();
        let (dataset, summary) =
            collect_listings(vec![incomplete, tile("NL")], &table(), &source, 2).await;

        assert_eq!(source.calls.load(Ordering::SeqCst), 1);
        assert_eq!(summary.enriched, 1);
        let mini = dataset
            .listings()
            .iter()
            .find(|l| l.locale == "DE")
            .expect("DE listing present");
        assert_eq!(mini.specs.ram_gb, Some(16));
        assert_eq!(mini.specs.storage_gb, Some(1024));
    }

    #[tokio::test]
    async fn failed_enrichment_still_produces_listing() {
        let source = StubSource::failing();
        let mut incomplete = tile("NL");
        incomplete.tile_text = "MacBook Pro".to_owned();
        incomplete.price_text = String::new();
        let (dataset, summary) = collect_listings(vec![incomplete], &table(), &source, 1).await;

        assert_eq!(source.calls.load(Ordering::SeqCst), 1);
        assert_eq!(summary.enrichment_failures, 1);
        assert_eq!(summary.missing_prices, 1);
        let listing = &dataset.listings()[0];
        assert!(listing.price_missing);
        assert_eq!(listing.specs.ram_gb, None);
    }

    #[tokio::test]
    async fn unknown_locale_is_skipped() {
        let source = StubSource::failing();
        let (dataset, summary) =
            collect_listings(vec![tile("XX"), tile("DE")], &table(), &source, 0).await;

        assert_eq!(dataset.len(), 1);
        assert_eq!(summary.tiles, 2);
        assert_eq!(summary.skipped, 1);
        assert_eq!(source.calls.load(Ordering::SeqCst), 0);
    }
}

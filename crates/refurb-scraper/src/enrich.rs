//! Two-pass spec resolution: the tile first, the product page only when the
//! tile leaves memory or storage unknown.

use std::future::Future;

use refurb_core::SpecSet;

use crate::error::FetchError;
use crate::extract::parse_specs;

/// What the secondary pass did for one listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnrichmentOutcome {
    /// The primary text resolved memory and storage; nothing was fetched.
    NotNeeded,
    /// The secondary text was fetched and merged.
    Enriched,
    /// The fetch failed; the primary result is kept as is.
    FetchFailed,
}

/// Resolves specs from `primary_text`, consulting `fetch_secondary` at most
/// once and only when memory or storage is still unknown.
///
/// Fields the primary pass resolved are never overwritten. A failed fetch is
/// logged and leaves the primary result untouched.
pub async fn resolve<F, Fut>(primary_text: &str, fetch_secondary: F) -> SpecSet
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<String, FetchError>>,
{
    resolve_with_outcome(primary_text, fetch_secondary).await.0
}

/// Same as [`resolve`], also reporting whether the secondary pass ran.
pub async fn resolve_with_outcome<F, Fut>(
    primary_text: &str,
    fetch_secondary: F,
) -> (SpecSet, EnrichmentOutcome)
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<String, FetchError>>,
{
    let mut specs = parse_specs(primary_text);
    if !specs.needs_enrichment() {
        return (specs, EnrichmentOutcome::NotNeeded);
    }

    match fetch_secondary().await {
        Ok(secondary_text) => {
            specs.merge_missing(parse_specs(&secondary_text));
            (specs, EnrichmentOutcome::Enriched)
        }
        Err(e) => {
            tracing::warn!(error = %e, "secondary text unavailable; keeping primary specs");
            (specs, EnrichmentOutcome::FetchFailed)
        }
    }
}

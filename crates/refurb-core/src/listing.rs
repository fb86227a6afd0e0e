use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::specs::SpecSet;

/// Identity fields the page collaborator reads off a listing tile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingIdentity {
    pub name: String,
    pub product_url: String,
    pub image_url: String,
}

/// One refurbished item as offered in one market.
///
/// Built once by the listing assembler and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductListing {
    /// Market country code, e.g. `"PL"`.
    pub locale: String,
    pub name: String,
    /// Price in the market currency. Zero when the raw price text could not
    /// be parsed; check [`ProductListing::price_missing`] before trusting it.
    pub price_amount: Decimal,
    /// ISO 4217 code of `price_amount`.
    pub currency_label: String,
    /// `price_amount` converted to the reference currency, rounded to cents.
    /// Always derived from `price_amount`.
    pub price_reference: Decimal,
    /// `true` when `price_amount` is the zero sentinel for an unparsable price.
    #[serde(default)]
    pub price_missing: bool,
    pub image_url: String,
    pub product_url: String,
    pub specs: SpecSet,
}

/// Append-only collection of listings produced by one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    pub generated_at: DateTime<Utc>,
    listings: Vec<ProductListing>,
}

impl Dataset {
    #[must_use]
    pub fn new(generated_at: DateTime<Utc>) -> Self {
        Self {
            generated_at,
            listings: Vec::new(),
        }
    }

    pub fn push(&mut self, listing: ProductListing) {
        self.listings.push(listing);
    }

    pub fn extend(&mut self, listings: impl IntoIterator<Item = ProductListing>) {
        self.listings.extend(listings);
    }

    #[must_use]
    pub fn listings(&self) -> &[ProductListing] {
        &self.listings
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.listings.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    /// Summarizes how many listings are missing memory, storage, or price.
    #[must_use]
    pub fn coverage(&self) -> CoverageReport {
        CoverageReport::from_listings(&self.listings)
    }
}

/// A listing with at least one unknown memory or storage field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CoverageGap {
    pub name: String,
    pub locale: String,
    pub missing_ram: bool,
    pub missing_storage: bool,
}

/// Data-quality summary of a set of listings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CoverageReport {
    pub total: usize,
    pub missing_ram: usize,
    pub missing_storage: usize,
    pub missing_price: usize,
    pub gaps: Vec<CoverageGap>,
}

impl CoverageReport {
    #[must_use]
    pub fn from_listings(listings: &[ProductListing]) -> Self {
        let mut report = CoverageReport {
            total: listings.len(),
            ..CoverageReport::default()
        };

        for listing in listings {
            let missing_ram = listing.specs.ram_gb.is_none();
            let missing_storage = listing.specs.storage_gb.is_none();
            if missing_ram {
                report.missing_ram += 1;
            }
            if missing_storage {
                report.missing_storage += 1;
            }
            if listing.price_missing {
                report.missing_price += 1;
            }
            if missing_ram || missing_storage {
                report.gaps.push(CoverageGap {
                    name: listing.name.clone(),
                    locale: listing.locale.clone(),
                    missing_ram,
                    missing_storage,
                });
            }
        }

        report
    }

    /// Share of listings (0–100) counted by `count`; `0.0` for an empty report.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn percent(&self, count: usize) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        count as f64 / self.total as f64 * 100.0
    }
}

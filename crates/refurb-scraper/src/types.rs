//! Shapes handed over by the page-retrieval layer.
//!
//! A browser collaborator renders each refurbished catalog page, scrolls it
//! until lazy tiles load, and writes one [`TileSnapshot`] per product tile.
//! Everything here is raw, unnormalized text exactly as the tile showed it.

use refurb_core::ListingIdentity;
use serde::{Deserialize, Serialize};

/// One product tile from a market's refurbished catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileSnapshot {
    /// Market country code the tile was read from, e.g. `"NL"`.
    pub locale: String,
    /// Tile heading, e.g. `"Refurbished 13-inch MacBook Air Apple M2 Chip ..."`.
    pub name: String,
    /// Absolute product page URL.
    pub product_url: String,
    /// Tile image URL. Empty when the tile had no image.
    #[serde(default)]
    pub image_url: String,
    /// Current-price text, currency symbol included, e.g. `"1.049,00 €"`.
    /// Empty when the tile showed no price.
    #[serde(default)]
    pub price_text: String,
    /// Flattened visible text of the whole tile.
    pub tile_text: String,
}

impl TileSnapshot {
    #[must_use]
    pub fn identity(&self) -> ListingIdentity {
        ListingIdentity {
            name: self.name.clone(),
            product_url: self.product_url.clone(),
            image_url: self.image_url.clone(),
        }
    }
}

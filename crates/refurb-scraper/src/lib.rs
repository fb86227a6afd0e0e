pub mod assemble;
pub mod client;
pub mod enrich;
pub mod error;
pub mod extract;
pub mod html;
pub mod pipeline;
pub mod price;
pub(crate) mod rules;
pub mod text;
pub mod types;

pub use assemble::assemble;
pub use client::{PageClient, SecondaryTextSource};
pub use enrich::{resolve, resolve_with_outcome, EnrichmentOutcome};
pub use error::FetchError;
pub use extract::{extract, parse_specs};
pub use html::html_to_text;
pub use pipeline::{collect_listings, retain_selected, BatchSummary};
pub use price::{normalize_price, to_reference, try_normalize_price, try_to_reference};
pub use text::normalize;
pub use types::TileSnapshot;

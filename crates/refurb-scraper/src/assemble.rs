//! Final composition of a [`ProductListing`].

use refurb_core::{ListingIdentity, LocaleProfile, ProductListing, SpecSet};
use rust_decimal::Decimal;

use crate::price::{try_normalize_price, try_to_reference};

/// Builds the listing record for one tile.
///
/// Never fails. A price that cannot be parsed, or whose reference conversion
/// overflows, becomes the zero sentinel with `price_missing` set.
#[must_use]
pub fn assemble(
    identity: ListingIdentity,
    locale: &LocaleProfile,
    raw_price: &str,
    specs: SpecSet,
) -> ProductListing {
    let priced = try_normalize_price(raw_price, locale)
        .and_then(|amount| try_to_reference(amount, locale).map(|reference| (amount, reference)));
    if priced.is_none() {
        tracing::warn!(
            locale = %locale.country_code,
            name = %identity.name,
            raw_price,
            "could not parse or convert price; recording zero"
        );
    }
    let (price_amount, price_reference) = priced.unwrap_or((Decimal::ZERO, Decimal::ZERO));

    ProductListing {
        locale: locale.country_code.clone(),
        name: identity.name,
        price_amount,
        currency_label: locale.currency_label.clone(),
        price_reference,
        price_missing: priced.is_none(),
        image_url: identity.image_url,
        product_url: identity.product_url,
        specs,
    }
}

//! Price text normalization and conversion into the reference currency.
//!
//! Storefronts mix conventions (`"1.299,00 €"`, `"€1,299.00"`,
//! `"5 299,00 zł"`), so the decimal separator is inferred from the string
//! itself and, when that is not enough, from the market's locale profile.

use std::str::FromStr;

use refurb_core::LocaleProfile;
use rust_decimal::Decimal;

/// Parses a raw price into an amount, or `None` if nothing numeric remains.
///
/// Rules, applied after dropping every character that is not a digit, `,`
/// or `.` (and any separator left dangling at either end, as in `"kr."`):
/// 1. Both `,` and `.` present: whichever occurs last is the decimal
///    separator; the other is removed as a thousands separator.
/// 2. Only `,` present: decimal separator for comma-decimal locales,
///    otherwise removed.
/// 3. Only `.` or no separator: parsed as is.
#[must_use]
pub fn try_normalize_price(raw: &str, locale: &LocaleProfile) -> Option<Decimal> {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == ',' || *c == '.')
        .collect();
    let cleaned = cleaned.trim_matches(|c| c == ',' || c == '.');

    let canonical = match (cleaned.rfind(','), cleaned.rfind('.')) {
        (Some(comma), Some(dot)) if comma > dot => cleaned.replace('.', "").replace(',', "."),
        (Some(_), Some(_)) => cleaned.replace(',', ""),
        (Some(_), None) if locale.uses_comma_decimal => cleaned.replace(',', "."),
        (Some(_), None) => cleaned.replace(',', ""),
        (None, _) => cleaned.to_owned(),
    };

    Decimal::from_str(&canonical).ok()
}

/// Like [`try_normalize_price`], but returns zero for unparsable input so a
/// single malformed price never aborts a batch.
#[must_use]
pub fn normalize_price(raw: &str, locale: &LocaleProfile) -> Decimal {
    try_normalize_price(raw, locale).unwrap_or(Decimal::ZERO)
}

/// Converts an amount in the market currency into the reference currency,
/// rounded to two decimal places. `None` if the product overflows `Decimal`.
#[must_use]
pub fn try_to_reference(amount: Decimal, locale: &LocaleProfile) -> Option<Decimal> {
    amount
        .checked_mul(locale.reference_rate)
        .map(|converted| converted.round_dp(2))
}

/// Like [`try_to_reference`], but returns zero on overflow.
#[must_use]
pub fn to_reference(amount: Decimal, locale: &LocaleProfile) -> Decimal {
    try_to_reference(amount, locale).unwrap_or(Decimal::ZERO)
}

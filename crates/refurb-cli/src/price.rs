//! `refurb price`: check how a raw price string normalizes for a market.

use refurb_core::{load_locales, AppConfig, LocaleProfile};
use refurb_scraper::{try_normalize_price, try_to_reference};

pub(crate) fn run_price(config: &AppConfig, raw: &str, country: &str) -> anyhow::Result<()> {
    let locales = load_locales(&config.locales_path)?;
    let profile = locales.get(country).ok_or_else(|| {
        anyhow::anyhow!(
            "unknown country code '{country}'; configured: {}",
            locales.codes().join(", ")
        )
    })?;
    println!(
        "{}",
        describe_price(raw, profile, locales.reference_currency())
    );
    Ok(())
}

fn describe_price(raw: &str, profile: &LocaleProfile, reference_currency: &str) -> String {
    let Some(amount) = try_normalize_price(raw, profile) else {
        return format!(
            "could not parse {raw:?}; a listing would record 0 {}",
            profile.currency_label
        );
    };
    match try_to_reference(amount, profile) {
        Some(reference) => format!(
            "{amount} {} = {reference} {reference_currency}",
            profile.currency_label
        ),
        None => format!(
            "{amount} {} is too large to convert; a listing would record 0 {}",
            profile.currency_label, profile.currency_label
        ),
    }
}

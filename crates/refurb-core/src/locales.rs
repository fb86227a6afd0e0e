//! Per-market locale profiles: where a store lives, how it writes numbers,
//! and how its currency converts into the reference currency.
//!
//! The table is loaded once at start-up and is read-only afterwards.

use std::collections::HashSet;
use std::path::Path;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::ConfigError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocaleProfile {
    /// Upper-case market code, e.g. `"DE"` or `"PL"`.
    pub country_code: String,
    /// Refurbished catalog page for this market.
    pub source_url: String,
    pub currency_symbol: String,
    /// ISO 4217 code, e.g. `"PLN"`.
    pub currency_label: String,
    /// Multiplier from this market's currency into the reference currency.
    pub reference_rate: Decimal,
    /// `true` when a lone comma in a price is a decimal separator (`"1299,00"`).
    pub uses_comma_decimal: bool,
}

#[derive(Debug, Deserialize)]
struct LocalesFile {
    reference_currency: String,
    locales: Vec<LocaleProfile>,
}

/// Validated, immutable set of locale profiles, one per market.
#[derive(Debug, Clone)]
pub struct LocaleTable {
    reference_currency: String,
    profiles: Vec<LocaleProfile>,
}

impl LocaleTable {
    /// Builds a table from already-parsed profiles.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] if a profile is malformed or a
    /// country code appears twice.
    pub fn new(
        reference_currency: impl Into<String>,
        profiles: Vec<LocaleProfile>,
    ) -> Result<Self, ConfigError> {
        let reference_currency = reference_currency.into();
        if reference_currency.trim().is_empty() {
            return Err(ConfigError::Validation(
                "reference_currency must be non-empty".to_string(),
            ));
        }
        validate_profiles(&profiles)?;
        Ok(Self {
            reference_currency,
            profiles,
        })
    }

    #[must_use]
    pub fn reference_currency(&self) -> &str {
        &self.reference_currency
    }

    /// Case-insensitive lookup by country code.
    #[must_use]
    pub fn get(&self, country_code: &str) -> Option<&LocaleProfile> {
        self.profiles
            .iter()
            .find(|p| p.country_code.eq_ignore_ascii_case(country_code.trim()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &LocaleProfile> {
        self.profiles.iter()
    }

    #[must_use]
    pub fn codes(&self) -> Vec<String> {
        self.profiles.iter().map(|p| p.country_code.clone()).collect()
    }

    /// Resolves the markets a run should visit.
    ///
    /// An empty request selects every configured market. Unknown codes are
    /// logged and skipped.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NoValidLocale`] when nothing in `requested`
    /// matches a configured market.
    pub fn select(&self, requested: &[String]) -> Result<Vec<&LocaleProfile>, ConfigError> {
        if requested.is_empty() {
            return Ok(self.profiles.iter().collect());
        }

        let mut seen = HashSet::new();
        let mut selected = Vec::new();
        for code in requested {
            match self.get(code) {
                Some(profile) => {
                    if seen.insert(profile.country_code.as_str()) {
                        selected.push(profile);
                    }
                }
                None => tracing::warn!(locale = %code, "skipping unknown locale"),
            }
        }

        if selected.is_empty() {
            return Err(ConfigError::NoValidLocale {
                requested: requested.to_vec(),
                available: self.codes(),
            });
        }
        Ok(selected)
    }
}

/// Load and validate the locale table from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_locales(path: &Path) -> Result<LocaleTable, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::LocalesFileIo {
        path: path.display().to_string(),
        source: e,
    })?;
    parse_locales(&content)
}

/// Parse and validate a locale table from YAML text.
///
/// # Errors
///
/// Returns `ConfigError` if the YAML is malformed or fails validation.
pub fn parse_locales(content: &str) -> Result<LocaleTable, ConfigError> {
    let file: LocalesFile = serde_yaml::from_str(content)?;
    LocaleTable::new(file.reference_currency, file.locales)
}

fn validate_profiles(profiles: &[LocaleProfile]) -> Result<(), ConfigError> {
    if profiles.is_empty() {
        return Err(ConfigError::Validation(
            "at least one locale must be configured".to_string(),
        ));
    }

    let mut seen_codes = HashSet::new();
    for profile in profiles {
        let code = profile.country_code.as_str();
        if code.is_empty() || !code.chars().all(|c| c.is_ascii_uppercase()) {
            return Err(ConfigError::Validation(format!(
                "country code '{code}' must be non-empty upper-case ASCII"
            )));
        }

        if !seen_codes.insert(code) {
            return Err(ConfigError::Validation(format!(
                "duplicate country code: '{code}'"
            )));
        }

        if profile.reference_rate <= Decimal::ZERO {
            return Err(ConfigError::Validation(format!(
                "locale '{code}' has non-positive reference_rate {}",
                profile.reference_rate
            )));
        }

        if profile.currency_label.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "locale '{code}' has an empty currency_label"
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "locales_test.rs"]
mod tests;

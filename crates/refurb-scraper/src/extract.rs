//! Spec extraction from normalized listing text.
//!
//! Every field is resolved independently from the rule tables in
//! [`crate::rules`]. Extraction never fails: a field no rule can resolve is
//! left as `None`.

use std::str::FromStr;

use refurb_core::{DeviceType, SpecSet};
use rust_decimal::Decimal;

use crate::rules::{
    CapacityRule, CHIP_PATTERN, DEVICE_RULES, MEMORY_RULES, SCREEN_PATTERN, STORAGE_RULES,
};
use crate::text::normalize;

/// Extracts a [`SpecSet`] from text that has already been through
/// [`normalize`].
#[must_use]
pub fn extract(normalized: &str) -> SpecSet {
    SpecSet {
        ram_gb: first_capacity(&MEMORY_RULES, normalized),
        storage_gb: first_capacity(&STORAGE_RULES, normalized),
        chip: parse_chip(normalized),
        screen_inches: parse_screen_inches(normalized),
        device_type: parse_device_type(normalized),
    }
}

/// Normalizes raw page or tile text, then runs [`extract`].
#[must_use]
pub fn parse_specs(raw: &str) -> SpecSet {
    extract(&normalize(raw))
}

fn first_capacity(rules: &[CapacityRule], text: &str) -> Option<u32> {
    rules.iter().find_map(|rule| {
        let value = rule.apply(text)?;
        tracing::trace!(rule = rule.name, value, "capacity rule matched");
        Some(value)
    })
}

/// `"m2 pro"` → `"M2 Pro"`, `"m3"` → `"M3"`.
fn parse_chip(text: &str) -> Option<String> {
    let caps = CHIP_PATTERN.captures(text)?;
    let generation = caps.name("generation")?.as_str().to_uppercase();
    Some(match caps.name("variant") {
        Some(variant) => format!("{generation} {}", title_case(variant.as_str())),
        None => generation,
    })
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Screen diagonals never carry thousands separators, so a comma is always
/// the decimal point here.
fn parse_screen_inches(text: &str) -> Option<Decimal> {
    let caps = SCREEN_PATTERN.captures(text)?;
    let size = caps.name("size")?.as_str().replace(',', ".");
    Decimal::from_str(&size).ok()
}

fn parse_device_type(text: &str) -> DeviceType {
    DEVICE_RULES
        .iter()
        .find(|rule| rule.matches(text))
        .map_or(DeviceType::default(), |rule| rule.device)
}

#[cfg(test)]
#[path = "extract_test.rs"]
mod tests;

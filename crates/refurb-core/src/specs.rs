use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Product line a listing belongs to. Anything unrecognized stays [`DeviceType::Mac`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DeviceType {
    #[default]
    #[serde(rename = "Mac")]
    Mac,
    #[serde(rename = "MacBook Air")]
    MacBookAir,
    #[serde(rename = "MacBook Pro")]
    MacBookPro,
    #[serde(rename = "Mac mini")]
    MacMini,
    #[serde(rename = "iMac")]
    IMac,
    #[serde(rename = "Mac Studio")]
    MacStudio,
    #[serde(rename = "Mac Pro")]
    MacPro,
}

impl DeviceType {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            DeviceType::Mac => "Mac",
            DeviceType::MacBookAir => "MacBook Air",
            DeviceType::MacBookPro => "MacBook Pro",
            DeviceType::MacMini => "Mac mini",
            DeviceType::IMac => "iMac",
            DeviceType::MacStudio => "Mac Studio",
            DeviceType::MacPro => "Mac Pro",
        }
    }
}

impl std::fmt::Display for DeviceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Device attributes extracted from free marketing text.
///
/// Every field except `device_type` is independently optional: `None` means
/// "unknown", never zero. Storage is always expressed in gigabytes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecSet {
    pub ram_gb: Option<u32>,
    pub storage_gb: Option<u32>,
    /// Canonical chip name, e.g. `"M2"` or `"M2 Pro"`.
    pub chip: Option<String>,
    pub screen_inches: Option<Decimal>,
    #[serde(default)]
    pub device_type: DeviceType,
}

impl SpecSet {
    /// `true` when memory or storage is still unknown and a richer text
    /// source is worth consulting.
    #[must_use]
    pub fn needs_enrichment(&self) -> bool {
        self.ram_gb.is_none() || self.storage_gb.is_none()
    }

    /// Fills every field that is still `None` from `other`.
    ///
    /// Fields already set are never overwritten. `device_type` always has a
    /// value and is therefore kept as is.
    pub fn merge_missing(&mut self, other: SpecSet) {
        if self.ram_gb.is_none() {
            self.ram_gb = other.ram_gb;
        }
        if self.storage_gb.is_none() {
            self.storage_gb = other.storage_gb;
        }
        if self.chip.is_none() {
            self.chip = other.chip;
        }
        if self.screen_inches.is_none() {
            self.screen_inches = other.screen_inches;
        }
    }
}

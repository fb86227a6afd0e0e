//! Ordered pattern tables for spec extraction.
//!
//! Each field owns a list of rules tried top to bottom; the first rule that
//! matches anywhere in the text decides the value. Specific, keyworded
//! patterns sit above generic ones so a storage figure is never read as
//! memory. All patterns expect text already passed through
//! [`crate::text::normalize`].

use std::sync::LazyLock;

use refurb_core::DeviceType;
use regex::Regex;

/// Connector words allowed between a memory capacity and its keyword, e.g.
/// `"8 go de mémoire unifiée"`. Nothing else may sit in between.
const MEMORY_CONNECTORS: &[&str] = &["de", "of", "van", "z"];

/// Capacity units, in lowercase. `go`/`to` are the French spellings.
const GB_UNITS: &str = "gb|go";
const GB_OR_TB_UNITS: &str = "gb|go|tb|to";

/// Locale phrases for Apple's "unified memory".
const UNIFIED_MEMORY_PHRASES: &[&str] = &[
    "unified memory",
    r"gemeinsamer\s*arbeitsspeicher",
    r"mémoire\s*unifiée",
    r"zunifikowanej\s*pamięci",
    r"pamięć\s*ram",
    r"centraal\s*geheugen",
    r"memoria\s*unificada",
    r"memória\s*unificada",
    r"enhetligt\s*minne",
    r"samlet\s*hukommelse",
    r"sjednocené\s*paměti",
    r"sjednocená\s*paměť",
    r"enotnega\s*pomnilnika",
];

/// Generic memory words, tried only after every unified-memory phrase fails.
const MEMORY_KEYWORDS: &[&str] = &[
    "ram",
    "memory",
    "arbeitsspeicher",
    "mémoire",
    "memoria",
    "memória",
    "pamięć",
    "geheugen",
    "minne",
    "hukommelse",
    "paměť",
    "pomnilnik",
];

/// Words that mark a capacity as disk storage when they follow it.
const STORAGE_KEYWORDS: &[&str] = &[
    "ssd",
    "stockage",
    "opslag",
    "almacenamiento",
    "armazenamento",
    "lagring",
    "úložiště",
    r"pamięci\s*masowej",
];

/// Storage labels that introduce a capacity, e.g. `"ssd van 256 gb"`.
const STORAGE_LEADS: &[&str] = &["ssd", "opslag", "stockage"];

/// "of"/"from" equivalents between a storage label and its capacity.
const STORAGE_PREPOSITIONS: &[&str] = &["van", "de", "von", "z"];

/// Spec-sheet headings placed before a storage capacity.
const CAPACITY_LABELS: &[&str] = &[
    "storage",
    "capacity",
    "kapazität",
    "capacité",
    "capacidad",
    "capaciteit",
    "pojemność",
];

/// A capacity pattern with named groups `value` (digits) and `unit`.
pub(crate) struct CapacityRule {
    pub(crate) name: &'static str,
    pattern: Regex,
}

impl CapacityRule {
    fn new(name: &'static str, pattern: &str) -> Self {
        Self {
            name,
            pattern: Regex::new(pattern).expect("valid capacity regex"),
        }
    }

    /// Returns the first match in `text` converted to gigabytes.
    ///
    /// Terabyte units are multiplied by 1024. Numbers that overflow `u32`
    /// count as no match.
    pub(crate) fn apply(&self, text: &str) -> Option<u32> {
        let caps = self.pattern.captures(text)?;
        let value: u32 = caps.name("value")?.as_str().parse().ok()?;
        match caps.name("unit")?.as_str() {
            "tb" | "to" => value.checked_mul(1024),
            _ => Some(value),
        }
    }
}

fn alternation(words: &[&str]) -> String {
    words.join("|")
}

/// Memory rules. There is deliberately no bare `"<n> gb"` fallback.
pub(crate) static MEMORY_RULES: LazyLock<Vec<CapacityRule>> = LazyLock::new(|| {
    vec![
        CapacityRule::new(
            "unified memory phrase",
            &format!(
                r"(?P<value>\d+)\s*(?P<unit>{GB_UNITS})\b\s*(?:(?:{})\s+)?(?:{})",
                alternation(MEMORY_CONNECTORS),
                alternation(UNIFIED_MEMORY_PHRASES)
            ),
        ),
        CapacityRule::new(
            "memory keyword",
            &format!(
                r"(?P<value>\d+)\s*(?P<unit>{GB_UNITS})\b\s*(?:(?:{})\s+)?\b(?:{})\b",
                alternation(MEMORY_CONNECTORS),
                alternation(MEMORY_KEYWORDS)
            ),
        ),
    ]
});

pub(crate) static STORAGE_RULES: LazyLock<Vec<CapacityRule>> = LazyLock::new(|| {
    vec![
        CapacityRule::new(
            "ssd before capacity",
            &format!(r"\bssd\s+(?P<value>\d+)\s*(?P<unit>{GB_OR_TB_UNITS})\b"),
        ),
        CapacityRule::new(
            "storage label with preposition",
            &format!(
                r"\b(?:{})\s*(?:{})\s+(?P<value>\d+)\s*(?P<unit>{GB_OR_TB_UNITS})\b",
                alternation(STORAGE_LEADS),
                alternation(STORAGE_PREPOSITIONS)
            ),
        ),
        CapacityRule::new(
            "capacity before storage keyword",
            &format!(
                r"(?P<value>\d+)\s*(?P<unit>{GB_OR_TB_UNITS})\s*(?:(?:{})\s+)?(?:{})",
                alternation(STORAGE_PREPOSITIONS),
                alternation(STORAGE_KEYWORDS)
            ),
        ),
        CapacityRule::new(
            "capacity label",
            &format!(
                r"\b(?:{})\s*:?\s*(?P<value>\d+)\s*(?P<unit>{GB_OR_TB_UNITS})\b",
                alternation(CAPACITY_LABELS)
            ),
        ),
    ]
});

/// Chip generation (`m1`..`m5`) with an optional tier qualifier.
pub(crate) static CHIP_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?P<generation>m[1-5])\s*(?P<variant>pro|max|ultra)?\b")
        .expect("valid chip regex")
});

/// Decimal diagonal directly followed by an inch mark, e.g. `13,6"` or `14.2”`.
pub(crate) static SCREEN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?P<size>\d+[,.]\d+)["”″]"#).expect("valid screen regex")
});

/// A device category recognized when every one of its word patterns matches.
pub(crate) struct DeviceRule {
    pub(crate) device: DeviceType,
    patterns: Vec<Regex>,
}

impl DeviceRule {
    fn new(device: DeviceType, patterns: &[&str]) -> Self {
        Self {
            device,
            patterns: patterns
                .iter()
                .map(|p| Regex::new(p).expect("valid device regex"))
                .collect(),
        }
    }

    pub(crate) fn matches(&self, text: &str) -> bool {
        self.patterns.iter().all(|p| p.is_match(text))
    }
}

/// Device categories in priority order. Words are matched on boundaries, so
/// `"mac-mini"` counts and `"minimum"` does not.
pub(crate) static DEVICE_RULES: LazyLock<Vec<DeviceRule>> = LazyLock::new(|| {
    vec![
        DeviceRule::new(DeviceType::MacBookAir, &[r"\bmacbook\s*air\b"]),
        DeviceRule::new(DeviceType::MacBookPro, &[r"\bmacbook\s*pro\b"]),
        DeviceRule::new(DeviceType::MacMini, &[r"\bmini\b"]),
        DeviceRule::new(DeviceType::IMac, &[r"\bimac\b"]),
        DeviceRule::new(DeviceType::MacStudio, &[r"\bstudio\b"]),
        DeviceRule::new(DeviceType::MacPro, &[r"\bpro\b", r"\bmac\b"]),
    ]
});

#[cfg(test)]
mod tests {
    use super::*;

    fn rule<'a>(rules: &'a [CapacityRule], name: &str) -> &'a CapacityRule {
        rules
            .iter()
            .find(|r| r.name == name)
            .unwrap_or_else(|| panic!("no rule named {name}"))
    }

    #[test]
    fn unified_memory_rule_accepts_locale_phrases() {
        let r = rule(&MEMORY_RULES, "unified memory phrase");
        assert_eq!(r.apply("8 gb gemeinsamer arbeitsspeicher"), Some(8));
        assert_eq!(r.apply("16 go de mémoire unifiée"), Some(16));
        assert_eq!(r.apply("24 gb zunifikowanej pamięci"), Some(24));
        assert_eq!(r.apply("8 gb centraal geheugen"), Some(8));
        assert_eq!(r.apply("8 gb enhetligt minne"), Some(8));
    }

    #[test]
    fn unified_memory_rule_rejects_keyword_past_window() {
        let r = rule(&MEMORY_RULES, "unified memory phrase");
        assert_eq!(
            r.apply("8 gb and a very long marketing sentence before unified memory"),
            None
        );
    }

    #[test]
    fn memory_keyword_rule_ignores_storage_followed_by_memory_word() {
        let r = rule(&MEMORY_RULES, "memory keyword");
        assert_eq!(r.apply("256 gb ssd storage, memory 8gb"), None);
    }

    #[test]
    fn memory_window_does_not_cross_other_numbers() {
        let r = rule(&MEMORY_RULES, "unified memory phrase");
        assert_eq!(r.apply("256 gb ssd 8 gb unified memory"), Some(8));
    }

    #[test]
    fn memory_keyword_rule_needs_word_start() {
        let r = rule(&MEMORY_RULES, "memory keyword");
        assert_eq!(r.apply("16 gb ram"), Some(16));
        assert_eq!(r.apply("16 gb program"), None);
    }

    #[test]
    fn ssd_before_capacity_rule() {
        let r = rule(&STORAGE_RULES, "ssd before capacity");
        assert_eq!(r.apply("dysk ssd 256 gb"), Some(256));
        assert_eq!(r.apply("ssd 1 tb"), Some(1024));
    }

    #[test]
    fn storage_label_with_preposition_rule() {
        let r = rule(&STORAGE_RULES, "storage label with preposition");
        assert_eq!(r.apply("ssd van 512 gb"), Some(512));
        assert_eq!(r.apply("stockage de 2 to"), Some(2048));
        assert_eq!(r.apply("ssd z 256 gb"), Some(256));
    }

    #[test]
    fn capacity_before_storage_keyword_rule() {
        let r = rule(&STORAGE_RULES, "capacity before storage keyword");
        assert_eq!(r.apply("256gb ssd"), Some(256));
        assert_eq!(r.apply("512 go de stockage"), Some(512));
        assert_eq!(r.apply("1 tb lagring"), Some(1024));
        assert_eq!(r.apply("256 gb pamięci masowej"), Some(256));
    }

    #[test]
    fn capacity_label_rule() {
        let r = rule(&STORAGE_RULES, "capacity label");
        assert_eq!(r.apply("capacity: 512gb"), Some(512));
        assert_eq!(r.apply("kapazität 1 tb"), Some(1024));
    }

    #[test]
    fn capacity_overflow_is_no_match() {
        let r = rule(&STORAGE_RULES, "ssd before capacity");
        assert_eq!(r.apply("ssd 99999999999 gb"), None);
        assert_eq!(r.apply("ssd 4294967 tb"), None);
    }

    fn device(text: &str) -> Option<DeviceType> {
        DEVICE_RULES.iter().find(|r| r.matches(text)).map(|r| r.device)
    }

    #[test]
    fn device_words_match_across_hyphens_and_line_breaks() {
        assert_eq!(device("mac\u{2011}mini m4"), Some(DeviceType::MacMini));
        assert_eq!(device("mac-mini"), Some(DeviceType::MacMini));
        assert_eq!(device("mac\nstudio m2 max"), Some(DeviceType::MacStudio));
        assert_eq!(device("macbook\nair"), Some(DeviceType::MacBookAir));
    }

    #[test]
    fn device_words_need_boundaries() {
        assert_eq!(device("minimum 8gb"), None);
        assert_eq!(device("studios and professionals"), None);
        assert_eq!(device("imacs"), None);
    }
}

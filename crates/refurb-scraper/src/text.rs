//! Text canonicalization shared by every extraction rule.

/// Space-like code points that storefronts use between numbers and units
/// (`"8\u{a0}GB"`, `"1\u{202f}299"`).
const SPACE_VARIANTS: [char; 5] = [
    '\u{00a0}', // no-break space
    '\u{2007}', // figure space
    '\u{2009}', // thin space
    '\u{200a}', // hair space
    '\u{202f}', // narrow no-break space
];

/// Replaces non-breaking and thin space variants with `' '` and lowercases.
///
/// Repeated whitespace is left alone; the extraction patterns tolerate it.
#[must_use]
pub fn normalize(raw: &str) -> String {
    raw.chars()
        .map(|c| if SPACE_VARIANTS.contains(&c) { ' ' } else { c })
        .collect::<String>()
        .to_lowercase()
}

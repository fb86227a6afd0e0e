//! Flattens product-page HTML into the visible text the extractor reads.
//!
//! Product pages carry marketing copy and footers that mention unrelated
//! capacities, so the overview, tech-spec and title panels are read first.
//! The whole document is used only when none of them exist.

use std::sync::LazyLock;

use scraper::node::Node;
use scraper::{ElementRef, Html, Selector};

/// Spec-bearing regions of an Apple product page, in reading order.
const PANEL_SELECTORS: [&str; 4] = [
    ".rc-pdsection-panel.Overview-panel",
    ".rc-pdsection-panel.TechSpecs-panel",
    ".rf-tech-specs-section",
    ".rf-pdp-title",
];

static PANELS: LazyLock<Vec<Selector>> = LazyLock::new(|| {
    PANEL_SELECTORS
        .iter()
        .map(|s| Selector::parse(s).expect("valid panel selector"))
        .collect()
});

/// Elements whose text content is never rendered.
const INVISIBLE: [&str; 4] = ["script", "style", "noscript", "template"];

/// Converts an HTML document into a single line of visible text.
///
/// Entities are decoded by the HTML parser; text pieces are joined with a
/// space and whitespace runs collapse to one space.
#[must_use]
pub fn html_to_text(html: &str) -> String {
    let document = Html::parse_document(html);

    let mut matched_panel = false;
    let mut pieces = Vec::new();
    for selector in PANELS.iter() {
        for panel in document.select(selector) {
            matched_panel = true;
            pieces.push(visible_text(panel));
        }
    }

    if !matched_panel {
        tracing::debug!("no spec panels found; reading whole page");
        pieces.push(visible_text(document.root_element()));
    }

    collapse_whitespace(&pieces.join(" "))
}

fn visible_text(element: ElementRef<'_>) -> String {
    let pieces: Vec<&str> = element
        .descendants()
        .filter_map(|node| {
            let Node::Text(text) = node.value() else {
                return None;
            };
            let hidden = node.ancestors().any(|ancestor| {
                ancestor
                    .value()
                    .as_element()
                    .is_some_and(|el| INVISIBLE.contains(&el.name()))
            });
            (!hidden).then_some(text.trim())
        })
        .filter(|piece| !piece.is_empty())
        .collect();
    pieces.join(" ")
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

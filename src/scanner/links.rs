// src/scanner/links.rs
// =============================================================================
// This module extracts hyperlink targets from HTML.
//
// We use the `scraper` crate which:
// - Parses HTML into a DOM (Document Object Model)
// - Is built on html5ever (Mozilla's HTML parser)
// - Recovers a best-effort tree from ANY input - malformed or truncated
//   markup never makes parsing fail, it just yields fewer elements
//
// The contract here is deliberately minimal: we return the raw href value
// of every anchor, in document order. No resolving against the page URL,
// no deduplication, no filtering of mailto:/javascript:/fragment targets.
// Any such policy belongs to the caller, not to extraction.
// =============================================================================

use scraper::{Html, Selector};

// Extracts every anchor href from HTML content
//
// Parameters:
//   html: the HTML content to parse (borrowed as &str)
//
// Returns: Vec<String> of raw href values in document order
//
// Example:
//   html = r#"<a href="/a">x</a><a href="/b">y</a>"#
//   result = ["/a", "/b"]
//
// Anchors with a missing or empty href are skipped. Unparseable input and
// "no anchors found" both come back as an empty vec, never an error.
pub fn extract_hyperlinks(html: &str) -> Vec<String> {
    let mut links = Vec::new();

    // html5ever's parser is lossless-tolerant: this call cannot fail
    let document = Html::parse_document(html);

    // Selector::parse returns Result, so we use .unwrap() which panics on
    // error. This is OK here because our selector is a constant and known
    // to be valid.
    let selector = Selector::parse("a").unwrap();

    for element in document.select(&selector) {
        match element.value().attr("href") {
            Some(href) if !href.is_empty() => links.push(href.to_string()),
            // No href attribute, or href="" - nothing to report
            _ => {}
        }
    }

    links
}

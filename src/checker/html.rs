// src/checker/html.rs
// =============================================================================
// This module extracts links from HTML pages.
//
// We use the `scraper` crate which:
// - Parses HTML into a DOM (Document Object Model)
// - Supports CSS selectors for finding elements
// - Is built on html5ever (Mozilla's HTML parser), so broken markup still
//   parses the way a browser would parse it
//
// Links are resolved with `resolve::resolve_reference` and filtered down to
// HTTP(S). Deduplication and the per-page cap happen in crawl::page.
// =============================================================================

use scraper::{Html, Selector};
use url::Url;

use super::resolve::{is_checkable, resolve_reference};

// Extracts every checkable link from HTML content, in document order
//
// Parameters:
//   html: the HTML content to parse
//   base: the URL of the page (for resolving relative links)
//
// Returns: absolute http/https URLs, duplicates included
//
// Example:
//   html = "<a href='/docs'>Docs</a><a href='mailto:me@example.com'>Mail</a>"
//   base = "https://example.com"
//   result = ["https://example.com/docs"]
pub fn extract_html_links(html: &str, base: &Url) -> Vec<String> {
    let document = Html::parse_document(html);

    // Constant selector, known to be valid
    let selector = Selector::parse("a[href]").unwrap();

    document
        .select(&selector)
        .filter_map(|element| element.value().attr("href"))
        .filter_map(|href| resolve_reference(base, href))
        .filter(is_checkable)
        .map(String::from)
        .collect()
}

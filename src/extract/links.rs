// src/extract/links.rs
// =============================================================================
// This module finds link candidates in a parsed HTML document.
//
// We use the `scraper` crate which:
// - Parses HTML into a DOM (Document Object Model)
// - Supports CSS selectors for finding elements
// - Is built on html5ever (Mozilla's HTML parser)
//
// A "link candidate" is an href value together with the <a> element that
// owns it. The crawl session needs both: the href to match against the
// query, and the anchor node to resolve a title from its subtree.
//
// Rust concepts:
// - Lifetimes: a LinkCandidate borrows from the Html document, so the
//   document must outlive every candidate taken from it
// =============================================================================

use scraper::{ElementRef, Html, Selector};

// One href paired with the anchor element it came from
//
// This is a transient value: produced by one document scan, consumed
// within the same traversal step, never stored past the document.
#[derive(Debug, Clone, Copy)]
pub struct LinkCandidate<'a> {
    /// The raw href attribute value, exactly as the parser delivered it
    pub href: &'a str,
    /// The owning <a> element, used for title resolution
    pub anchor: ElementRef<'a>,
}

// Extracts every anchor's href from a document, in document order
//
// Parameters:
//   document: the parsed HTML document (borrowed)
//
// Returns: Vec of LinkCandidate, one per <a> element that carries an
// href attribute. Anchors without href contribute nothing.
//
// Notes:
// - Emission order is document order (scraper's select() walks the
//   tree in pre-order).
// - If an anchor somehow had two href attributes, html5ever keeps the
//   first one, so "first occurrence wins" holds for free.
// - No filtering happens here: empty hrefs and relative hrefs are
//   emitted as-is. The crawl session decides what is followable.
pub fn link_candidates(document: &Html) -> Vec<LinkCandidate<'_>> {
    // Selector::parse returns Result, so we use .unwrap() which panics on error
    // This is OK here because our selector is a constant and known to be valid
    let selector = Selector::parse("a").unwrap();

    let mut candidates = Vec::new();
    for anchor in document.select(&selector) {
        if let Some(href) = anchor.value().attr("href") {
            candidates.push(LinkCandidate { href, anchor });
        }
    }

    candidates
}

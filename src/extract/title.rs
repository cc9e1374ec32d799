// src/extract/title.rs
// =============================================================================
// This module resolves a human-readable title for an anchor element.
//
// The heuristic: news sites wrap the headline text of a teaser link in a
// heading or a span somewhere inside the <a>. We scan the anchor's
// descendants for elements on a small allow-list and take their text.
//
// Quirk, preserved on purpose: when SEVERAL qualifying descendants exist,
// the LAST one in document order wins, because the scan overwrites the
// result on every match instead of stopping at the first. Real pages
// rarely have more than one, so the difference seldom shows, but the
// behavior is kept exactly as observed (see DESIGN.md).
// =============================================================================

use scraper::{ElementRef, Selector};

// Elements whose text qualifies as a title for an anchor
const TITLE_SELECTOR: &str = "span, h1, h2, h3, h4";

// Resolves a title for one anchor element
//
// Parameters:
//   anchor: the <a> element whose subtree is searched
//
// Returns: the trimmed text content of the last qualifying descendant,
// or an empty string if no span/h1-h4 exists under the anchor.
//
// Notes:
// - Only descendants are searched; the anchor's own loose text is not
//   considered a title.
// - Pure function, no depth cap: a deeply nested anchor costs a full
//   subtree scan.
pub fn resolve_title(anchor: &ElementRef) -> String {
    let selector = Selector::parse(TITLE_SELECTOR).unwrap();

    let mut title = String::new();
    for element in anchor.select(&selector) {
        // Overwrite on every match: last qualifying descendant wins
        title = element.text().collect::<String>().trim().to_string();
    }

    title
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    // Parses a fragment and resolves the title of its first anchor
    fn title_of(html: &str) -> String {
        let document = Html::parse_document(html);
        let selector = Selector::parse("a").unwrap();
        let anchor = document.select(&selector).next().expect("no anchor in fixture");
        resolve_title(&anchor)
    }

    #[test]
    fn test_heading_inside_anchor() {
        let html = r#"<a href="/x"><h2>Futebol Brasileiro</h2></a>"#;
        assert_eq!(title_of(html), "Futebol Brasileiro");
    }

    #[test]
    fn test_span_inside_anchor() {
        let html = r#"<a href="/x"><div><span>Breaking news</span></div></a>"#;
        assert_eq!(title_of(html), "Breaking news");
    }

    #[test]
    fn test_text_is_trimmed() {
        let html = "<a href=\"/x\"><h3>\n   Padded headline \t</h3></a>";
        assert_eq!(title_of(html), "Padded headline");
    }

    #[test]
    fn test_last_qualifying_descendant_wins() {
        let html = r#"<a href="/x"><h1>First</h1><span>Last</span></a>"#;
        assert_eq!(title_of(html), "Last");
    }

    #[test]
    fn test_no_qualifying_descendant() {
        let html = r#"<a href="/x">plain link text</a>"#;
        assert_eq!(title_of(html), "");
    }

    #[test]
    fn test_h5_is_not_a_title() {
        // Allow-list stops at h4
        let html = r#"<a href="/x"><h5>too deep</h5></a>"#;
        assert_eq!(title_of(html), "");
    }

    #[test]
    fn test_deeply_nested_heading() {
        let html = r#"<a href="/x"><div><div><div><h4>Buried</h4></div></div></div></a>"#;
        assert_eq!(title_of(html), "Buried");
    }

    #[test]
    fn test_title_outside_anchor_is_ignored() {
        let html = r#"<h1>Page title</h1><a href="/x">bare</a>"#;
        assert_eq!(title_of(html), "");
    }
}

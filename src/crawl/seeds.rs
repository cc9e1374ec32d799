// src/crawl/seeds.rs
// =============================================================================
// This module runs one query across the configured seed URLs.
//
// The seed list is fixed: three news front pages plus one search-engine
// template. A template seed (it ends in "=") gets the query substituted
// into it before crawling; the others are crawled verbatim.
//
// Each seed gets a FRESH session: visited sets are never shared across
// seeds, so the same link can be claimed (and matched) once per seed.
// Seeds run strictly one after another, each to completion.
// =============================================================================

use crate::crawl::session::CrawlSession;
use crate::crawl::MatchRecord;
use crate::fetch::HttpFetcher;

// Crawl starting points, in crawl order
const SEED_URLS: &[&str] = &[
    "https://g1.globo.com",
    "https://www.cnnbrasil.com.br",
    "https://news.google.com/home?hl=pt-BR&gl=BR&ceid=BR:pt-419",
    "https://www.google.com/search?q=",
];

// Runs one query over every configured seed, sequentially
//
// Parameters:
//   fetcher: the shared HTTP fetcher
//   query: the search query, already trimmed and lowercased
//   follow: whether sessions should follow discovered links
//
// Returns: every match reported, in report order across all seeds.
//
// A failing seed only costs its own session; the remaining seeds still
// run (the session prints the warning itself).
pub async fn run_query(fetcher: &HttpFetcher, query: &str, follow: bool) -> Vec<MatchRecord> {
    let mut all_matches = Vec::new();

    for seed in SEED_URLS {
        let target = expand_seed(seed, query);
        println!("🔍 Crawling: {}", target);

        let mut session = CrawlSession::new(query, follow);
        session.crawl(fetcher, &target).await;
        all_matches.extend(session.into_matches());
    }

    all_matches
}

// Expands a search-template seed with the query
//
// A seed ending in "=" is a search endpoint waiting for its query
// parameter; spaces in the query become "+" there. Every other seed is
// returned unchanged.
//
// Example:
//   expand_seed("https://www.google.com/search?q=", "copa do mundo")
//     -> "https://www.google.com/search?q=copa+do+mundo"
fn expand_seed(seed: &str, query: &str) -> String {
    if seed.ends_with('=') {
        format!("{}{}", seed, query.replace(' ', "+"))
    } else {
        seed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_seed_gets_query_appended() {
        assert_eq!(
            expand_seed("https://www.google.com/search?q=", "futebol"),
            "https://www.google.com/search?q=futebol"
        );
    }

    #[test]
    fn test_spaces_become_plus_in_template() {
        assert_eq!(
            expand_seed("https://www.google.com/search?q=", "copa do mundo"),
            "https://www.google.com/search?q=copa+do+mundo"
        );
    }

    #[test]
    fn test_plain_seed_is_used_verbatim() {
        assert_eq!(
            expand_seed("https://g1.globo.com", "copa do mundo"),
            "https://g1.globo.com"
        );
    }

    #[test]
    fn test_seed_with_query_string_is_not_a_template() {
        // A seed carrying parameters but not ending in "=" stays as-is
        assert_eq!(
            expand_seed("https://news.google.com/home?hl=pt-BR&gl=BR&ceid=BR:pt-419", "x"),
            "https://news.google.com/home?hl=pt-BR&gl=BR&ceid=BR:pt-419"
        );
    }

    #[test]
    fn test_seed_order_is_fixed() {
        assert_eq!(SEED_URLS[0], "https://g1.globo.com");
        assert_eq!(SEED_URLS.len(), 4);
        assert!(SEED_URLS[3].ends_with('='));
    }
}

// src/crawl/session.rs
// =============================================================================
// This module implements one crawl session: the walk of everything
// reachable from a single seed URL for a single query.
//
// How it works:
// 1. Check the preconditions (budget left, seed not already visited)
// 2. Mark the seed visited, then fetch and parse it
// 3. Scan the document's anchors in document order:
//    - an href that is an absolute http/https URL and contains every
//      query word becomes a match (after title resolution and debounce)
//    - every such href is also marked visited, claiming it for this
//      session whether or not links are being followed
// 4. In --follow mode, freshly claimed links are fetched too,
//    depth-first, until the budget runs out
//
// State:
// - The visited set is owned exclusively by this session. Membership is
//   exact string equality: no trailing-slash, query-order, or case
//   normalization of any kind.
// - The last reported (title, link) pair is kept to suppress an
//   immediately repeated match. This is a debounce, not deduplication:
//   the same match reappears if a different one was reported in between.
//
// Rust concepts:
// - HashSet: O(1) membership checks for the visited set
// - Vec as a stack: pop() from the back gives depth-first order
// =============================================================================

use scraper::Html;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::extract;
use crate::fetch::HttpFetcher;
use crate::matcher;

// Hard cap on how many URLs one session may ever mark visited.
// Since a mark always precedes the corresponding fetch, this also caps
// fetch attempts, even on cyclic or self-referential link structures.
pub const MAX_CRAWLED_URLS: usize = 100;

// One search hit: a resolved title and the link it was found on
//
// #[derive(Serialize, Deserialize)] lets us convert to/from JSON for
// the --json output mode
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    /// Human-readable title resolved from the anchor's subtree
    pub title: String,
    /// The href that satisfied the query
    pub link: String,
}

// State for one seed's crawl
pub struct CrawlSession {
    /// The query, already trimmed and lowercased by the REPL
    query: String,
    /// When true, claimed links are fetched too (multi-hop crawl)
    follow: bool,
    /// URLs this session has claimed; never exceeds MAX_CRAWLED_URLS
    visited: HashSet<String>,
    /// Debounce state: the last reported title and link
    last_title: String,
    last_link: String,
    /// Every match reported by this session, in report order
    matches: Vec<MatchRecord>,
}

impl CrawlSession {
    pub fn new(query: &str, follow: bool) -> Self {
        Self {
            query: query.to_string(),
            follow,
            visited: HashSet::new(),
            last_title: String::new(),
            last_link: String::new(),
            matches: Vec::new(),
        }
    }

    // The per-call precondition: budget left AND url not already claimed
    fn should_crawl(&self, url: &str) -> bool {
        self.visited.len() < MAX_CRAWLED_URLS && !self.visited.contains(url)
    }

    // Crawls everything reachable from one seed URL
    //
    // If the precondition fails this is a complete no-op: no fetch, no
    // state change, no matches. Fetch and decode failures are printed as
    // warnings and only abandon the failing URL; the rest of the pending
    // work (and other seeds) continues untouched.
    pub async fn crawl(&mut self, fetcher: &HttpFetcher, seed: &str) {
        if !self.should_crawl(seed) {
            return;
        }

        // Mark before fetching, so a self-referential page can never
        // re-enter its own URL
        self.visited.insert(seed.to_string());

        // Depth-first stack of claimed URLs still to fetch.
        // In the default single-level mode it only ever holds the seed.
        let mut pending = vec![seed.to_string()];

        while let Some(url) = pending.pop() {
            let body = match fetcher.fetch(&url).await {
                Ok(body) => body,
                Err(e) => {
                    eprintln!("  Warning: failed to fetch {}: {}", url, e);
                    continue;
                }
            };

            let document = Html::parse_document(&body);
            let claimed = self.scan_document(&document);

            if self.follow {
                for link in &claimed {
                    println!("  Following: {}", link);
                }
                pending.extend(claimed);
            }
        }
    }

    // Scans one parsed document for matches and new URLs
    //
    // Walks every anchor in document order. Returns the links claimed
    // (marked visited) during this scan; the caller decides whether to
    // fetch them.
    fn scan_document(&mut self, document: &Html) -> Vec<String> {
        let mut claimed = Vec::new();

        for candidate in extract::link_candidates(document) {
            let href = candidate.href;

            if href.is_empty() || !is_followable(href) {
                continue;
            }

            // Matching is independent of the visited set: a link we have
            // already claimed can still produce a (debounced) match
            if matcher::contains_all_words(href, &self.query) {
                let title = extract::resolve_title(&candidate.anchor);
                if !title.is_empty() && (title != self.last_title || href != self.last_link) {
                    println!("📰 Title: {}", title);
                    println!("🔗 Link:  {}", href);
                    self.last_title = title.clone();
                    self.last_link = href.to_string();
                    self.matches.push(MatchRecord {
                        title,
                        link: href.to_string(),
                    });
                }
            }

            // Claim the link for this session while the budget allows
            if self.should_crawl(href) {
                self.visited.insert(href.to_string());
                claimed.push(href.to_string());
            }
        }

        claimed
    }

    /// Consumes the session, yielding its matches in report order
    pub fn into_matches(self) -> Vec<MatchRecord> {
        self.matches
    }
}

// An href is followable when it parses as an absolute http/https URL.
// Relative hrefs, anchors-only hrefs, mailto:, javascript: and friends
// all fail this test and are ignored entirely.
fn is_followable(href: &str) -> bool {
    match url::Url::parse(href) {
        Ok(parsed) => parsed.scheme() == "http" || parsed.scheme() == "https",
        Err(_) => false,
    }
}

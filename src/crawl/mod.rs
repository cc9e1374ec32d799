// src/crawl/mod.rs
// =============================================================================
// This module handles the crawl itself.
//
// Submodules:
// - session: one seed's bounded walk (visited set, matching, debounce)
// - seeds: the configured seed list and the per-query loop over it
//
// Features:
// - Bounded crawling: at most 100 URLs marked per session
// - Match reporting: (title, link) pairs for hrefs containing every
//   query word, with consecutive repeats debounced
// - Optional multi-hop mode that follows discovered links depth-first
// =============================================================================

mod seeds;
mod session;

// Re-export the public crawl API
// This lets users write `crawl::run_query()` instead of
// `crawl::seeds::run_query()`
pub use seeds::run_query;
pub use session::MatchRecord;

// src/matcher.rs
// =============================================================================
// This module decides whether a candidate string satisfies a search query.
//
// The rule is simple: split the query on whitespace into words, and the
// candidate matches only if it contains EVERY word as a substring.
//
// An important asymmetry lives here: the REPL lowercases the query before
// it ever reaches this function, but the candidate (an href) is taken as-is.
// Matching is therefore case-sensitive on the candidate side, and callers
// are responsible for normalizing the query upstream.
//
// Rust concepts:
// - Iterators: split_whitespace() yields words lazily, no Vec needed
// - Closures: |word| candidate.contains(word)
// =============================================================================

// Checks whether `candidate` contains every whitespace-separated word of `query`
//
// Parameters:
//   candidate: the string being tested (usually an href)
//   query: the search query, already trimmed and lowercased by the caller
//
// Returns: true iff every word of the query is a substring of the candidate
//
// Edge case: an empty (or all-whitespace) query has no words, so it
// matches everything. That mirrors how "all of nothing" behaves and is
// relied on by the crawl session.
//
// Example:
//   contains_all_words("https://g1.globo.com/futebol", "futebol") -> true
//   contains_all_words("https://x.com/a-only", "a b") -> false (no "b")
pub fn contains_all_words(candidate: &str, query: &str) -> bool {
    // all() short-circuits on the first missing word, which is allowed:
    // the result only depends on whether any missing word exists
    query.split_whitespace().all(|word| candidate.contains(word))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_word_present() {
        assert!(contains_all_words("https://g1.globo.com/futebol", "futebol"));
    }

    #[test]
    fn test_single_word_missing() {
        assert!(!contains_all_words("https://g1.globo.com/economia", "futebol"));
    }

    #[test]
    fn test_all_words_required() {
        // Scenario: query "a b" against a link that only has "a"
        assert!(!contains_all_words("https://x.com/a-only", "a b"));
        assert!(contains_all_words("https://x.com/a-and-b", "a b"));
    }

    #[test]
    fn test_words_may_appear_in_any_order() {
        assert!(contains_all_words("https://news.com/world-cup-final", "final cup"));
    }

    #[test]
    fn test_empty_query_always_matches() {
        assert!(contains_all_words("https://example.com", ""));
        assert!(contains_all_words("", ""));
    }

    #[test]
    fn test_whitespace_only_query_always_matches() {
        assert!(contains_all_words("https://example.com", "   \t "));
    }

    #[test]
    fn test_candidate_case_is_not_normalized() {
        // The query arrives lowercased; an uppercase candidate won't match
        assert!(!contains_all_words("https://x.com/Futebol", "futebol"));
        assert!(contains_all_words("https://x.com/futebol", "futebol"));
    }

    #[test]
    fn test_extra_whitespace_between_words() {
        assert!(contains_all_words("https://x.com/a-b", "a   b"));
    }
}

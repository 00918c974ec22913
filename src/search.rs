//! Search engine for Emopick.
//!
//! A pure, stable substring filter over the corpus: matches keep their
//! original corpus order and the result is truncated to the caller's limit.
//! No fuzzy ranking, no re-ordering.

use crate::services::emoji::{builtin_corpus, EmojiRecord};

/// Filters the corpus by query.
///
/// Holds nothing but a reference to the immutable corpus, so searches are
/// deterministic for the lifetime of the engine.
#[derive(Debug, Clone)]
pub struct SearchEngine {
    corpus: &'static [EmojiRecord],
}

impl Default for SearchEngine {
    fn default() -> Self {
        Self::new(builtin_corpus())
    }
}

impl SearchEngine {
    pub fn new(corpus: &'static [EmojiRecord]) -> Self {
        Self { corpus }
    }

    pub fn corpus(&self) -> &'static [EmojiRecord] {
        self.corpus
    }

    /// Return the first `limit` records whose title contains `query`,
    /// case-insensitively, in corpus order.
    ///
    /// The empty query matches every record. A query that matches nothing
    /// returns an empty vec, never an error. `limit == 0` returns an empty
    /// vec. The query is compared verbatim apart from lowercasing; leading
    /// or trailing whitespace is part of the filter.
    pub fn search(&self, query: &str, limit: usize) -> Vec<EmojiRecord> {
        if query.is_empty() {
            return self.corpus.iter().take(limit).copied().collect();
        }

        let query_lower = query.to_lowercase();
        self.corpus
            .iter()
            .filter(|record| record.title.to_lowercase().contains(&query_lower))
            .take(limit)
            .copied()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static TEST_CORPUS: &[EmojiRecord] = &[
        EmojiRecord { symbol: "\u{1f600}", title: "grinning face" },
        EmojiRecord { symbol: "\u{1f601}", title: "grin" },
        EmojiRecord { symbol: "\u{1f602}", title: "joy" },
    ];

    #[test]
    fn test_prefix_query_keeps_corpus_order() {
        let engine = SearchEngine::new(TEST_CORPUS);
        let results = engine.search("gri", 20);
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].title, "grinning face");
        assert_eq!(results[0].symbol, "\u{1f600}");
        assert_eq!(results[1].title, "grin");
        assert_eq!(results[1].symbol, "\u{1f601}");
    }

    #[test]
    fn test_no_match_is_empty() {
        let engine = SearchEngine::new(TEST_CORPUS);
        assert!(engine.search("zzz", 20).is_empty());
    }

    #[test]
    fn test_empty_query_returns_first_records() {
        let engine = SearchEngine::new(TEST_CORPUS);
        let results = engine.search("", 2);
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].title, "grinning face");
        assert_eq!(results[1].title, "grin");
    }

    #[test]
    fn test_zero_limit() {
        let engine = SearchEngine::new(TEST_CORPUS);
        assert!(engine.search("", 0).is_empty());
        assert!(engine.search("grin", 0).is_empty());
    }

    #[test]
    fn test_case_insensitive() {
        let engine = SearchEngine::new(TEST_CORPUS);
        assert_eq!(engine.search("GRIN", 20), engine.search("grin", 20));
        assert_eq!(engine.search("Joy", 20).len(), 1);
    }

    #[test]
    fn test_result_len_bounded_by_limit() {
        let engine = SearchEngine::default();
        for limit in [0, 1, 3, 10, 1000] {
            assert!(engine.search("", limit).len() <= limit);
            assert!(engine.search("face", limit).len() <= limit);
        }
    }

    #[test]
    fn test_every_result_contains_query() {
        let engine = SearchEngine::default();
        for query in ["face", "heart", "FIRE"] {
            let lower = query.to_lowercase();
            for record in engine.search(query, 1000) {
                assert!(record.title.to_lowercase().contains(&lower));
            }
        }
    }

    #[test]
    fn test_idempotent() {
        let engine = SearchEngine::default();
        assert_eq!(engine.search("face", 20), engine.search("face", 20));
    }

    #[test]
    fn test_monotonic_truncation() {
        let engine = SearchEngine::default();
        let small = engine.search("face", 3);
        let large = engine.search("face", 10);
        assert_eq!(small.as_slice(), &large[..small.len()]);
    }

    #[test]
    fn test_whitespace_is_not_trimmed() {
        let engine = SearchEngine::new(TEST_CORPUS);
        // " gri" is a real filter character sequence, not "gri"
        assert!(engine.search(" gri", 20).is_empty());
    }
}

//! Query/result state for the widget.
//!
//! The controller owns the current query and its derived result set. Every
//! input change replaces the result set wholesale with a fresh search; the
//! result set is never mutated independently of the query.

use crate::search::SearchEngine;
use crate::services::emoji::EmojiRecord;

pub struct SearchController {
    engine: SearchEngine,
    limit: usize,
    query: String,
    results: Vec<EmojiRecord>,
}

impl SearchController {
    /// Start with the empty query and its default unfiltered, limited view.
    pub fn new(engine: SearchEngine, limit: usize) -> Self {
        let results = engine.search("", limit);
        Self {
            engine,
            limit,
            query: String::new(),
            results,
        }
    }

    /// Accept a new raw input verbatim and recompute the result set.
    ///
    /// Synchronous and total: the returned slice is the complete new result
    /// set, ready to render.
    pub fn on_query_change(&mut self, raw_input: &str) -> &[EmojiRecord] {
        self.query.clear();
        self.query.push_str(raw_input);
        self.results = self.engine.search(&self.query, self.limit);
        &self.results
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn results(&self) -> &[EmojiRecord] {
        &self.results
    }

    pub fn limit(&self) -> usize {
        self.limit
    }
}

//! Emopick - Keyboard-driven emoji search and copy widget.
//!
//! A text input filters a static in-memory emoji corpus; the selected match
//! is copied to the system clipboard.
//!
//! # Architecture
//!
//! - [`config`] - Configuration loading and management
//! - [`search`] - The search engine: a stable substring filter over the corpus
//! - [`controller`] - Query/result state, recomputed on every input change
//! - [`services`] - The emoji corpus and the clipboard copy binding
//! - [`ui`] - Iced frontend (behind the `iced-ui` feature)
//!
//! # Example
//!
//! ```
//! use emopick::{SearchController, SearchEngine};
//!
//! let mut controller = SearchController::new(SearchEngine::default(), 20);
//! let results = controller.on_query_change("fire");
//! assert!(results.iter().all(|r| r.title.contains("fire")));
//! ```

pub mod config;
pub mod controller;
pub mod search;
pub mod services;

#[cfg(feature = "iced-ui")]
pub mod ui;

mod error;

// Re-export commonly used types for convenience
pub use config::Config;
pub use controller::SearchController;
pub use error::{EmopickError, EmopickResult};
pub use search::SearchEngine;
pub use services::clipboard::{CopyBinding, CopyTarget, SystemClipboard};
pub use services::emoji::{builtin_corpus, EmojiRecord};

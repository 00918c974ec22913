//! Copy-to-clipboard binding for the rendered result list.
//!
//! The render layer binds the current result set's symbols once per render
//! cycle and must unbind before rebinding, so activations never reach a
//! stale result set.

use crate::error::{EmopickError, EmopickResult};
use crate::services::emoji::EmojiRecord;

/// Destination for a copy activation.
///
/// The system clipboard in production; tests substitute a recording mock.
pub trait CopyTarget {
    fn set_text(&mut self, text: &str) -> EmopickResult<()>;
}

/// The real system clipboard, via arboard.
pub struct SystemClipboard {
    inner: arboard::Clipboard,
}

impl SystemClipboard {
    pub fn new() -> EmopickResult<Self> {
        let inner = arboard::Clipboard::new()
            .map_err(|e| EmopickError::Clipboard(e.to_string()))?;
        Ok(Self { inner })
    }
}

impl CopyTarget for SystemClipboard {
    fn set_text(&mut self, text: &str) -> EmopickResult<()> {
        self.inner
            .set_text(text.to_string())
            .map_err(|e| EmopickError::Clipboard(e.to_string()))
    }
}

/// A scoped copy-on-activate binding over one result set.
///
/// `bind` captures the symbols of the rows being rendered; `copy` resolves
/// an activated row index to its symbol and writes it to the target. The
/// owner calls `unbind` before binding a changed result set.
#[derive(Debug, Default)]
pub struct CopyBinding {
    symbols: Vec<String>,
    bound: bool,
}

impl CopyBinding {
    /// Capture the symbols of the given result set.
    pub fn bind(results: &[EmojiRecord]) -> Self {
        Self {
            symbols: results.iter().map(|r| r.symbol.to_string()).collect(),
            bound: true,
        }
    }

    /// Release the binding. Further activations are rejected.
    pub fn unbind(&mut self) {
        self.symbols.clear();
        self.bound = false;
    }

    pub fn is_bound(&self) -> bool {
        self.bound
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Copy the symbol bound at `index` into `target`.
    pub fn copy(&self, index: usize, target: &mut dyn CopyTarget) -> EmopickResult<()> {
        if !self.bound {
            return Err(EmopickError::Binding("binding already released".to_string()));
        }
        let symbol = self.symbols.get(index).ok_or_else(|| {
            EmopickError::Binding(format!(
                "row {} out of range ({} bound)",
                index,
                self.symbols.len()
            ))
        })?;
        target.set_text(symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingTarget {
        copied: Vec<String>,
    }

    impl CopyTarget for RecordingTarget {
        fn set_text(&mut self, text: &str) -> EmopickResult<()> {
            self.copied.push(text.to_string());
            Ok(())
        }
    }

    static TEST_CORPUS: &[EmojiRecord] = &[
        EmojiRecord { symbol: "\u{1f600}", title: "grinning face" },
        EmojiRecord { symbol: "\u{1f602}", title: "joy" },
    ];

    #[test]
    fn test_copy_bound_symbol() {
        let binding = CopyBinding::bind(TEST_CORPUS);
        let mut target = RecordingTarget::default();

        binding.copy(1, &mut target).unwrap();
        assert_eq!(target.copied, vec!["\u{1f602}".to_string()]);
    }

    #[test]
    fn test_copy_after_unbind_fails() {
        let mut binding = CopyBinding::bind(TEST_CORPUS);
        binding.unbind();

        let mut target = RecordingTarget::default();
        let err = binding.copy(0, &mut target).unwrap_err();
        assert!(matches!(err, EmopickError::Binding(_)));
        assert!(target.copied.is_empty());
    }

    #[test]
    fn test_out_of_range_index_fails() {
        let binding = CopyBinding::bind(TEST_CORPUS);
        let mut target = RecordingTarget::default();

        let err = binding.copy(2, &mut target).unwrap_err();
        assert!(matches!(err, EmopickError::Binding(_)));
    }

    #[test]
    fn test_rebind_replaces_symbols() {
        let mut binding = CopyBinding::bind(TEST_CORPUS);
        assert_eq!(binding.len(), 2);

        binding.unbind();
        assert!(!binding.is_bound());

        binding = CopyBinding::bind(&TEST_CORPUS[..1]);
        assert_eq!(binding.len(), 1);

        let mut target = RecordingTarget::default();
        binding.copy(0, &mut target).unwrap();
        assert_eq!(target.copied, vec!["\u{1f600}".to_string()]);
    }

    #[test]
    fn test_empty_result_set_binds_empty() {
        let binding = CopyBinding::bind(&[]);
        assert!(binding.is_bound());
        assert!(binding.is_empty());

        let mut target = RecordingTarget::default();
        assert!(binding.copy(0, &mut target).is_err());
    }
}

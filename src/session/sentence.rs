//! Sentence Assembly
//!
//! Append-only buffer over the committed symbol sequence plus the single
//! uncommitted pending symbol. No deletion or edit operations exist here;
//! correcting the assembled text is the grammar corrector's job, invoked on
//! demand by the caller.

use crate::alphabet::Symbol;

/// Owns the committed text buffer and the pending (uncommitted) symbol.
#[derive(Debug, Clone, Default)]
pub struct SentenceAssembler {
    committed: Vec<Symbol>,
    pending: Option<Symbol>,
}

impl SentenceAssembler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite the pending symbol with the latest classification.
    pub fn set_pending(&mut self, symbol: Symbol) {
        self.pending = Some(symbol);
    }

    /// Append the pending symbol to the sentence, if any, and clear it.
    /// This is the sole moment a symbol becomes permanent. Returns the
    /// committed symbol.
    pub fn commit_pending(&mut self) -> Option<Symbol> {
        let committed = self.pending.take();
        if let Some(sym) = committed {
            self.committed.push(sym);
        }
        committed
    }

    /// Currently pending symbol, if any
    pub fn pending(&self) -> Option<Symbol> {
        self.pending
    }

    /// Committed sentence, concatenated in detection order
    pub fn current_text(&self) -> String {
        self.committed.iter().map(|s| s.as_char()).collect()
    }

    /// Number of committed symbols
    pub fn len(&self) -> usize {
        self.committed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.committed.is_empty()
    }
}

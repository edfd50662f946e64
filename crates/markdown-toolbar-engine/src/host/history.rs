//! Undo/redo history for [`RopeHost`](super::rope_host::RopeHost).
//!
//! Every edit the host applies is one replacement, so a transaction only has
//! to remember where it happened, what it removed and what it inserted. The
//! selection on both sides is kept so undo and redo restore it too.

use std::ops::Range;

use crate::host::commands::Cmd;

/// One reversible replacement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    pub at: usize,
    pub removed: String,
    pub inserted: String,
    pub selection_before: Range<usize>,
    pub selection_after: Range<usize>,
}

impl Transaction {
    /// Command that re-applies the edit
    pub fn forward(&self) -> Cmd {
        Cmd::ReplaceRange {
            range: self.at..self.at + self.removed.len(),
            text: self.inserted.clone(),
        }
    }

    /// Command that reverts the edit
    pub fn backward(&self) -> Cmd {
        Cmd::ReplaceRange {
            range: self.at..self.at + self.inserted.len(),
            text: self.removed.clone(),
        }
    }

    fn is_noop(&self) -> bool {
        self.removed == self.inserted
    }
}

/// Two stacks; a new edit discards anything that could be redone
#[derive(Debug, Default)]
pub struct History {
    undo_stack: Vec<Transaction>,
    redo_stack: Vec<Transaction>,
}

impl History {
    pub const fn new() -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
        }
    }

    /// Record an applied edit. Edits that changed nothing are ignored.
    pub fn record(&mut self, transaction: Transaction) {
        if transaction.is_noop() {
            return;
        }
        self.redo_stack.clear();
        self.undo_stack.push(transaction);
    }

    /// Pop the last edit, returning the command that reverts it and the
    /// selection to restore afterwards
    pub fn undo(&mut self) -> Option<(Cmd, Range<usize>)> {
        let transaction = self.undo_stack.pop()?;
        let step = (transaction.backward(), transaction.selection_before.clone());
        self.redo_stack.push(transaction);
        Some(step)
    }

    /// Pop the last undone edit, returning the command that re-applies it
    /// and the selection to restore afterwards
    pub fn redo(&mut self) -> Option<(Cmd, Range<usize>)> {
        let transaction = self.redo_stack.pop()?;
        let step = (transaction.forward(), transaction.selection_after.clone());
        self.undo_stack.push(transaction);
        Some(step)
    }

    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }
}

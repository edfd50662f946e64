use serde::Serialize;

/// Result of styling a selection
///
/// `text` replaces the span the applier left selected in its working buffer;
/// `selection_start..selection_end` is where the selection goes afterwards,
/// in offsets of the updated text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StyleResult {
    pub text: String,
    pub selection_start: usize,
    pub selection_end: usize,
}

impl StyleResult {
    pub fn new(text: impl Into<String>, selection: std::ops::Range<usize>) -> Self {
        Self {
            text: text.into(),
            selection_start: selection.start,
            selection_end: selection.end,
        }
    }

    pub fn selection(&self) -> std::ops::Range<usize> {
        self.selection_start..self.selection_end
    }
}

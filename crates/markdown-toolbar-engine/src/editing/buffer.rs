use std::ops::Range;

use crate::editing::expand;
use crate::editing::newlines::{self, Newlines};
use crate::editing::result::StyleResult;

/// Text plus the selection a styling operation works on
///
/// Offsets are byte offsets into the UTF-8 text. Every selection stored here
/// is clamped to the text length and snapped back to a `char` boundary, so
/// slicing with it can never panic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextBuffer {
    text: String,
    selection: Range<usize>,
}

impl TextBuffer {
    /// Create a buffer, clamping the selection into the text
    pub fn new(text: impl Into<String>, selection: Range<usize>) -> Self {
        let text = text.into();
        let selection = clamp_selection(&text, selection);
        Self { text, selection }
    }

    /// Create a buffer with a collapsed selection at `at`
    pub fn with_caret(text: impl Into<String>, at: usize) -> Self {
        Self::new(text, at..at)
    }

    /// Get the full text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Consume the buffer, returning its text
    pub fn into_text(self) -> String {
        self.text
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Get the current selection range
    pub fn selection(&self) -> Range<usize> {
        self.selection.clone()
    }

    /// Set the selection range (clamped to the text)
    pub fn set_selection(&mut self, selection: Range<usize>) {
        self.selection = clamp_selection(&self.text, selection);
    }

    /// True when the selection is a bare caret
    pub fn is_collapsed(&self) -> bool {
        self.selection.is_empty()
    }

    pub fn selected_text(&self) -> &str {
        &self.text[self.selection.clone()]
    }

    /// Slice the text, clamping the range to the buffer
    pub fn slice(&self, range: Range<usize>) -> &str {
        let range = clamp_selection(&self.text, range);
        &self.text[range]
    }

    /// The character immediately before `offset`, if any
    pub fn char_before(&self, offset: usize) -> Option<char> {
        let offset = floor_char_boundary(&self.text, offset.min(self.text.len()));
        self.text[..offset].chars().next_back()
    }

    /// Grow an empty selection to the word around it
    pub fn expand_to_word(&mut self, multiline: bool) {
        if self.is_collapsed() {
            let word = expand::expand_to_word(&self.text, self.selection.start, multiline);
            self.selection = word;
        }
    }

    /// Grow the selection to cover whole lines
    pub fn expand_to_line(&mut self) {
        self.selection = expand::expand_to_line(&self.text, self.selection.clone());
    }

    /// Newlines needed around the current selection to separate a block construct
    pub fn surrounding_newlines(&self) -> Newlines {
        newlines::surrounding_newlines(&self.text, self.selection.clone())
    }

    /// Replace the selected span with `text`, leaving the caret after it
    pub fn replace_selection(&mut self, text: &str) {
        let selection = self.selection.clone();
        self.text.replace_range(selection.clone(), text);
        let caret = selection.start + text.len();
        self.selection = caret..caret;
    }

    /// Write a computed result back: replace the selection and restore the
    /// result's selection
    pub fn commit(&mut self, result: &StyleResult) {
        self.replace_selection(&result.text);
        self.set_selection(result.selection());
    }
}

impl From<&str> for TextBuffer {
    fn from(text: &str) -> Self {
        let len = text.len();
        Self::new(text, len..len)
    }
}

/// Largest `char` boundary that is `<= offset`
pub(crate) fn floor_char_boundary(text: &str, offset: usize) -> usize {
    let mut offset = offset.min(text.len());
    while !text.is_char_boundary(offset) {
        offset -= 1;
    }
    offset
}

/// Clamp a range into `text`, ordering and snapping its ends to char boundaries
pub(crate) fn clamp_selection(text: &str, selection: Range<usize>) -> Range<usize> {
    let end = floor_char_boundary(text, selection.end);
    let start = floor_char_boundary(text, selection.start.min(end));
    start..end
}

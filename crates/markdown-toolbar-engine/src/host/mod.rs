/*!
 * # Host Module
 *
 * The host owns the document the toolbar edits. The engine never keeps its
 * own copy between operations: every style starts by reading text and
 * selection from the host and ends by writing one replacement back.
 *
 * ## Pieces
 *
 * - **[`TextHost`]**: the collaborator trait (text, selection, focus,
 *   incremental insert, optional anchor tracking)
 * - **`commit`**: the bridge that writes a [`StyleResult`](crate::StyleResult)
 *   into a host, preferring incremental insert and falling back to overwrite
 * - **`rope_host`**: [`RopeHost`](rope_host::RopeHost), an xi-rope backed host
 *   with an undo stack and anchors, used by the CLI and tests
 * - **`commands`**, **`anchors`**, **`history`**, **`patch`**: the edit
 *   primitives `RopeHost` is built from
 */

use std::ops::Range;

use crate::editing::buffer::TextBuffer;

pub mod anchors;
pub mod commands;
pub mod commit;
pub mod history;
pub mod patch;
pub mod rope_host;

pub use anchors::{Anchor, AnchorId};
pub use commands::Cmd;
pub use patch::Patch;

/// A text input the toolbar can drive
///
/// Offsets are UTF-8 byte offsets on `char` boundaries.
pub trait TextHost {
    /// Full current text
    fn text(&self) -> String;

    /// Replace the whole text
    fn set_text(&mut self, text: &str);

    fn selection(&self) -> Range<usize>;

    fn set_selection(&mut self, selection: Range<usize>);

    /// Replace the selection with `text` as one native edit, leaving the caret
    /// after it
    ///
    /// Returns false when the host has no such primitive and did nothing.
    fn insert_at_selection(&mut self, text: &str) -> bool;

    /// Give the input focus before an edit
    fn focus(&mut self) {}

    /// Whether `insert_at_selection` is expected to work
    fn supports_incremental_insert(&self) -> bool {
        true
    }

    /// Start tracking `range` through later edits
    fn track(&mut self, _range: Range<usize>) -> Option<AnchorId> {
        None
    }

    /// Current range of a tracked span, `None` once it was deleted
    fn tracked(&self, _id: AnchorId) -> Option<Range<usize>> {
        None
    }

    fn untrack(&mut self, _id: AnchorId) {}
}

impl TextHost for TextBuffer {
    fn text(&self) -> String {
        TextBuffer::text(self).to_string()
    }

    fn set_text(&mut self, text: &str) {
        let selection = TextBuffer::selection(self);
        *self = TextBuffer::new(text, selection);
    }

    fn selection(&self) -> Range<usize> {
        TextBuffer::selection(self)
    }

    fn set_selection(&mut self, selection: Range<usize>) {
        TextBuffer::set_selection(self, selection);
    }

    fn insert_at_selection(&mut self, text: &str) -> bool {
        self.replace_selection(text);
        true
    }
}

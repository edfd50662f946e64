use std::ops::Range;

use xi_rope::Rope;

use crate::editing::buffer::{clamp_selection, floor_char_boundary};
use crate::host::TextHost;
use crate::host::anchors::{Anchor, AnchorId, transform_anchors};
use crate::host::commands::{Cmd, compile_command, transform_selection_for_command};
use crate::host::history::{History, Transaction};
use crate::host::patch::Patch;

/// Default cap on the document length, in bytes
pub const DEFAULT_MAX_LEN: usize = 10_000;

/// In-memory host backed by an xi-rope buffer
///
/// `RopeHost` behaves like a plain text input: edits made through
/// [`TextHost::insert_at_selection`] or [`RopeHost::apply`] land on an undo
/// stack, inserts that would grow the document past its maximum length are
/// cut short, and tracked spans follow the text they cover.
///
/// ```rust
/// use markdown_toolbar_engine::host::{TextHost, rope_host::RopeHost};
///
/// let mut host = RopeHost::new("hello");
/// host.insert_at_selection(" world");
/// assert_eq!(host.text(), "hello world");
///
/// host.undo();
/// assert_eq!(host.text(), "hello");
/// ```
#[derive(Debug)]
pub struct RopeHost {
    buffer: Rope,
    /// Selection as byte offsets into `buffer`
    selection: Range<usize>,
    /// Incremented on every applied edit
    version: u64,
    history: History,
    anchors: Vec<Anchor>,
    next_anchor: u64,
    max_len: Option<usize>,
    native_insert: bool,
}

impl RopeHost {
    /// Create a host with the caret at the end of `text`
    pub fn new(text: &str) -> Self {
        let buffer = Rope::from(text);
        let len = buffer.len();
        Self {
            buffer,
            selection: len..len,
            version: 0,
            history: History::new(),
            anchors: Vec::new(),
            next_anchor: 0,
            max_len: Some(DEFAULT_MAX_LEN),
            native_insert: true,
        }
    }

    /// Create a host from raw bytes, which must be valid UTF-8
    pub fn from_bytes(bytes: &[u8]) -> anyhow::Result<Self> {
        let text = std::str::from_utf8(bytes)?;
        Ok(Self::new(text))
    }

    /// Change the length cap; `None` removes it
    ///
    /// Text already in the buffer is never cut, only later inserts.
    pub fn with_max_len(mut self, max_len: Option<usize>) -> Self {
        self.max_len = max_len;
        self
    }

    /// Behave like an input without a native insert primitive
    pub fn without_native_insert(mut self) -> Self {
        self.native_insert = false;
        self
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        self.buffer.to_string().into_bytes()
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn max_len(&self) -> Option<usize> {
        self.max_len
    }

    pub fn anchors(&self) -> &[Anchor] {
        &self.anchors
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Apply an edit and record it on the undo stack
    ///
    /// The command's range is clamped to the buffer and inserted text is cut
    /// to fit the length cap.
    pub fn apply(&mut self, cmd: Cmd) -> Patch {
        let cmd = self.normalize(&cmd);
        let (range, text) = cmd.as_replacement();
        let mut transaction = Transaction {
            at: range.start,
            removed: self.buffer.slice_to_cow(range).into_owned(),
            inserted: text.to_string(),
            selection_before: self.selection.clone(),
            selection_after: self.selection.clone(),
        };

        let patch = self.apply_unrecorded(&cmd);
        transaction.selection_after = patch.new_selection.clone();
        self.history.record(transaction);
        patch
    }

    /// Revert the last edit, restoring the selection it started from
    pub fn undo(&mut self) -> Option<Patch> {
        let (cmd, selection) = self.history.undo()?;
        Some(self.replay(&cmd, selection))
    }

    /// Re-apply the last undone edit
    pub fn redo(&mut self) -> Option<Patch> {
        let (cmd, selection) = self.history.redo()?;
        Some(self.replay(&cmd, selection))
    }

    fn replay(&mut self, cmd: &Cmd, selection: Range<usize>) -> Patch {
        let mut patch = self.apply_unrecorded(cmd);
        self.set_selection(selection);
        patch.new_selection = self.selection.clone();
        patch
    }

    fn apply_unrecorded(&mut self, cmd: &Cmd) -> Patch {
        let delta = compile_command(&self.buffer, cmd);
        let (range, text) = cmd.as_replacement();
        let changed = if text.is_empty() {
            Vec::new()
        } else {
            vec![range.start..range.start + text.len()]
        };

        self.buffer = delta.apply(&self.buffer);
        transform_anchors(&mut self.anchors, &delta);

        let new_selection = transform_selection_for_command(&self.selection, cmd);
        self.selection = new_selection.clone();
        self.version += 1;

        Patch {
            changed,
            new_selection,
            version: self.version,
        }
    }

    /// Clamp the range onto `char` boundaries and cut the text to the length cap
    fn normalize(&self, cmd: &Cmd) -> Cmd {
        let current = self.buffer.to_string();
        let (range, text) = cmd.as_replacement();
        let range = clamp_selection(&current, range);
        let remaining = current.len() - range.len();

        let text = match self.max_len {
            Some(max_len) if remaining + text.len() > max_len => {
                let room = max_len.saturating_sub(remaining);
                let cut = &text[..floor_char_boundary(text, room)];
                log::warn!(
                    "Insert of {} bytes cut to {} to stay within {max_len} bytes",
                    text.len(),
                    cut.len()
                );
                cut
            }
            _ => text,
        };

        Cmd::ReplaceRange {
            range,
            text: text.to_string(),
        }
    }
}

/// Byte ranges of the part of `old` that differs from `new` and its replacement
fn changed_span(old: &str, new: &str) -> (Range<usize>, Range<usize>) {
    let prefix = old
        .bytes()
        .zip(new.bytes())
        .take_while(|(a, b)| a == b)
        .count();
    let prefix = floor_char_boundary(old, prefix);

    let max_suffix = old.len().min(new.len()) - prefix;
    let mut suffix = old
        .bytes()
        .rev()
        .zip(new.bytes().rev())
        .take(max_suffix)
        .take_while(|(a, b)| a == b)
        .count();
    while !old.is_char_boundary(old.len() - suffix) {
        suffix -= 1;
    }

    (prefix..old.len() - suffix, prefix..new.len() - suffix)
}

impl TextHost for RopeHost {
    fn text(&self) -> String {
        self.buffer.to_string()
    }

    /// Replace the whole text; only the span that actually differs is
    /// rewritten, so anchors outside it survive. Growth is still subject to
    /// the length cap. Clears the undo history.
    fn set_text(&mut self, text: &str) {
        let current = self.buffer.to_string();
        if current != text {
            let (old, new) = changed_span(&current, text);
            let cmd = self.normalize(&Cmd::ReplaceRange {
                range: old,
                text: text[new].to_string(),
            });
            self.apply_unrecorded(&cmd);
        }
        self.history.clear();
    }

    fn selection(&self) -> Range<usize> {
        self.selection.clone()
    }

    fn set_selection(&mut self, selection: Range<usize>) {
        self.selection = clamp_selection(&self.buffer.to_string(), selection);
    }

    fn insert_at_selection(&mut self, text: &str) -> bool {
        if !self.native_insert {
            return false;
        }
        self.apply(Cmd::ReplaceRange {
            range: self.selection.clone(),
            text: text.to_string(),
        });
        true
    }

    fn supports_incremental_insert(&self) -> bool {
        self.native_insert
    }

    fn track(&mut self, range: Range<usize>) -> Option<AnchorId> {
        let id = AnchorId(self.next_anchor);
        self.next_anchor += 1;
        let range = clamp_selection(&self.buffer.to_string(), range);
        self.anchors.push(Anchor { id, range });
        Some(id)
    }

    fn tracked(&self, id: AnchorId) -> Option<Range<usize>> {
        self.anchors
            .iter()
            .find(|anchor| anchor.id == id)
            .map(|anchor| anchor.range.clone())
    }

    fn untrack(&mut self, id: AnchorId) {
        self.anchors.retain(|anchor| anchor.id != id);
    }
}

impl Default for RopeHost {
    fn default() -> Self {
        Self::new("")
    }
}

use std::ops::Range;

/// Result of applying a command to a [`RopeHost`](super::rope_host::RopeHost)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Patch {
    /// Ranges of inserted text, in offsets of the new document
    pub changed: Vec<Range<usize>>,
    pub new_selection: Range<usize>,
    pub version: u64,
}

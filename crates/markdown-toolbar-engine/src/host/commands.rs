use std::ops::Range;

use xi_rope::delta::Builder;
use xi_rope::{Delta, Rope, RopeInfo};

/// Edit commands understood by [`RopeHost`](super::rope_host::RopeHost)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cmd {
    InsertText { at: usize, text: String },
    DeleteRange { range: Range<usize> },
    ReplaceRange { range: Range<usize>, text: String },
}

impl Cmd {
    /// Every command is a replacement: the range it removes and the text it
    /// puts there
    pub fn as_replacement(&self) -> (Range<usize>, &str) {
        match self {
            Cmd::InsertText { at, text } => (*at..*at, text.as_str()),
            Cmd::DeleteRange { range } => (range.clone(), ""),
            Cmd::ReplaceRange { range, text } => (range.clone(), text.as_str()),
        }
    }
}

/// Convert a command into an xi-rope delta against `rope`
///
/// The command's range must already be clamped to `rope` and lie on `char`
/// boundaries.
pub fn compile_command(rope: &Rope, cmd: &Cmd) -> Delta<RopeInfo> {
    let (range, text) = cmd.as_replacement();
    let mut builder = Builder::new(rope.len());
    builder.replace(range, Rope::from(text));
    builder.build()
}

/// Where `selection` ends up after `cmd`
///
/// Offsets before the edit stay put, offsets after it shift by the change in
/// length, and offsets inside the replaced range move to the end of the new
/// text. A caret sitting at an insertion point ends up after the inserted text.
pub fn transform_selection_for_command(selection: &Range<usize>, cmd: &Cmd) -> Range<usize> {
    let (range, text) = cmd.as_replacement();
    let transform = |offset: usize| {
        if offset < range.start {
            offset
        } else if offset >= range.end {
            offset - range.len() + text.len()
        } else {
            range.start + text.len()
        }
    };
    transform(selection.start)..transform(selection.end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn test_compile_insert() {
        let rope = Rope::from("hello");
        let cmd = Cmd::InsertText {
            at: 5,
            text: " world".to_string(),
        };

        let delta = compile_command(&rope, &cmd);

        assert_eq!(delta.apply(&rope).to_string(), "hello world");
    }

    #[test]
    fn test_compile_replace_and_delete() {
        let rope = Rope::from("hello world");

        let replaced = compile_command(
            &rope,
            &Cmd::ReplaceRange {
                range: 0..5,
                text: "**hello**".to_string(),
            },
        );
        assert_eq!(replaced.apply(&rope).to_string(), "**hello** world");

        let deleted = compile_command(&rope, &Cmd::DeleteRange { range: 5..11 });
        assert_eq!(deleted.apply(&rope).to_string(), "hello");
    }

    #[rstest]
    #[case::caret_at_insert(3..3, Cmd::InsertText { at: 3, text: "ab".into() }, 5..5)]
    #[case::before_edit(1..2, Cmd::InsertText { at: 3, text: "ab".into() }, 1..2)]
    #[case::after_delete(8..9, Cmd::DeleteRange { range: 2..5 }, 5..6)]
    #[case::inside_replace(3..4, Cmd::ReplaceRange { range: 2..6, text: "x".into() }, 3..3)]
    #[case::spanning(0..10, Cmd::ReplaceRange { range: 2..6, text: "xy".into() }, 0..8)]
    fn test_transform_selection(
        #[case] selection: Range<usize>,
        #[case] cmd: Cmd,
        #[case] expected: Range<usize>,
    ) {
        assert_eq!(transform_selection_for_command(&selection, &cmd), expected);
    }
}

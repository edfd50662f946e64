//! Shared fixtures for unit tests.
//!
//! Selections are written inline: `«` and `»` bracket a selected range and
//! `‸` marks a bare caret. `"he‸llo"` is the text `hello` with the caret at 2.

use std::ops::Range;

use crate::editing::apply::apply_style;
use crate::editing::buffer::TextBuffer;
use crate::editing::styles::StyleRegistry;

const SELECTION_START: char = '«';
const SELECTION_END: char = '»';
const CARET: char = '‸';

/// Build a buffer from marked-up text
///
/// # Panics
/// Panics when the text has no markers or unbalanced ones.
pub fn parse_marked(marked: &str) -> TextBuffer {
    let mut text = String::with_capacity(marked.len());
    let mut start = None;
    let mut end = None;
    for ch in marked.chars() {
        match ch {
            SELECTION_START => start = Some(text.len()),
            SELECTION_END => end = Some(text.len()),
            CARET => {
                start = Some(text.len());
                end = Some(text.len());
            }
            _ => text.push(ch),
        }
    }
    let (Some(start), Some(end)) = (start, end) else {
        panic!("no selection markers in {marked:?}");
    };
    TextBuffer::new(text, start..end)
}

/// Render text with its selection marked up the way [`parse_marked`] reads it
pub fn render_marked(text: &str, selection: Range<usize>) -> String {
    if selection.is_empty() {
        format!("{}{CARET}{}", &text[..selection.start], &text[selection.start..])
    } else {
        format!(
            "{}{SELECTION_START}{}{SELECTION_END}{}",
            &text[..selection.start],
            &text[selection.clone()],
            &text[selection.end..]
        )
    }
}

/// Apply a built-in style to marked-up text and render the outcome
pub fn apply_marked(marked: &str, style: &str) -> String {
    let registry = StyleRegistry::builtin();
    let mut buffer = parse_marked(marked);
    apply_style(&mut buffer, registry.get(style).unwrap()).unwrap();
    render_marked(buffer.text(), buffer.selection())
}

#[test]
fn test_marked_round_trip() {
    let buffer = parse_marked("a«bc»d");
    assert_eq!(buffer.text(), "abcd");
    assert_eq!(buffer.selection(), 1..3);
    assert_eq!(render_marked(buffer.text(), buffer.selection()), "a«bc»d");

    let caret = parse_marked("ab‸");
    assert_eq!(caret.selection(), 2..2);
    assert_eq!(render_marked(caret.text(), caret.selection()), "ab‸");
}

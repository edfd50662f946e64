//! Selection expansion for collapsed selections.
//!
//! Words are runs of non-whitespace characters; punctuation and existing
//! markdown markers count as part of the word, which is what lets a second
//! `bold` on `**word**` find and strip the markers again.

use std::ops::Range;

/// Walk back from `offset` while the previous character is not whitespace
///
/// A caret at the very end of the text has no word under it and stays put.
pub fn word_start(text: &str, offset: usize) -> usize {
    if offset >= text.len() {
        return offset;
    }
    text[..offset]
        .char_indices()
        .rev()
        .take_while(|(_, ch)| !ch.is_whitespace())
        .last()
        .map_or(offset, |(index, _)| index)
}

/// Walk forward from `offset` until whitespace, or only until a newline in
/// multiline mode
pub fn word_end(text: &str, offset: usize, multiline: bool) -> usize {
    let is_break = |ch: char| {
        if multiline {
            ch == '\n'
        } else {
            ch.is_whitespace()
        }
    };

    text[offset..]
        .char_indices()
        .find(|(_, ch)| is_break(*ch))
        .map_or(text.len(), |(index, _)| offset + index)
}

/// The word enclosing `offset`
pub fn expand_to_word(text: &str, offset: usize, multiline: bool) -> Range<usize> {
    word_start(text, offset)..word_end(text, offset, multiline)
}

/// Start of the line containing `offset`
pub fn line_start(text: &str, offset: usize) -> usize {
    text[..offset].rfind('\n').map_or(0, |newline| newline + 1)
}

/// End of the content of the line containing `offset` (before its newline)
pub fn line_end(text: &str, offset: usize) -> usize {
    text[offset..]
        .find('\n')
        .map_or(text.len(), |newline| offset + newline)
}

/// Cover every line the selection touches, without taking the last line's newline
pub fn expand_to_line(text: &str, selection: Range<usize>) -> Range<usize> {
    line_start(text, selection.start)..line_end(text, selection.end)
}

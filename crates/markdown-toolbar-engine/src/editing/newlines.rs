use std::ops::Range;

use crate::editing::buffer::clamp_selection;

/// Blank-line padding for a block construct
///
/// `to_append` goes in front of the construct (it is appended to the text
/// before the selection) and `to_prepend` goes after it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Newlines {
    pub to_append: &'static str,
    pub to_prepend: &'static str,
}

impl Newlines {
    /// Total bytes of padding
    pub fn len(&self) -> usize {
        self.to_append.len() + self.to_prepend.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Work out how many newlines separate the selection from surrounding
/// paragraphs and how many are missing to make it exactly one blank line
pub fn surrounding_newlines(text: &str, selection: Range<usize>) -> Newlines {
    let selection = clamp_selection(text, selection);
    let before = &text[..selection.start];
    let after = &text[selection.end..];

    let breaks_before = before.bytes().rev().take_while(|&b| b == b'\n').count();
    let breaks_after = after.bytes().take_while(|&b| b == b'\n').count();

    Newlines {
        to_append: padding(breaks_before, has_content(before)),
        to_prepend: padding(breaks_after, has_content(after)),
    }
}

fn has_content(text: &str) -> bool {
    text.chars().any(|ch| !ch.is_whitespace())
}

fn padding(existing_breaks: usize, has_content: bool) -> &'static str {
    if !has_content {
        return "";
    }
    match existing_breaks {
        0 => "\n\n",
        1 => "\n",
        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::whole_document("abc", 0..3, "", "")]
    #[case::glued_both_sides("x|y", 1..2, "\n\n", "\n\n")]
    #[case::one_newline_each_side("x\n|\ny", 2..3, "\n", "\n")]
    #[case::already_padded("x\n\n|\n\ny", 3..4, "", "")]
    #[case::more_than_two("x\n\n\n|y", 4..5, "", "\n\n")]
    #[case::only_whitespace_before("  \n|", 3..4, "", "")]
    #[case::only_whitespace_after("x|\n \n", 1..2, "\n\n", "")]
    #[case::caret_at_start("abc", 0..0, "", "\n\n")]
    fn test_surrounding_newlines(
        #[case] text: &str,
        #[case] selection: Range<usize>,
        #[case] to_append: &str,
        #[case] to_prepend: &str,
    ) {
        let newlines = surrounding_newlines(text, selection);

        assert_eq!(newlines.to_append, to_append);
        assert_eq!(newlines.to_prepend, to_prepend);
    }

    #[test]
    fn test_out_of_range_selection_is_clamped() {
        let newlines = surrounding_newlines("para", 10..20);

        assert_eq!(newlines.to_append, "\n\n");
        assert_eq!(newlines.to_prepend, "");
        assert_eq!(newlines.len(), 2);
    }

    #[test]
    fn test_default_is_empty() {
        assert!(Newlines::default().is_empty());
    }
}

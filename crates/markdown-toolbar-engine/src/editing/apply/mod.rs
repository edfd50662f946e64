//! Style appliers and the dispatcher that picks one.

mod block;
mod list;
mod multiline;

use crate::editing::buffer::TextBuffer;
use crate::editing::result::StyleResult;
use crate::editing::styles::{StyleError, StyleSpec};

/// Compute the result of applying `spec` to the buffer's selection
///
/// The buffer's text is left untouched; its selection is moved to the span
/// that `StyleResult::text` replaces.
pub fn style_selected_text(
    buffer: &mut TextBuffer,
    spec: &StyleSpec,
) -> Result<StyleResult, StyleError> {
    if spec.is_list() {
        log::debug!("List style on {:?}", buffer.selection());
        Ok(list::list_style(buffer, spec))
    } else if spec.multiline && is_multiple_lines(buffer.selected_text()) {
        log::debug!("Multiline style on {:?}", buffer.selection());
        Ok(multiline::multiline_style(buffer, spec))
    } else {
        log::debug!("Block style on {:?}", buffer.selection());
        block::block_style(buffer, spec)
    }
}

/// Compute and commit in one step
pub fn apply_style(buffer: &mut TextBuffer, spec: &StyleSpec) -> Result<StyleResult, StyleError> {
    let result = style_selected_text(buffer, spec)?;
    buffer.commit(&result);
    Ok(result)
}

/// True when the text still spans several lines after trimming surrounding whitespace
pub fn is_multiple_lines(text: &str) -> bool {
    text.trim().contains('\n')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editing::styles::StyleRegistry;
    use crate::tests::{apply_marked, render_marked};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case::single("one line", false)]
    #[case::two("a\nb", true)]
    #[case::trailing_newline("a\n", false)]
    #[case::surrounded_by_blank_lines("\n\na\n\n", false)]
    fn test_is_multiple_lines(#[case] text: &str, #[case] expected: bool) {
        assert_eq!(is_multiple_lines(text), expected);
    }

    #[test]
    fn test_multiline_style_on_single_line_falls_back_to_block() {
        // A single quoted line behaves like wrapping, not per-line splitting
        assert_eq!(apply_marked("«hello»", "quote"), "> «hello»");
    }

    #[test]
    fn test_multiline_style_on_several_lines_is_per_line() {
        assert_eq!(apply_marked("«a\nb»", "quote"), "«> a\n> b»");
    }

    #[test]
    fn test_list_styles_win_over_multiline() {
        assert_eq!(apply_marked("«a\nb»", "unordered-list"), "«- a\n- b»");
    }

    #[test]
    fn test_apply_style_commits_into_buffer() {
        let registry = StyleRegistry::builtin();
        let mut buffer = TextBuffer::new("hello world", 6..11);

        let result = apply_style(&mut buffer, registry.get("italic").unwrap()).unwrap();

        assert_eq!(buffer.text(), "hello *world*");
        assert_eq!(render_marked(buffer.text(), result.selection()), "hello *«world»*");
    }

    #[test]
    fn test_style_selected_text_leaves_text_alone() {
        let registry = StyleRegistry::builtin();
        let mut buffer = TextBuffer::with_caret("hello world", 2);

        let result = style_selected_text(&mut buffer, registry.get("bold").unwrap()).unwrap();

        assert_eq!(buffer.text(), "hello world");
        assert_eq!(buffer.selection(), 0..5);
        assert_eq!(result.text, "**hello**");
    }
}

use crate::editing::apply::is_multiple_lines;
use crate::editing::buffer::TextBuffer;
use crate::editing::result::StyleResult;
use crate::editing::styles::{StyleError, StyleSpec};
use crate::editing::undo::strip_wrapping;

/// Wrap the selection in a prefix/suffix pair, or unwrap it if already wrapped
pub(crate) fn block_style(
    buffer: &mut TextBuffer,
    spec: &StyleSpec,
) -> Result<StyleResult, StyleError> {
    let original = buffer.selection();
    let multiple_lines = is_multiple_lines(buffer.selected_text());

    let base_prefix = if multiple_lines && !spec.block_prefix.is_empty() {
        format!("{}\n", spec.block_prefix)
    } else {
        spec.prefix.clone()
    };
    let mut suffix = if multiple_lines && !spec.block_suffix.is_empty() {
        format!("\n{}", spec.block_suffix)
    } else {
        spec.suffix.clone()
    };

    let grown = expand_selected_text(buffer, &base_prefix, &suffix, spec.multiline);
    let selection = buffer.selection();

    let mut prefix = base_prefix.clone();
    if spec.prefix_space
        && !grown
        && buffer
            .char_before(selection.start)
            .is_some_and(|ch| !ch.is_whitespace())
    {
        // Keep the prefix from gluing onto the previous word
        prefix.insert(0, ' ');
    }
    let selected = buffer.selected_text().to_string();

    // Placeholder token and its position inside the suffix
    let placeholder = spec
        .replace_next
        .as_deref()
        .filter(|token| !token.is_empty() && !selected.is_empty())
        .and_then(|token| suffix.find(token).map(|at| (token, at)));

    if spec.surround_with_newlines {
        let newlines = buffer.surrounding_newlines();
        // Padding replaces the separating space
        prefix = format!("{}{base_prefix}", newlines.to_append);
        suffix.push_str(newlines.to_prepend);
    }

    if let Some(inner) = strip_wrapping(&selected, &prefix, &suffix) {
        let inner_end = selection.start + inner.len();
        let range = if original.is_empty() {
            let caret = original
                .start
                .saturating_sub(prefix.len())
                .clamp(selection.start, inner_end);
            caret..caret
        } else {
            selection.start..inner_end
        };
        return Ok(StyleResult::new(inner, range));
    }

    let Some((token, token_at)) = placeholder else {
        let (leading, body, trailing) = if spec.trim_first {
            split_whitespace_edges(&selected)
        } else {
            ("", selected.as_str(), "")
        };
        let text = format!("{leading}{prefix}{body}{suffix}{trailing}");
        let start = selection.start + leading.len() + prefix.len();
        return Ok(StyleResult::new(text, start..start + body.len()));
    };

    let scan = spec.scan_pattern()?;
    if scan.is_some_and(|pattern| pattern.is_match(&selected)) {
        // The selection already is what the placeholder asks for
        let text = format!("{prefix}{}", suffix.replacen(token, &selected, 1));
        let caret = selection.start + prefix.len();
        Ok(StyleResult::new(text, caret..caret))
    } else {
        let text = format!("{prefix}{selected}{suffix}");
        let start = selection.start + prefix.len() + selected.len() + token_at;
        Ok(StyleResult::new(text, start..start + token.len()))
    }
}

/// Expand a caret to its word, or grow a selection over a wrapper that
/// already surrounds it. Returns true when the selection was grown over a wrapper.
fn expand_selected_text(
    buffer: &mut TextBuffer,
    prefix: &str,
    suffix: &str,
    multiline: bool,
) -> bool {
    let selection = buffer.selection();
    if selection.is_empty() {
        buffer.expand_to_word(multiline);
        return false;
    }

    let text = buffer.text();
    let expanded_start = selection.start.checked_sub(prefix.len());
    let expanded_end = selection.end + suffix.len();
    let begins_with_prefix = expanded_start
        .and_then(|start| text.get(start..selection.start))
        .is_some_and(|before| before == prefix);
    let ends_with_suffix = text
        .get(selection.end..expanded_end)
        .is_some_and(|after| after == suffix);

    match (begins_with_prefix, ends_with_suffix, expanded_start) {
        (true, true, Some(start)) => {
            buffer.set_selection(start..expanded_end);
            true
        }
        _ => false,
    }
}

/// Split text into leading whitespace, body and trailing whitespace
fn split_whitespace_edges(text: &str) -> (&str, &str, &str) {
    let body_start = text.len() - text.trim_start().len();
    if body_start == text.len() {
        return (text, "", "");
    }
    let body_end = text.trim_end().len();
    (
        &text[..body_start],
        &text[body_start..body_end],
        &text[body_end..],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::apply_marked;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case::caret_in_word("hello wo‸rld", "bold", "hello **«world»**")]
    #[case::selection("«hello» world", "bold", "**«hello»** world")]
    #[case::empty_caret("a ‸ b", "bold", "a **‸** b")]
    #[case::italic("«x»", "italic", "*«x»*")]
    #[case::strikethrough("«gone»", "strikethrough", "~~«gone»~~")]
    #[case::inline_code("run «cargo»", "code", "run `«cargo»`")]
    #[case::header("‸Title", "header-2", "## «Title»")]
    fn test_wrap(#[case] marked: &str, #[case] style: &str, #[case] expected: &str) {
        assert_eq!(apply_marked(marked, style), expected);
    }

    #[rstest]
    #[case::selected_inner("**«hello»** world", "bold", "«hello» world")]
    #[case::selected_outer("«**hello**» world", "bold", "«hello» world")]
    #[case::caret_inside("**he‸llo** world", "bold", "he‸llo world")]
    #[case::caret_on_marker("*‸*hello** world", "bold", "‸hello world")]
    #[case::caret_at_end("**hello‸**", "bold", "hello‸")]
    #[case::header("## «Title»", "header-2", "«Title»")]
    fn test_unwrap(#[case] marked: &str, #[case] style: &str, #[case] expected: &str) {
        assert_eq!(apply_marked(marked, style), expected);
    }

    #[test]
    fn test_trim_first_moves_whitespace_outside_markers() {
        assert_eq!(apply_marked("a«  bold  »b", "bold"), "a  **«bold»**  b");
    }

    #[test]
    fn test_trim_first_on_whitespace_only_selection() {
        assert_eq!(apply_marked("a«   »b", "bold"), "a   **‸**b");
    }

    #[test]
    fn test_multi_line_code_uses_fence() {
        assert_eq!(
            apply_marked("«let a = 1;\nlet b = 2;»", "code"),
            "```\n«let a = 1;\nlet b = 2;»\n```"
        );
    }

    #[test]
    fn test_multi_line_code_fence_toggles_off() {
        assert_eq!(
            apply_marked("```\n«let a = 1;\nlet b = 2;»\n```", "code"),
            "«let a = 1;\nlet b = 2;»"
        );
    }

    #[rstest]
    #[case::caret_after_word("hi‸", "mention", "hi @‸")]
    #[case::caret_after_text("see issue‸", "ref", "see issue #‸")]
    #[case::caret_before_text("hi ‸ there", "mention", "hi @‸ there")]
    #[case::caret_in_word("say h‸i", "mention", "say @«hi»")]
    #[case::after_space("hi ‸", "mention", "hi @‸")]
    #[case::start_of_text("‸", "ref", "#‸")]
    #[case::word_selected("see «42»", "ref", "see #«42»")]
    #[case::glued_to_punctuation("a.«b»", "mention", "a. @«b»")]
    #[case::toggle_off("hi @«bob»", "mention", "hi «bob»")]
    fn test_prefix_space(#[case] marked: &str, #[case] style: &str, #[case] expected: &str) {
        assert_eq!(apply_marked(marked, style), expected);
    }

    #[test]
    fn test_link_selects_url_placeholder() {
        assert_eq!(apply_marked("«docs»", "link"), "[docs](«url»)");
    }

    #[test]
    fn test_link_without_text_places_caret_in_label() {
        assert_eq!(apply_marked("‸", "link"), "[‸](url)");
    }

    #[test]
    fn test_link_with_url_selected_fills_placeholder() {
        assert_eq!(
            apply_marked("«https://example.com»", "link"),
            "[‸](https://example.com)"
        );
    }

    #[test]
    fn test_image_with_url_selected_fills_placeholder() {
        assert_eq!(
            apply_marked("see «http://x.io/a.png»", "image"),
            "see ![‸](http://x.io/a.png)"
        );
    }

    #[test]
    fn test_invalid_scan_pattern_is_reported() {
        let spec = StyleSpec {
            replace_next: Some("url".to_string()),
            scan_for: Some("(".to_string()),
            ..StyleSpec::wrap("[", "](url)")
        };
        let mut buffer = TextBuffer::new("text", 0..4);

        let err = block_style(&mut buffer, &spec).unwrap_err();

        assert!(matches!(err, StyleError::InvalidPattern { .. }));
    }

    #[test]
    fn test_split_whitespace_edges() {
        assert_eq!(split_whitespace_edges(" a b  "), (" ", "a b", "  "));
        assert_eq!(split_whitespace_edges("ab"), ("", "ab", ""));
        assert_eq!(split_whitespace_edges("   "), ("   ", "", ""));
        assert_eq!(split_whitespace_edges(""), ("", "", ""));
    }
}

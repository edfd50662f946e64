use crate::editing::buffer::TextBuffer;
use crate::editing::newlines::Newlines;
use crate::editing::result::StyleResult;
use crate::editing::styles::StyleSpec;
use crate::editing::undo::undo_multiline;

/// Wrap every selected line in the prefix/suffix pair, or strip it from
/// every line when all of them already carry it
pub(crate) fn multiline_style(buffer: &mut TextBuffer, spec: &StyleSpec) -> StyleResult {
    let selection = buffer.selection();

    let undone = undo_multiline(buffer.selected_text(), &spec.prefix, &spec.suffix);
    if undone.processed {
        let end = selection.start + undone.text.len();
        return StyleResult::new(undone.text, selection.start..end);
    }

    let wrapped = buffer
        .selected_text()
        .split('\n')
        .map(|line| format!("{}{line}{}", spec.prefix, spec.suffix))
        .collect::<Vec<_>>()
        .join("\n");

    let newlines = if spec.surround_with_newlines {
        buffer.surrounding_newlines()
    } else {
        Newlines::default()
    };
    let start = selection.start + newlines.to_append.len();
    let end = start + wrapped.len();

    StyleResult::new(
        format!("{}{wrapped}{}", newlines.to_append, newlines.to_prepend),
        start..end,
    )
}

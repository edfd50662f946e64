use crate::editing::buffer::TextBuffer;
use crate::editing::result::StyleResult;
use crate::editing::styles::StyleSpec;
use crate::editing::undo::{UNORDERED_MARKER, clear_existing_list_style};

/// Toggle an ordered or unordered list over the selected lines
///
/// A list of the other kind is converted in place rather than nested.
pub(crate) fn list_style(buffer: &mut TextBuffer, spec: &StyleSpec) -> StyleResult {
    let original = buffer.selection();
    buffer.expand_to_line();
    let lines = buffer.selection();

    let (requested, opposite, pristine) = clear_existing_list_style(spec, buffer.selected_text());

    if requested.processed {
        let range = if original.is_empty() {
            // Only the markers in front of the caret move it
            let removed = requested.stripped_on_line(0) + opposite.stripped_on_line(0);
            let caret = original.start - removed.min(original.start - lines.start);
            caret..caret
        } else {
            lines.start..lines.start + pristine.len()
        };
        return StyleResult::new(pristine, range);
    }

    let markers: Vec<String> = (0..pristine.split('\n').count())
        .map(|index| list_marker(index, spec.unordered_list))
        .collect();
    let added: usize = markers.iter().map(String::len).sum();
    let body = pristine
        .split('\n')
        .zip(&markers)
        .map(|(line, marker)| format!("{marker}{line}"))
        .collect::<Vec<_>>()
        .join("\n");

    let newlines = buffer.surrounding_newlines();
    let start = lines.start + newlines.to_append.len();
    let range = if original.is_empty() {
        let first_marker = markers.first().map_or(0, String::len);
        let column = (original.start - lines.start).saturating_sub(opposite.stripped_on_line(0));
        let caret = start + first_marker + column;
        caret..caret
    } else {
        start..lines.end + newlines.to_append.len() + added - opposite.stripped_total()
    };

    StyleResult::new(
        format!("{}{body}{}", newlines.to_append, newlines.to_prepend),
        range,
    )
}

/// Marker for the list item at `index`; ordered lists always count from 1
fn list_marker(index: usize, unordered: bool) -> String {
    if unordered {
        UNORDERED_MARKER.to_string()
    } else {
        format!("{}. ", index + 1)
    }
}

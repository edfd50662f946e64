//! Heading level cycling for the line under the caret.
//!
//! Repeated presses walk `text` → `## text` → `### text` → `#### text` → `text`.

use crate::editing::buffer::TextBuffer;
use crate::editing::result::StyleResult;

/// Level at which the next press removes the heading again
pub const MAX_CYCLED_LEVEL: usize = 4;

/// Advance the heading level of the caret's line
///
/// The buffer's selection is moved to the line, which is what the returned
/// text replaces. The result selects the heading text after its `#` run.
pub fn cycle_heading(buffer: &mut TextBuffer) -> StyleResult {
    let caret = buffer.selection().start;
    buffer.set_selection(caret..caret);
    buffer.expand_to_line();
    let line_range = buffer.selection();
    let line = buffer.selected_text();

    let level = heading_level(line);
    let replaced = if level == 0 || level == line.len() {
        format!("## {line}")
    } else if level >= MAX_CYCLED_LEVEL {
        let rest = &line[level..];
        rest.strip_prefix(' ').unwrap_or(rest).to_string()
    } else {
        format!("#{line}")
    };
    log::debug!("Heading level {level} -> {}", heading_level(&replaced));

    let start = line_range.start + heading_level(&replaced);
    let end = line_range.start + replaced.len();
    StyleResult::new(replaced, start..end)
}

/// Number of leading `#` characters
pub fn heading_level(line: &str) -> usize {
    line.bytes().take_while(|&b| b == b'#').count()
}

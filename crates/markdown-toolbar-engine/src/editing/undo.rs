//! Detectors that recognise an existing style and strip it.
//!
//! Line-based detectors are all-or-nothing: if a single line of the input
//! does not carry the style, nothing is stripped and the caller applies the
//! style fresh instead.

use std::sync::OnceLock;

use regex::Regex;

use crate::editing::styles::StyleSpec;

/// Bullet written by the unordered list style
pub const UNORDERED_MARKER: &str = "- ";

/// Outcome of an undo attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UndoResult {
    pub text: String,
    /// True when every line carried the style and it was stripped
    pub processed: bool,
    /// Bytes stripped from each line, in line order (all zero when not processed)
    pub stripped: Vec<usize>,
}

impl UndoResult {
    fn untouched(text: &str) -> Self {
        Self {
            text: text.to_string(),
            processed: false,
            stripped: vec![0; text.split('\n').count()],
        }
    }

    /// Total bytes stripped across all lines
    pub fn stripped_total(&self) -> usize {
        self.stripped.iter().sum()
    }

    /// Bytes stripped from the line at `index`
    pub fn stripped_on_line(&self, index: usize) -> usize {
        self.stripped.get(index).copied().unwrap_or(0)
    }
}

/// True when `predicate` holds for every `\n`-separated line
pub fn every_line(text: &str, predicate: impl Fn(&str) -> bool) -> bool {
    text.split('\n').all(predicate)
}

/// Length of a leading `N. ` marker
pub fn ordered_marker_len(line: &str) -> Option<usize> {
    static ORDERED_MARKER: OnceLock<Regex> = OnceLock::new();
    let marker = ORDERED_MARKER
        .get_or_init(|| Regex::new(r"^[0-9]+\.\s+").expect("Invalid ordered list marker regex"));
    marker.find(line).map(|found| found.end())
}

pub fn is_ordered_item(line: &str) -> bool {
    ordered_marker_len(line).is_some()
}

pub fn is_unordered_item(line: &str) -> bool {
    line.starts_with(UNORDERED_MARKER)
}

/// Strip `prefix` and `suffix` from `text` if it is wrapped in both
///
/// The two must not overlap: `"**"` is not considered wrapped in `**`/`**`.
pub fn strip_wrapping<'a>(text: &'a str, prefix: &str, suffix: &str) -> Option<&'a str> {
    if text.len() < prefix.len() + suffix.len() {
        return None;
    }
    text.strip_prefix(prefix)?.strip_suffix(suffix)
}

/// Strip every line when all of them `carry` the style, otherwise none
fn strip_every_line<'a>(
    text: &'a str,
    carries: impl Fn(&str) -> bool,
    strip: impl Fn(&'a str) -> &'a str,
) -> UndoResult {
    if !every_line(text, carries) {
        return UndoResult::untouched(text);
    }

    let lines: Vec<(&str, usize)> = text
        .split('\n')
        .map(|line| {
            let rest = strip(line);
            (rest, line.len() - rest.len())
        })
        .collect();

    UndoResult {
        text: lines
            .iter()
            .map(|(rest, _)| *rest)
            .collect::<Vec<_>>()
            .join("\n"),
        processed: true,
        stripped: lines.iter().map(|(_, removed)| *removed).collect(),
    }
}

pub fn undo_ordered_list(text: &str) -> UndoResult {
    strip_every_line(text, is_ordered_item, |line| {
        &line[ordered_marker_len(line).unwrap_or(0)..]
    })
}

pub fn undo_unordered_list(text: &str) -> UndoResult {
    strip_every_line(text, is_unordered_item, |line| {
        line.strip_prefix(UNORDERED_MARKER).unwrap_or(line)
    })
}

/// Strip a per-line prefix/suffix pair from every line
pub fn undo_multiline(text: &str, prefix: &str, suffix: &str) -> UndoResult {
    strip_every_line(
        text,
        |line| strip_wrapping(line, prefix, suffix).is_some(),
        |line| strip_wrapping(line, prefix, suffix).unwrap_or(line),
    )
}

/// Undo the requested list type, then the opposite one on what is left
///
/// Returns `(requested, opposite, pristine)`. `requested.processed` means the
/// user is toggling the list off; `opposite.processed` means a list of the
/// other type was converted.
pub fn clear_existing_list_style(spec: &StyleSpec, text: &str) -> (UndoResult, UndoResult, String) {
    let (requested, opposite) = if spec.ordered_list {
        let requested = undo_ordered_list(text);
        let opposite = undo_unordered_list(&requested.text);
        (requested, opposite)
    } else {
        let requested = undo_unordered_list(text);
        let opposite = undo_ordered_list(&requested.text);
        (requested, opposite)
    };
    let pristine = opposite.text.clone();
    (requested, opposite, pristine)
}

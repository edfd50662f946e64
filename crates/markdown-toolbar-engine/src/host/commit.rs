use crate::editing::buffer::clamp_selection;
use crate::editing::result::StyleResult;
use crate::host::TextHost;

/// How the [`Committer`] writes results into its host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertMode {
    /// Replace the selection through the host's native insert, keeping the
    /// host's own undo stack intact
    Incremental,
    /// Rebuild the full text and set it in one go
    Overwrite,
}

impl InsertMode {
    /// Ask the host which mode it can handle
    pub fn probe<H: TextHost + ?Sized>(host: &H) -> Self {
        if host.supports_incremental_insert() {
            InsertMode::Incremental
        } else {
            InsertMode::Overwrite
        }
    }
}

/// Writes a [`StyleResult`] over the host's current selection
///
/// The mode is decided once, at construction. If an incremental insert ever
/// claims success but the text does not show it, the committer switches to
/// overwrite for the rest of its life.
#[derive(Debug, Clone)]
pub struct Committer {
    mode: InsertMode,
}

impl Committer {
    pub fn new(mode: InsertMode) -> Self {
        Self { mode }
    }

    pub fn for_host<H: TextHost + ?Sized>(host: &H) -> Self {
        Self::new(InsertMode::probe(host))
    }

    pub fn mode(&self) -> InsertMode {
        self.mode
    }

    /// Replace the host's selection with `result.text` and restore the
    /// result's selection
    pub fn commit<H: TextHost + ?Sized>(&mut self, host: &mut H, result: &StyleResult) {
        let text = host.text();
        let selection = clamp_selection(&text, host.selection());
        let before = &text[..selection.start];
        let after = &text[selection.end..];

        if self.mode == InsertMode::Incremental {
            let expected_len = before.len() + result.text.len() + after.len();
            let applied = host.insert_at_selection(&result.text);
            let current = host.text();
            let landed = applied
                && current.len() == expected_len
                && current.starts_with(before)
                && current[before.len()..].starts_with(result.text.as_str())
                && current.ends_with(after);

            if landed {
                host.set_selection(result.selection());
                return;
            }
            log::warn!("Incremental insert did not land, switching to overwrite");
            self.mode = InsertMode::Overwrite;
        }

        host.set_text(&format!("{before}{}{after}", result.text));
        host.set_selection(result.selection());
    }
}

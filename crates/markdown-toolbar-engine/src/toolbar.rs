use std::fmt::Display;
use std::ops::Range;

use crate::editing::apply::style_selected_text;
use crate::editing::buffer::TextBuffer;
use crate::editing::heading;
use crate::editing::result::StyleResult;
use crate::editing::styles::{StyleError, StyleRegistry};
use crate::host::TextHost;
use crate::host::commit::{Committer, InsertMode};
use crate::upload::{PendingUpload, UPLOAD_PLACEHOLDER, UploadError, image_markdown};

/// Toolbar actions bound to one host
///
/// Every action reads the host's text and selection, computes a replacement
/// with the styling engine and writes it back through a [`Committer`].
///
/// ```rust
/// use markdown_toolbar_engine::{RopeHost, TextHost, Toolbar};
///
/// let mut host = RopeHost::new("hello world");
/// host.set_selection(2..2);
/// let mut toolbar = Toolbar::new(host);
///
/// toolbar.apply_style("bold").unwrap();
///
/// assert_eq!(toolbar.host().text(), "**hello** world");
/// assert_eq!(toolbar.host().selection(), 2..7);
/// ```
pub struct Toolbar<H: TextHost> {
    host: H,
    registry: StyleRegistry,
    committer: Committer,
}

impl<H: TextHost> Toolbar<H> {
    /// Toolbar with the built-in styles
    pub fn new(host: H) -> Self {
        Self::with_registry(host, StyleRegistry::builtin())
    }

    pub fn with_registry(host: H, registry: StyleRegistry) -> Self {
        let committer = Committer::for_host(&host);
        log::debug!("Toolbar commits in {:?} mode", committer.mode());
        Self {
            host,
            registry,
            committer,
        }
    }

    /// Force a commit mode instead of probing the host
    pub fn with_insert_mode(mut self, mode: InsertMode) -> Self {
        self.committer = Committer::new(mode);
        self
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn into_host(self) -> H {
        self.host
    }

    pub fn registry(&self) -> &StyleRegistry {
        &self.registry
    }

    pub fn insert_mode(&self) -> InsertMode {
        self.committer.mode()
    }

    /// Apply or toggle off the named style on the host's selection
    pub fn apply_style(&mut self, name: &str) -> Result<StyleResult, StyleError> {
        self.host.focus();
        let mut buffer = self.working_buffer();
        let result = {
            let spec = self.registry.get(name)?;
            style_selected_text(&mut buffer, spec)?
        };
        log::debug!("Style {name} replaces {:?}", buffer.selection());
        self.commit_over(buffer.selection(), &result);
        Ok(result)
    }

    /// Step the heading level of the caret's line
    pub fn cycle_heading(&mut self) -> StyleResult {
        self.host.focus();
        let mut buffer = self.working_buffer();
        let result = heading::cycle_heading(&mut buffer);
        self.commit_over(buffer.selection(), &result);
        result
    }

    /// Insert the upload placeholder at the caret
    ///
    /// A selection is collapsed to its start first; the caret stays in front
    /// of the placeholder.
    pub fn begin_upload(&mut self) -> PendingUpload {
        self.host.focus();
        let start = self.working_buffer().selection().start;
        let result = StyleResult::new(UPLOAD_PLACEHOLDER, start..start);
        self.commit_over(start..start, &result);

        let range = start..start + UPLOAD_PLACEHOLDER.len();
        let pending = PendingUpload::new(self.host.track(range.clone()), range);
        log::debug!("Upload {} started at {:?}", pending.id, pending.range);
        pending
    }

    /// Resolve a placeholder once the upload finished
    ///
    /// On success the placeholder becomes the image markdown with the caret
    /// after it. On failure the placeholder is removed and the upload error
    /// is returned. If the placeholder was edited away in the meantime the
    /// document is left alone.
    pub fn finish_upload<E: Display>(
        &mut self,
        pending: PendingUpload,
        outcome: Result<String, E>,
    ) -> Result<StyleResult, UploadError> {
        let located = self.locate_placeholder(&pending);
        if let Some(anchor) = pending.anchor {
            self.host.untrack(anchor);
        }
        let Some(range) = located else {
            log::warn!("Upload {} finished but its placeholder is gone", pending.id);
            return Err(UploadError::PlaceholderLost(pending.id));
        };

        match outcome {
            Ok(url) => {
                let markdown = image_markdown(&url);
                let caret = range.start + markdown.len();
                let result = StyleResult::new(markdown, caret..caret);
                self.commit_over(range, &result);
                Ok(result)
            }
            Err(err) => {
                log::warn!("Upload {} failed: {err}", pending.id);
                let caret = range.start;
                self.commit_over(range, &StyleResult::new("", caret..caret));
                Err(UploadError::Failed(err.to_string()))
            }
        }
    }

    /// Current span of the placeholder, if it is still intact
    fn locate_placeholder(&self, pending: &PendingUpload) -> Option<Range<usize>> {
        let range = match pending.anchor {
            Some(anchor) => self.host.tracked(anchor)?,
            None => pending.range.clone(),
        };
        let text = self.host.text();
        (text.get(range.clone()) == Some(UPLOAD_PLACEHOLDER)).then_some(range)
    }

    fn working_buffer(&self) -> TextBuffer {
        TextBuffer::new(self.host.text(), self.host.selection())
    }

    fn commit_over(&mut self, span: Range<usize>, result: &StyleResult) {
        self.host.set_selection(span);
        self.committer.commit(&mut self.host, result);
    }
}

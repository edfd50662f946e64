//! Image upload placeholders.
//!
//! The upload itself happens outside the engine. The toolbar drops a
//! placeholder at the caret when it starts and swaps it for the finished
//! image, or removes it, once the caller reports back.

use std::ops::Range;

use thiserror::Error;
use uuid::Uuid;

use crate::host::AnchorId;

/// Text shown while an upload is in flight
pub const UPLOAD_PLACEHOLDER: &str = "![Loading...](url)";

#[derive(Debug, Error)]
pub enum UploadError {
    #[error("Upload failed: {0}")]
    Failed(String),

    #[error("Upload placeholder {0} is no longer in the document")]
    PlaceholderLost(Uuid),
}

/// Handle for a placeholder waiting on an upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingUpload {
    pub id: Uuid,
    /// Live anchor on the placeholder, when the host can track spans
    pub anchor: Option<AnchorId>,
    /// Where the placeholder was inserted
    pub range: Range<usize>,
}

impl PendingUpload {
    pub(crate) fn new(anchor: Option<AnchorId>, range: Range<usize>) -> Self {
        Self {
            id: Uuid::new_v4(),
            anchor,
            range,
        }
    }
}

/// Markdown for an uploaded image
pub fn image_markdown(url: &str) -> String {
    format!("![img]({url})")
}

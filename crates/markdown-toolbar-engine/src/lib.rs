pub mod editing;
pub mod host;
pub mod toolbar;
pub mod upload;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use editing::{apply::*, buffer::*, heading::cycle_heading, result::*, styles::*};
pub use host::{Anchor, AnchorId, Cmd, Patch, TextHost, commit::*, rope_host::RopeHost};
pub use toolbar::Toolbar;
pub use upload::{PendingUpload, UPLOAD_PLACEHOLDER, UploadError, image_markdown};

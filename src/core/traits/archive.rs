use std::path::Path;

use crate::core::errors::Result;

/// Port for reading the version indicator a payload embeds in its own
/// archive format, independently of the signed header.
///
/// The implementation lives in `adapters::archive` (ZipCommentReader).
pub trait CommentReader: Send + Sync {
    /// Read the embedded comment of the archive that starts at byte
    /// `offset` of `path`. Errors if the payload is not a readable
    /// archive or carries no usable comment.
    fn read_comment(&self, path: &Path, offset: u64) -> Result<String>;
}

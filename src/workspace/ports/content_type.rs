//! Content-type detection port.

use crate::workspace::domain::MediaType;

/// Detects the media type of file contents.
///
/// Implementations wrap an external content-detection library. Returning
/// `None` means the type could not be determined.
pub trait ContentTypeDetector: Send + Sync {
    /// Detects the media type of `contents`.
    fn detect(&self, contents: &[u8]) -> Option<MediaType>;
}

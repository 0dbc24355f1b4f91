//! Error types for the gallery client.

use thiserror::Error;

/// Errors surfaced while wiring the gallery components to the page.
///
/// Stream-level failures never appear here: malformed records are
/// silently skipped and transport drops feed the reconnect loop.
#[derive(Debug, Error)]
pub enum GalleryError {
    /// The page path has no trailing segment to use as a collection id.
    #[error("no collection id in page path '{0}'")]
    MissingCollection(String),

    /// A required DOM element is missing from the page.
    #[error("element '{0}' not found in document")]
    ElementNotFound(String),
}

//! Collection identifiers and stream-URL construction.
//!
//! The last segment of the page path names the server-side collection;
//! the link stream for that collection lives at
//! `{scheme}://{host}/ws/{collection}`, with the scheme following the
//! page's own transport security tier.

use crate::constants::STREAM_PATH_PREFIX;
use crate::error::GalleryError;

/// Extract the collection id from a page path.
///
/// Fails when the last segment is empty, i.e. a trailing slash or the
/// site root - there is no collection to stream in that case.
pub fn collection_from_path(path: &str) -> Result<&str, GalleryError> {
    match path.rsplit('/').next() {
        Some(segment) if !segment.is_empty() => Ok(segment),
        _ => Err(GalleryError::MissingCollection(path.to_string())),
    }
}

/// Build the stream endpoint URL for a collection.
///
/// `secure` selects `wss://` over `ws://` and mirrors whether the page
/// itself was served over TLS.
pub fn stream_url(secure: bool, host: &str, collection: &str) -> String {
    let scheme = if secure { "wss" } else { "ws" };
    format!("{}://{}{}{}", scheme, host, STREAM_PATH_PREFIX, collection)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collection_from_path() {
        assert_eq!(collection_from_path("/gallery/holiday").unwrap(), "holiday");
        assert_eq!(collection_from_path("/deep/nested/clips").unwrap(), "clips");
        assert_eq!(collection_from_path("pics").unwrap(), "pics");
    }

    #[test]
    fn test_collection_missing_segment() {
        // Trailing slash and site root carry no collection id
        assert!(collection_from_path("/gallery/").is_err());
        assert!(collection_from_path("/").is_err());
        assert!(collection_from_path("").is_err());
    }

    #[test]
    fn test_stream_url_schemes() {
        assert_eq!(
            stream_url(false, "localhost:8000", "pics"),
            "ws://localhost:8000/ws/pics"
        );
        assert_eq!(
            stream_url(true, "media.example.com", "holiday"),
            "wss://media.example.com/ws/holiday"
        );
    }
}

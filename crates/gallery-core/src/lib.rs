//! # Gallery Core
//!
//! Core types and logic for the streaming media gallery client.
//! This crate is designed to be WASM-compatible and contains minimal dependencies.

#![warn(missing_docs)]

/// System constants
pub mod constants;

/// Cross-platform logging macros
pub mod logging;

/// Error types
pub mod error;

/// Collection identifiers and stream-URL construction
pub mod location;

/// Type definitions for stream records and connection state
pub mod types;

// Re-export commonly used items
pub use error::GalleryError;
pub use location::{collection_from_path, stream_url};
pub use types::{parse_message, ConnectionState, LinkRecord, MediaKind};

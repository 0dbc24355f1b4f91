//! Browser-side link-stream client

mod client;

pub use client::*;

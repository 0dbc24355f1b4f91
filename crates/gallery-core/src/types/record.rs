//! Link records streamed from the server.
//!
//! Each stream message is UTF-8 text containing newline-separated
//! records, each record tab-delimited as `reference<TAB>media-kind`.
//! Lines missing either field, and lines with an unrecognized media
//! kind, render nothing.

use serde::{Deserialize, Serialize};

/// Media classification of a streamed link, by MIME-type prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MediaKind {
    /// `image/*`
    Image,
    /// `video/*`
    Video,
    /// `audio/*`
    Audio,
}

impl MediaKind {
    /// Classify a MIME-type string by prefix.
    ///
    /// Anything outside the three renderable families maps to `None`.
    pub fn classify(mime: &str) -> Option<MediaKind> {
        if mime.starts_with("image/") {
            Some(MediaKind::Image)
        } else if mime.starts_with("video/") {
            Some(MediaKind::Video)
        } else if mime.starts_with("audio/") {
            Some(MediaKind::Audio)
        } else {
            None
        }
    }

    /// Tag name of the HTML element this kind renders as.
    pub fn tag_name(self) -> &'static str {
        match self {
            MediaKind::Image => "img",
            MediaKind::Video => "video",
            MediaKind::Audio => "audio",
        }
    }
}

/// One streamed media link: a reference and its classified kind.
///
/// Ephemeral - parsed from one line of streamed text and consumed by the
/// rendering step, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkRecord {
    /// URL of the media resource.
    pub href: String,
    /// Classified media kind.
    pub kind: MediaKind,
}

impl LinkRecord {
    /// Parse a single record line.
    ///
    /// Splits on the first tab into reference and media kind; any fields
    /// after a second tab are ignored. Returns `None` for lines without
    /// a tab, lines with an empty field, and unrecognized media kinds.
    pub fn parse(line: &str) -> Option<LinkRecord> {
        let (href, rest) = line.split_once('\t')?;
        let mime = rest.split('\t').next().unwrap_or("");
        if href.is_empty() || mime.is_empty() {
            return None;
        }
        let kind = MediaKind::classify(mime)?;
        Some(LinkRecord {
            href: href.to_string(),
            kind,
        })
    }
}

/// Parse a full stream message into records, preserving line order.
///
/// Unrenderable lines are dropped from the result; non-empty drops get a
/// debug diagnostic so a misbehaving stream stays observable.
pub fn parse_message(text: &str) -> Vec<LinkRecord> {
    let mut records = Vec::new();
    for line in text.split('\n') {
        if line.is_empty() {
            continue;
        }
        match LinkRecord::parse(line) {
            Some(record) => records.push(record),
            None => crate::log_debug!("skipping unrenderable record line: {:?}", line),
        }
    }
    records
}

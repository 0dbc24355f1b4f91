//! Global constants used throughout the gallery client.
//!
//! Compile-time constants shared between the stream client and the
//! layout controller, kept in one place to avoid magic strings in the
//! DOM wiring.

/// Delay between reconnection attempts, in milliseconds.
///
/// The stream client retries forever at this fixed interval; there is
/// no exponential backoff and no retry cap. The stream is expected to
/// outlive transient server restarts without user involvement.
pub const RECONNECT_DELAY_MS: u32 = 5_000;

/// Fixed display width for video and audio elements, in CSS pixels.
pub const MEDIA_ELEMENT_WIDTH: u32 = 320;

/// URL path prefix of the link-stream endpoint.
///
/// The full endpoint is `{ws|wss}://{host}/ws/{collection}`.
pub const STREAM_PATH_PREFIX: &str = "/ws/";

/// DOM id of the gallery container that accumulates rendered entries.
pub const GALLERY_CONTAINER_ID: &str = "gallery";

/// CSS selector of the grid root the layout engine packs.
pub const GRID_SELECTOR: &str = ".grid";

/// CSS selector of the sizer element defining the grid column width.
pub const GRID_SIZER_SELECTOR: &str = ".grid-sizer";

/// Class applied to each entry container.
///
/// Doubles as the layout engine's item selector, so every appended
/// entry participates in packing.
pub const GRID_ITEM_CLASS: &str = "grid-item";

/// Class applied to every rendered media element.
pub const GALLERY_ITEM_CLASS: &str = "gallery-item";

/// Additional class applied to video elements.
pub const GALLERY_VIDEO_CLASS: &str = "gallery-video";

//! # Gallery Browser WASM
//!
//! WebAssembly bindings for the streaming media gallery page: a
//! WebSocket link-stream client that renders incoming media links into
//! the gallery container, and a layout controller that keeps the grid
//! packed as images load. The two components share nothing but the DOM.

use gallery_core::log_info;
use wasm_bindgen::prelude::*;

// Module declarations
mod gallery;
mod layout;
mod stream;
mod utils;

// Re-export component structs for WASM bindings
pub use gallery::GalleryRenderer;
pub use layout::GalleryLayoutController;
pub use stream::LinkStreamClient;

/// Get version information
#[wasm_bindgen]
pub fn version() -> String {
    format!("{} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}

/// Initialize WASM environment
#[wasm_bindgen(start)]
pub fn init() {
    // Better panic messages in the console during development
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    log_info!("🖼️ Gallery WASM initialised...");
}

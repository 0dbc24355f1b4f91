//! Cross-platform logging macros.
//!
//! On WASM targets these log through the browser's console API; on native
//! targets they forward to the `tracing` crate. The expansions reference
//! `web_sys` / `tracing` by path, so calling crates carry the matching
//! dependency for their target.

/// Info level logging - general information messages
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        web_sys::console::log_1(&format!($($arg)*).into());

        #[cfg(not(target_arch = "wasm32"))]
        tracing::info!($($arg)*);
    }};
}

/// Warning level logging - potentially problematic situations
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        web_sys::console::warn_1(&format!($($arg)*).into());

        #[cfg(not(target_arch = "wasm32"))]
        tracing::warn!($($arg)*);
    }};
}

/// Error level logging - error conditions
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        web_sys::console::error_1(&format!($($arg)*).into());

        #[cfg(not(target_arch = "wasm32"))]
        tracing::error!($($arg)*);
    }};
}

/// Debug level logging - detailed information for debugging
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        web_sys::console::debug_1(&format!($($arg)*).into());

        #[cfg(not(target_arch = "wasm32"))]
        tracing::debug!($($arg)*);
    }};
}

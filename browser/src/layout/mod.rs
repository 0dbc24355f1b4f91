//! Grid layout control over the third-party packing engine

mod bindings;
mod controller;

pub use controller::GalleryLayoutController;

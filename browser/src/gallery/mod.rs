//! Gallery DOM rendering

mod renderer;

pub use renderer::GalleryRenderer;

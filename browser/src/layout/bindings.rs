//! Bindings to the page-global layout collaborators.
//!
//! The packing algorithm and the image-load observer stay external;
//! these bindings cover exactly the construct-with-options, `layout()`
//! and `on("progress", ...)` surface the page uses.

use wasm_bindgen::prelude::*;
use web_sys::Element;

#[wasm_bindgen]
extern "C" {
    /// Grid layout engine (page-global `Isotope` constructor).
    pub type Isotope;

    /// Construct the engine over a grid root with an options object.
    #[wasm_bindgen(constructor)]
    pub fn new(root: &Element, options: &JsValue) -> Isotope;

    /// Recompute item positions.
    #[wasm_bindgen(method)]
    pub fn layout(this: &Isotope);

    /// Image-load observer handle returned by the page-global
    /// `imagesLoaded` function.
    pub type ImagesLoaded;

    /// Observe image loading under a root element.
    #[wasm_bindgen(js_name = imagesLoaded)]
    pub fn images_loaded(root: &Element) -> ImagesLoaded;

    /// Subscribe to an observer event. `"progress"` fires once per
    /// contained image as it settles, loaded or failed.
    #[wasm_bindgen(method)]
    pub fn on(this: &ImagesLoaded, event: &str, callback: &js_sys::Function) -> ImagesLoaded;
}

//! Layout controller keeping the gallery grid packed.

use std::rc::Rc;

use gallery_core::constants::{GRID_ITEM_CLASS, GRID_SELECTOR, GRID_SIZER_SELECTOR};
use gallery_core::{log_info, GalleryError};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use super::bindings::{images_loaded, Isotope};

/// Wraps the packing engine around the grid root and recomputes the
/// layout as images progressively finish loading.
///
/// Positions only existing nodes; entry creation belongs to the stream
/// client, which this controller never calls.
#[wasm_bindgen]
pub struct GalleryLayoutController {
    engine: Rc<Isotope>,
    /// Kept alive as long as the controller; the observer holds only a
    /// JS function reference into it.
    _on_progress: Closure<dyn FnMut()>,
}

#[wasm_bindgen]
impl GalleryLayoutController {
    /// Attach the layout engine to the grid root and subscribe to image
    /// load progress.
    pub fn init() -> Result<GalleryLayoutController, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window available"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document available"))?;
        let root = document.query_selector(GRID_SELECTOR)?.ok_or_else(|| {
            JsValue::from_str(&GalleryError::ElementNotFound(GRID_SELECTOR.to_string()).to_string())
        })?;

        let options = layout_options()?;
        let engine = Rc::new(Isotope::new(&root, &options));

        // Repack after every individual image settles, so entries the
        // stream appends later slot in as their images arrive
        let on_progress = {
            let engine = engine.clone();
            Closure::wrap(Box::new(move || {
                engine.layout();
            }) as Box<dyn FnMut()>)
        };
        images_loaded(&root).on("progress", on_progress.as_ref().unchecked_ref());

        log_info!("🧱 Gallery layout engine attached to '{}'", GRID_SELECTOR);

        Ok(GalleryLayoutController {
            engine,
            _on_progress: on_progress,
        })
    }

    /// Force a relayout.
    pub fn relayout(&self) {
        self.engine.layout();
    }
}

/// Build the engine options object:
/// `{ itemSelector, percentPosition, masonry: { layoutMode, columnWidth } }`.
fn layout_options() -> Result<JsValue, JsValue> {
    let masonry = js_sys::Object::new();
    js_sys::Reflect::set(&masonry, &"layoutMode".into(), &"packery".into())?;
    js_sys::Reflect::set(&masonry, &"columnWidth".into(), &GRID_SIZER_SELECTOR.into())?;

    let options = js_sys::Object::new();
    js_sys::Reflect::set(
        &options,
        &"itemSelector".into(),
        &format!(".{}", GRID_ITEM_CLASS).into(),
    )?;
    js_sys::Reflect::set(&options, &"percentPosition".into(), &JsValue::TRUE)?;
    js_sys::Reflect::set(&options, &"masonry".into(), &masonry)?;

    Ok(options.into())
}

//! DOM construction for streamed media entries.
//!
//! Every well-formed record becomes one gallery entry: a typed media
//! element, wrapped in an anchor opening the reference in a new tab,
//! wrapped in a grid-item container appended to the gallery. Entries are
//! append-only; nothing rendered is ever removed or reordered.

use gallery_core::constants::{
    GALLERY_CONTAINER_ID, GALLERY_ITEM_CLASS, GALLERY_VIDEO_CLASS, GRID_ITEM_CLASS,
    MEDIA_ELEMENT_WIDTH,
};
use gallery_core::{parse_message, GalleryError, LinkRecord, MediaKind};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, HtmlAnchorElement, HtmlAudioElement, HtmlImageElement, HtmlVideoElement,
};

/// Renders link records into the gallery container.
pub struct GalleryRenderer {
    document: Document,
    container: Element,
}

impl GalleryRenderer {
    /// Locate the gallery container in the document.
    pub fn locate(document: &Document) -> Result<GalleryRenderer, GalleryError> {
        let container = document
            .get_element_by_id(GALLERY_CONTAINER_ID)
            .ok_or_else(|| GalleryError::ElementNotFound(format!("#{}", GALLERY_CONTAINER_ID)))?;
        Ok(GalleryRenderer {
            document: document.clone(),
            container,
        })
    }

    /// Render every well-formed record in a stream message, in order.
    ///
    /// Returns the number of entries appended.
    pub fn render_message(&self, text: &str) -> Result<u32, JsValue> {
        let mut appended = 0;
        for record in parse_message(text) {
            self.append_entry(&record)?;
            appended += 1;
        }
        Ok(appended)
    }

    /// Append one gallery entry for a record.
    pub fn append_entry(&self, record: &LinkRecord) -> Result<(), JsValue> {
        let media = self.create_media_element(record)?;

        let anchor: HtmlAnchorElement = self.document.create_element("a")?.dyn_into()?;
        anchor.set_href(&record.href);
        anchor.set_target("_blank");
        anchor.append_child(&media)?;

        let item = self.document.create_element("div")?;
        item.class_list().add_1(GRID_ITEM_CLASS)?;
        item.append_child(&anchor)?;

        self.container.append_child(&item)?;
        Ok(())
    }

    /// Build the typed media element for a record.
    fn create_media_element(&self, record: &LinkRecord) -> Result<Element, JsValue> {
        let element = self.document.create_element(record.kind.tag_name())?;
        element.class_list().add_1(GALLERY_ITEM_CLASS)?;

        // Casts are infallible: the tag name fixes the element interface
        match record.kind {
            MediaKind::Image => {
                let image: &HtmlImageElement = element.unchecked_ref();
                image.set_src(&record.href);
            }
            MediaKind::Video => {
                let video: &HtmlVideoElement = element.unchecked_ref();
                video.set_src(&record.href);
                video.set_width(MEDIA_ELEMENT_WIDTH);
                video.set_controls(true);
                element.class_list().add_1(GALLERY_VIDEO_CLASS)?;
            }
            MediaKind::Audio => {
                let audio: &HtmlAudioElement = element.unchecked_ref();
                audio.set_src(&record.href);
                audio.set_controls(true);
                // audio has no width IDL attribute; mirror the fixed
                // display width as a plain attribute
                element.set_attribute("width", &MEDIA_ELEMENT_WIDTH.to_string())?;
            }
        }
        Ok(element)
    }
}

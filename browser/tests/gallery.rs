//! Browser DOM tests for the gallery renderer.
//!
//! Run with `wasm-pack test --headless --chrome browser`.

#![cfg(target_arch = "wasm32")]

use gallery_browser::GalleryRenderer;
use wasm_bindgen_test::*;
use web_sys::{Document, Element};

wasm_bindgen_test_configure!(run_in_browser);

/// Install an empty `#gallery` container, replacing any leftover from a
/// previous test.
fn fresh_gallery() -> (Document, Element) {
    let document = web_sys::window().unwrap().document().unwrap();
    if let Some(old) = document.get_element_by_id("gallery") {
        old.remove();
    }
    let container = document.create_element("div").unwrap();
    container.set_id("gallery");
    document.body().unwrap().append_child(&container).unwrap();
    (document, container)
}

#[wasm_bindgen_test]
fn test_image_record_renders_wrapped_entry() {
    let (document, container) = fresh_gallery();
    let renderer = GalleryRenderer::locate(&document).unwrap();

    let appended = renderer
        .render_message("http://x/a.png\timage/png")
        .unwrap();
    assert_eq!(appended, 1);
    assert_eq!(container.child_element_count(), 1);

    // div.grid-item > a[target=_blank] > img.gallery-item
    let item = container.first_element_child().unwrap();
    assert_eq!(item.tag_name(), "DIV");
    assert!(item.class_list().contains("grid-item"));

    let anchor = item.first_element_child().unwrap();
    assert_eq!(anchor.tag_name(), "A");
    assert_eq!(anchor.get_attribute("href").unwrap(), "http://x/a.png");
    assert_eq!(anchor.get_attribute("target").unwrap(), "_blank");

    let media = anchor.first_element_child().unwrap();
    assert_eq!(media.tag_name(), "IMG");
    assert!(media.class_list().contains("gallery-item"));
    assert!(!media.class_list().contains("gallery-video"));
    assert_eq!(media.get_attribute("src").unwrap(), "http://x/a.png");
}

#[wasm_bindgen_test]
fn test_video_entry_attributes() {
    let (document, container) = fresh_gallery();
    let renderer = GalleryRenderer::locate(&document).unwrap();

    renderer
        .render_message("http://x/clip.mp4\tvideo/mp4")
        .unwrap();

    let media = container
        .query_selector("video")
        .unwrap()
        .expect("video element rendered");
    assert!(media.class_list().contains("gallery-item"));
    assert!(media.class_list().contains("gallery-video"));
    assert_eq!(media.get_attribute("width").unwrap(), "320");
    assert!(media.has_attribute("controls"));
    assert_eq!(media.get_attribute("src").unwrap(), "http://x/clip.mp4");
}

#[wasm_bindgen_test]
fn test_audio_entry_attributes() {
    let (document, container) = fresh_gallery();
    let renderer = GalleryRenderer::locate(&document).unwrap();

    renderer
        .render_message("http://x/song.ogg\taudio/ogg")
        .unwrap();

    let media = container
        .query_selector("audio")
        .unwrap()
        .expect("audio element rendered");
    assert!(media.class_list().contains("gallery-item"));
    assert!(!media.class_list().contains("gallery-video"));
    assert_eq!(media.get_attribute("width").unwrap(), "320");
    assert!(media.has_attribute("controls"));
}

#[wasm_bindgen_test]
fn test_unrenderable_lines_append_nothing() {
    let (document, container) = fresh_gallery();
    let renderer = GalleryRenderer::locate(&document).unwrap();

    // Unknown kind, missing tab, empty reference
    let appended = renderer
        .render_message("http://x/doc.pdf\tapplication/pdf\nno-tab-here\n\timage/png\n")
        .unwrap();
    assert_eq!(appended, 0);
    assert_eq!(container.child_element_count(), 0);
}

#[wasm_bindgen_test]
fn test_message_order_preserved() {
    let (document, container) = fresh_gallery();
    let renderer = GalleryRenderer::locate(&document).unwrap();

    // Two renderable records around a malformed line
    let appended = renderer
        .render_message("http://x/a.png\timage/png\nhttp://x/b.mp4\tvideo/mp4\n\thttp://x/bad\n")
        .unwrap();
    assert_eq!(appended, 2);
    assert_eq!(container.child_element_count(), 2);

    let first = container.first_element_child().unwrap();
    let second = first.next_element_sibling().unwrap();
    assert!(first.query_selector("img").unwrap().is_some());
    assert!(second.query_selector("video").unwrap().is_some());
}

#[wasm_bindgen_test]
fn test_entries_accumulate_across_messages() {
    let (document, container) = fresh_gallery();
    let renderer = GalleryRenderer::locate(&document).unwrap();

    renderer.render_message("http://x/1.jpg\timage/jpeg").unwrap();
    renderer.render_message("http://x/2.jpg\timage/jpeg").unwrap();

    // Later messages append after earlier ones; nothing is cleared
    assert_eq!(container.child_element_count(), 2);
    let first = container.first_element_child().unwrap();
    assert_eq!(
        first.query_selector("img").unwrap().unwrap().get_attribute("src").unwrap(),
        "http://x/1.jpg"
    );
}

#[wasm_bindgen_test]
fn test_locate_fails_without_container() {
    let document = web_sys::window().unwrap().document().unwrap();
    if let Some(old) = document.get_element_by_id("gallery") {
        old.remove();
    }
    assert!(GalleryRenderer::locate(&document).is_err());
}

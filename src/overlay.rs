use crate::constants::{FALLBACK_CLASS, TAGLINE_ELEMENT_ID};
use web_sys as web;

/// Replace the hero tagline text; a page without the element is fine.
#[inline]
pub fn set_tagline(document: &web::Document, text: &str) {
    if let Some(el) = document.get_element_by_id(TAGLINE_ELEMENT_ID) {
        el.set_text_content(Some(text));
    }
}

#[inline]
pub fn mark_fallback(canvas: &web::HtmlCanvasElement) {
    _ = canvas.class_list().add_1(FALLBACK_CLASS);
}

#[inline]
pub fn clear_fallback(canvas: &web::HtmlCanvasElement) {
    _ = canvas.class_list().remove_1(FALLBACK_CLASS);
}

use crate::constants::GLOW_ID;
use crate::model::PointerGlow;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Re-centre the glow overlay on the latest pointer position.
#[inline]
pub fn update_glow(document: &web::Document, glow: &PointerGlow) {
    if let Some(el) = document.get_element_by_id(GLOW_ID) {
        if let Some(html) = el.dyn_ref::<web::HtmlElement>() {
            _ = html.style().set_property("background", &glow.background());
        }
    }
}

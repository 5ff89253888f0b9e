use crate::constants::TICKER_ID;
use crate::model::{CodeTicker, SkillHover};
use rand::Rng;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
fn skill_card(document: &web::Document, index: usize) -> Option<web::Element> {
    let selector = format!("[data-skill-index=\"{}\"]", index);
    document.query_selector(&selector).ok().flatten()
}

/// Bring card `index` in line with the hover state: bar width, glow ring
/// around the icon and icon tint.
pub fn sync_skill_card(document: &web::Document, hover: &SkillHover, index: usize) {
    let Some(card) = skill_card(document, index) else {
        return;
    };
    let active = hover.is_active(index);

    if let Ok(Some(bar)) = card.query_selector(".skill-bar") {
        if let Some(bar) = bar.dyn_ref::<web::HtmlElement>() {
            _ = bar.style().set_property("width", &hover.bar_width(index));
        }
    }
    if let Ok(Some(wrap)) = card.query_selector(".skill-icon") {
        _ = wrap.class_list().toggle_with_force("animate-glow", active);
    }
    if let Ok(Some(icon)) = card.query_selector(".icon") {
        let cl = icon.class_list();
        _ = cl.toggle_with_force("text-primary", active);
        _ = cl.toggle_with_force("text-muted-foreground", !active);
    }
}

/// Replace the ticker's children with the current queue.
pub fn render_ticker<R: Rng>(document: &web::Document, ticker: &CodeTicker<R>) {
    let Some(container) = document.get_element_by_id(TICKER_ID) else {
        return;
    };
    container.set_inner_html("");
    for line in ticker.lines() {
        let Ok(el) = document.create_element("div") else {
            continue;
        };
        el.set_class_name("code-line transition-opacity duration-500");
        el.set_text_content(Some(line.text));
        if let Some(html) = el.dyn_ref::<web::HtmlElement>() {
            _ = html.style().set_property("opacity", &line.opacity.to_string());
        }
        _ = container.append_child(&el);
    }
}

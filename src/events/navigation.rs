use crate::constants::{CONTACT_ID, CTA_CONTACT_ID, CTA_PROJECTS_ID, PROJECTS_ID};
use crate::dom::{self, DomError, Listener};
use web_sys as web;

/// Hero call-to-action buttons scroll to their sections.
pub fn wire_hero_buttons(document: &web::Document) -> Result<Vec<Listener>, DomError> {
    let mut listeners = Vec::with_capacity(2);
    for (button, target) in [(CTA_PROJECTS_ID, PROJECTS_ID), (CTA_CONTACT_ID, CONTACT_ID)] {
        let doc = document.clone();
        listeners.push(dom::on_click(document, button, move || {
            dom::scroll_into_view(&doc, target);
        })?);
    }
    Ok(listeners)
}

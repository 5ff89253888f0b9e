use crate::dom::{DomError, Listener};
use crate::model::SkillHover;
use crate::ui;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Attach enter/leave listeners to every skill card.
pub fn wire_skill_hover(
    document: &web::Document,
    hover: Rc<RefCell<SkillHover>>,
) -> Result<Vec<Listener>, DomError> {
    let cards = document.query_selector_all("[data-skill-index]")?;
    let mut listeners = Vec::with_capacity(cards.length() as usize * 2);

    for n in 0..cards.length() {
        let Some(node) = cards.item(n) else {
            continue;
        };
        let Some(index) = skill_index(&node) else {
            continue;
        };

        let doc_enter = document.clone();
        let hover_enter = hover.clone();
        listeners.push(Listener::new(&node, "mouseenter", move |_| {
            let prev = hover_enter.borrow_mut().enter(index);
            let h = hover_enter.borrow();
            if let Some(p) = prev.filter(|&p| p != index) {
                ui::sync_skill_card(&doc_enter, &h, p);
            }
            ui::sync_skill_card(&doc_enter, &h, index);
            log::debug!("[hover] active skill {:?}", h.active());
        })?);

        let doc_leave = document.clone();
        let hover_leave = hover.clone();
        listeners.push(Listener::new(&node, "mouseleave", move |_| {
            let prev = hover_leave.borrow_mut().leave();
            if let Some(p) = prev {
                ui::sync_skill_card(&doc_leave, &hover_leave.borrow(), p);
            }
        })?);
    }
    Ok(listeners)
}

fn skill_index(node: &web::Node) -> Option<usize> {
    node.dyn_ref::<web::Element>()?
        .get_attribute("data-skill-index")?
        .parse()
        .ok()
}

use crate::dom::{self, DomError, Listener};
use crate::model::PointerGlow;
use crate::overlay;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Track the pointer on `window` and keep the glow overlay centred on it.
/// The returned listener owns the subscription.
pub fn wire_pointer_glow(glow: Rc<RefCell<PointerGlow>>) -> Result<Listener, DomError> {
    let window = dom::window()?;
    let document = dom::window_document()?;

    Listener::new(&window, "pointermove", move |ev: web::Event| {
        let Some(ev) = ev.dyn_ref::<web::MouseEvent>() else {
            return;
        };
        let snapshot = {
            let mut g = glow.borrow_mut();
            g.on_move(ev.client_x() as f32, ev.client_y() as f32);
            *g
        };
        overlay::update_glow(&document, &snapshot);
    })
}

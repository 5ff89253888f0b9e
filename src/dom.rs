use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

#[derive(Debug, thiserror::Error)]
pub enum DomError {
    #[error("no window")]
    NoWindow,
    #[error("no document")]
    NoDocument,
    #[error("missing #{0}")]
    MissingElement(String),
    #[error("js error: {0}")]
    Js(String),
}

impl From<JsValue> for DomError {
    fn from(v: JsValue) -> Self {
        DomError::Js(format!("{:?}", v))
    }
}

#[inline]
pub fn window() -> Result<web::Window, DomError> {
    web::window().ok_or(DomError::NoWindow)
}

#[inline]
pub fn window_document() -> Result<web::Document, DomError> {
    window()?.document().ok_or(DomError::NoDocument)
}

#[inline]
pub fn element_by_id(document: &web::Document, id: &str) -> Result<web::Element, DomError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| DomError::MissingElement(id.to_string()))
}

/// An event listener that stays registered for as long as this value lives.
pub struct Listener {
    target: web::EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl Listener {
    pub fn new(
        target: &web::EventTarget,
        event: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> Result<Self, DomError> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            event,
            closure,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}

/// Click listener on the element with `element_id`.
pub fn on_click(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) -> Result<Listener, DomError> {
    let el = element_by_id(document, element_id)?;
    Listener::new(&el, "click", move |_| handler())
}

/// A `setInterval` timer, cleared on drop.
pub struct Interval {
    handle: i32,
    _closure: Closure<dyn FnMut()>,
}

impl Interval {
    pub fn new(period_ms: i32, handler: impl FnMut() + 'static) -> Result<Self, DomError> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut()>);
        let handle = window()?.set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            period_ms,
        )?;
        Ok(Self {
            handle,
            _closure: closure,
        })
    }
}

impl Drop for Interval {
    fn drop(&mut self) {
        if let Some(w) = web::window() {
            w.clear_interval_with_handle(self.handle);
        }
    }
}

pub fn scroll_into_view(document: &web::Document, element_id: &str) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let opts = web::ScrollIntoViewOptions::new();
        opts.set_behavior(web::ScrollBehavior::Smooth);
        el.scroll_into_view_with_scroll_into_view_options(&opts);
    }
}

use crate::dom::{DomError, Interval};
use crate::model::CodeTicker;
use crate::ui;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Drive the code ticker from a fixed-period timer. Dropping the returned
/// interval stops it.
pub fn start_ticker(
    document: &web::Document,
    ticker: Rc<RefCell<CodeTicker>>,
) -> Result<Interval, DomError> {
    let period = ticker.borrow().params.interval_ms;
    let document = document.clone();
    Interval::new(period, move || {
        let mut t = ticker.borrow_mut();
        if t.tick().is_none() {
            return;
        }
        ui::render_ticker(&document, &*t);
    })
}

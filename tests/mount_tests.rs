// Browser tests for listener/timer ownership and the mount lifecycle.
// Run with `wasm-pack test --headless --chrome`.

#![cfg(target_arch = "wasm32")]
use portfolio_web::constants::{GLOW_ID, TICKER_ID, TICK_INTERVAL_MS};
use portfolio_web::dom::{window_document, Interval, Listener};
use portfolio_web::{mount, unmount};
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;
use web_sys as web;

wasm_bindgen_test_configure!(run_in_browser);

const ROOT: &str = "mount-test-root";

async fn sleep(ms: i32) {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        if let Some(w) = web::window() {
            _ = w.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms);
        }
    });
    _ = JsFuture::from(promise).await;
}

fn pointer_move(x: i32, y: i32) {
    let init = web::MouseEventInit::new();
    init.set_client_x(x);
    init.set_client_y(y);
    let ev = web::MouseEvent::new_with_mouse_event_init_dict("pointermove", &init).unwrap();
    web::window().unwrap().dispatch_event(&ev).unwrap();
}

fn style_of(document: &web::Document, id: &str) -> String {
    document
        .get_element_by_id(id)
        .and_then(|el| el.get_attribute("style"))
        .unwrap_or_default()
}

fn append_div(document: &web::Document, id: &str) -> web::Element {
    let el = document.create_element("div").unwrap();
    el.set_id(id);
    document.body().unwrap().append_child(&el).unwrap();
    el
}

#[wasm_bindgen_test]
fn listener_detaches_on_drop() {
    let document = window_document().unwrap();
    let el = document.create_element("div").unwrap();
    let hits = Rc::new(Cell::new(0u32));
    let h = hits.clone();
    let listener = Listener::new(&el, "click", move |_| h.set(h.get() + 1)).unwrap();

    let click = || {
        el.dispatch_event(&web::Event::new("click").unwrap())
            .unwrap();
    };
    click();
    click();
    assert_eq!(hits.get(), 2);

    drop(listener);
    click();
    assert_eq!(hits.get(), 2);
}

#[wasm_bindgen_test]
async fn interval_stops_on_drop() {
    let ticks = Rc::new(Cell::new(0u32));
    let t = ticks.clone();
    let interval = Interval::new(10, move || t.set(t.get() + 1)).unwrap();

    sleep(100).await;
    assert!(ticks.get() > 0);

    drop(interval);
    let stopped_at = ticks.get();
    sleep(100).await;
    assert_eq!(ticks.get(), stopped_at);
}

#[wasm_bindgen_test]
async fn mount_wires_page_and_unmount_releases_it() {
    let document = window_document().unwrap();
    let root = append_div(&document, ROOT);

    mount(ROOT).unwrap();
    pointer_move(50, 60);
    assert!(style_of(&document, GLOW_ID).contains("at 50px 60px"));

    sleep(TICK_INTERVAL_MS + 300).await;
    let ticker = document.get_element_by_id(TICKER_ID).unwrap();
    assert!(ticker.child_element_count() >= 1);

    // Second mount replaces the first page instead of stacking a copy.
    mount(ROOT).unwrap();
    let glows = document.query_selector_all(&format!("#{}", GLOW_ID)).unwrap();
    assert_eq!(glows.length(), 1);
    pointer_move(5, 6);
    assert!(style_of(&document, GLOW_ID).contains("at 5px 6px"));

    unmount();
    assert_eq!(root.child_element_count(), 0);

    // Stand-ins with the same ids: any listener or timer left behind by
    // either mount would write into them.
    let glow_stub = append_div(&document, GLOW_ID);
    let ticker_stub = append_div(&document, TICKER_ID);
    pointer_move(7, 9);
    assert!(glow_stub.get_attribute("style").is_none());
    sleep(2 * TICK_INTERVAL_MS + 300).await;
    assert_eq!(ticker_stub.child_element_count(), 0);

    glow_stub.remove();
    ticker_stub.remove();
    root.remove();
}

#[wasm_bindgen_test]
fn mount_without_root_fails() {
    assert!(mount("no-such-root").is_err());
}

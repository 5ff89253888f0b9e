#![cfg(target_arch = "wasm32")]
use crate::constants::{HERO_IMAGE_ID, ROOT_ID};
use crate::dom::{Interval, Listener};
use crate::lifecycle::PageSlot;
use crate::model::{CodeTicker, PointerGlow, SkillHover, TickerParams, CODE_SNIPPETS, SKILLS};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

pub mod constants;
pub mod dom;
mod events;
pub mod lifecycle;
pub mod model;
mod overlay;
mod ui;
pub mod view;

/// Everything a mounted page owns. Dropping it removes every listener and
/// stops the ticker timer.
struct MountedPage {
    root: web::Element,
    _listeners: Vec<Listener>,
    _ticker_timer: Interval,
    mounted_at: Instant,
}

impl Drop for MountedPage {
    fn drop(&mut self) {
        self.root.set_inner_html("");
        log::info!(
            "page unmounted after {:.1}s",
            self.mounted_at.elapsed().as_secs_f32()
        );
    }
}

thread_local! {
    static PAGE: RefCell<PageSlot<MountedPage>> = const { RefCell::new(PageSlot::new()) };
}

fn build_page(root_id: &str) -> anyhow::Result<MountedPage> {
    let document = dom::window_document()?;
    let root = dom::element_by_id(&document, root_id)?;

    let glow = Rc::new(RefCell::new(PointerGlow::default()));
    let hover = Rc::new(RefCell::new(SkillHover::new(SKILLS)));
    let ticker = Rc::new(RefCell::new(CodeTicker::from_entropy(
        TickerParams::default(),
        CODE_SNIPPETS,
    )));

    root.set_inner_html(&view::page(&glow.borrow(), &hover.borrow()));

    let mut listeners = vec![events::wire_pointer_glow(glow)?];
    listeners.extend(events::wire_skill_hover(&document, hover)?);
    listeners.extend(events::wire_hero_buttons(&document)?);
    let ticker_timer = events::start_ticker(&document, ticker)?;

    preload_hero_image(&document);

    log::info!(
        "page mounted into #{} ({} listeners)",
        root_id,
        listeners.len()
    );
    Ok(MountedPage {
        root,
        _listeners: listeners,
        _ticker_timer: ticker_timer,
        mounted_at: Instant::now(),
    })
}

// Decode the portrait off the critical path; a failed load only gets logged.
fn preload_hero_image(document: &web::Document) {
    let Some(img) = document
        .get_element_by_id(HERO_IMAGE_ID)
        .and_then(|el| el.dyn_into::<web::HtmlImageElement>().ok())
    else {
        return;
    };
    spawn_local(async move {
        match JsFuture::from(img.decode()).await {
            Ok(_) => log::info!(
                "hero image ready ({}x{})",
                img.natural_width(),
                img.natural_height()
            ),
            Err(e) => log::warn!("hero image failed to load: {:?}", e),
        }
    });
}

/// Mount the page into the element with `root_id`, replacing any page that
/// is already mounted.
#[wasm_bindgen]
pub fn mount(root_id: &str) -> Result<(), JsValue> {
    PAGE.with(|slot| slot.borrow_mut().mount_with(|| build_page(root_id)))
        .map_err(|e| {
            log::error!("mount error: {:?}", e);
            JsValue::from_str(&e.to_string())
        })
}

/// Tear down the mounted page, releasing its listeners and timer.
#[wasm_bindgen]
pub fn unmount() {
    if !PAGE.with(|slot| slot.borrow_mut().unmount()) {
        log::debug!("unmount: no page mounted");
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("portfolio-web starting");

    if mount(ROOT_ID).is_err() {
        log::warn!("page not mounted; call mount() once #{} exists", ROOT_ID);
    }
    Ok(())
}

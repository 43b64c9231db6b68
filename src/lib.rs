#![cfg(target_arch = "wasm32")]
use crate::constants::BEAMS_CANVAS_ID;
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod background;
mod constants;
mod dom;
mod frame;
mod page;
mod quiz;
mod surface;

pub use background::BeamsBackground;

/// Views wired automatically from the page markup, released on `pagehide`.
struct Page {
    background: BeamsBackground,
    _quiz: Option<quiz::QuizView>,
}

thread_local! {
    static PAGE: RefCell<Option<Page>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("savoir-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    // each view is wired on its own; one failing must not take the other down
    let mut background = BeamsBackground::new();
    if document.get_element_by_id(BEAMS_CANVAS_ID).is_some() {
        if let Err(e) = background.mount(BEAMS_CANVAS_ID) {
            log::error!("[beams] mount failed: {:?}", e);
        }
    }
    let quiz = quiz::mount(&document).unwrap_or_else(|e| {
        log::error!("[quiz] mount failed: {:?}", e);
        None
    });

    if !background.is_mounted() && quiz.is_none() {
        log::info!("nothing to wire on this page");
        return Ok(());
    }

    PAGE.with(|p| {
        *p.borrow_mut() = Some(Page {
            background,
            _quiz: quiz,
        })
    });

    // page-lifetime listener; it only tears down the views above
    let on_hide = Closure::wrap(Box::new(move |event: web::Event| {
        let persisted = event
            .dyn_ref::<web::PageTransitionEvent>()
            .is_some_and(|e| e.persisted());
        if !page::release_on_pagehide(persisted) {
            log::debug!("pagehide: entering back/forward cache, views kept");
            return;
        }
        if let Some(mut views) = PAGE.with(|p| p.borrow_mut().take()) {
            views.background.unmount();
            log::info!("pagehide: views released");
        }
    }) as Box<dyn FnMut(web::Event)>);
    _ = window.add_event_listener_with_callback("pagehide", on_hide.as_ref().unchecked_ref());
    on_hide.forget();
    Ok(())
}

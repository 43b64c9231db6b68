use crate::constants::HIDDEN_CLASS;
use crate::page;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn element_by_id<T: JsCast>(document: &web::Document, id: &str) -> Option<T> {
    document.get_element_by_id(id)?.dyn_into::<T>().ok()
}

/// Event listener that deregisters itself when dropped.
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
    ) -> anyhow::Result<Self> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        target
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
            .map_err(|e| anyhow::anyhow!("add {} listener: {:?}", event, e))?;
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

/// One-shot timer; the callback is released by JS after it fires.
pub fn set_timeout(delay_ms: i32, handler: impl FnOnce() + 'static) {
    let Some(window) = web::window() else {
        return;
    };
    let cb = Closure::once_into_js(handler);
    let func: &js_sys::Function = cb.unchecked_ref();
    if let Err(e) = window.set_timeout_with_callback_and_timeout_and_arguments_0(func, delay_ms) {
        log::warn!("setTimeout failed: {:?}", e);
    }
}

/// Stretch the canvas over the window: CSS size = innerWidth x innerHeight,
/// backing store = that size times devicePixelRatio.
pub fn sync_canvas_to_viewport(canvas: &web::HtmlCanvasElement) {
    let Some(w) = web::window() else {
        return;
    };
    let css_w = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let css_h = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let (w_px, h_px) = page::backing_size(css_w, css_h, w.device_pixel_ratio());
    canvas.set_width(w_px);
    canvas.set_height(h_px);

    let style = canvas.style();
    _ = style.set_property("width", &format!("{}px", css_w));
    _ = style.set_property("height", &format!("{}px", css_h));
}

#[inline]
pub fn set_visible(el: &web::Element, visible: bool) {
    let cl = el.class_list();
    if visible {
        _ = cl.remove_1(HIDDEN_CLASS);
        // fallback for pages without the CSS class
        _ = el.remove_attribute("hidden");
    } else {
        _ = cl.add_1(HIDDEN_CLASS);
        _ = el.set_attribute("hidden", "");
    }
}

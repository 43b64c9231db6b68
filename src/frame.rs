use crate::constants::FPS_REPORT_INTERVAL_SEC;
use crate::surface::CanvasSurface;
use instant::Instant;
use savoir_core::BeamField;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    field: Rc<RefCell<BeamField>>,
    surface: CanvasSurface,
    last_report: Instant,
    frames: u32,
}

impl FrameContext {
    pub fn new(field: Rc<RefCell<BeamField>>, surface: CanvasSurface) -> Self {
        Self {
            field,
            surface,
            last_report: Instant::now(),
            frames: 0,
        }
    }

    pub fn frame(&mut self) {
        self.field.borrow_mut().tick(&mut self.surface);

        self.frames += 1;
        let elapsed = self.last_report.elapsed().as_secs_f32();
        if elapsed >= FPS_REPORT_INTERVAL_SEC {
            log::debug!(
                "[frame] fps={:.1} beams={}",
                self.frames as f32 / elapsed,
                self.field.borrow().len()
            );
            self.frames = 0;
            self.last_report = Instant::now();
        }
    }
}

type TickSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Running requestAnimationFrame loop. Stopping (or dropping) cancels the
/// pending frame and releases the callback.
pub struct FrameLoop {
    tick: TickSlot,
    pending: Rc<Cell<Option<i32>>>,
}

impl FrameLoop {
    pub fn stop(&mut self) {
        if let Some(id) = self.pending.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
        // breaks the closure -> slot cycle
        self.tick.borrow_mut().take();
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.stop();
    }
}

fn request_frame(tick: &TickSlot, pending: &Cell<Option<i32>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        match w.request_animation_frame(cb.as_ref().unchecked_ref()) {
            Ok(id) => pending.set(Some(id)),
            Err(e) => log::error!("[frame] requestAnimationFrame failed: {:?}", e),
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) -> FrameLoop {
    let tick: TickSlot = Rc::new(RefCell::new(None));
    let pending = Rc::new(Cell::new(None));

    let tick_clone = tick.clone();
    let pending_clone = pending.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        pending_clone.set(None);
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone, &pending_clone);
    }) as Box<dyn FnMut()>));

    request_frame(&tick, &pending);
    FrameLoop { tick, pending }
}

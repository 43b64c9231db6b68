use crate::constants::CONFIG_ATTR_PREFIX;
use crate::dom::{self, Listener};
use crate::frame::{self, FrameContext, FrameLoop};
use crate::surface::CanvasSurface;
use savoir_core::constants::LAYER_BLUR_PX;
use savoir_core::{BeamField, FieldConfig};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

struct Mounted {
    field: Rc<RefCell<BeamField>>,
    frames: FrameLoop,
    _resize: Listener,
}

/// Animated beam background bound to one canvas.
///
/// The host page mounts it when the view appears and unmounts it when the
/// view goes away; no callbacks outlive `unmount` (or drop).
#[wasm_bindgen]
#[derive(Default)]
pub struct BeamsBackground {
    mounted: Option<Mounted>,
}

#[wasm_bindgen]
impl BeamsBackground {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start animating the canvas with id `canvas_id`. A missing canvas or
    /// 2D context leaves the background idle.
    pub fn mount(&mut self, canvas_id: &str) -> Result<(), JsValue> {
        self.unmount();
        match mount_canvas(canvas_id) {
            Ok(m) => {
                self.mounted = m;
                Ok(())
            }
            Err(e) => {
                log::error!("[beams] mount error: {:?}", e);
                Err(JsValue::from_str(&e.to_string()))
            }
        }
    }

    pub fn unmount(&mut self) {
        if let Some(mut m) = self.mounted.take() {
            m.frames.stop();
            log::info!("[beams] unmounted");
        }
    }

    #[wasm_bindgen(getter, js_name = isMounted)]
    pub fn is_mounted(&self) -> bool {
        self.mounted.is_some()
    }

    #[wasm_bindgen(getter, js_name = beamCount)]
    pub fn beam_count(&self) -> usize {
        self.mounted
            .as_ref()
            .map(|m| m.field.borrow().len())
            .unwrap_or(0)
    }
}

fn read_config(canvas: &web::HtmlCanvasElement) -> FieldConfig {
    let lookup = |key: &str| canvas.get_attribute(&format!("{}{}", CONFIG_ATTR_PREFIX, key));
    match FieldConfig::from_lookup(lookup) {
        Ok(cfg) => cfg,
        Err(e) => {
            log::warn!("[config] {}; using defaults", e);
            FieldConfig::default()
        }
    }
}

fn mount_canvas(canvas_id: &str) -> anyhow::Result<Option<Mounted>> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let Some(canvas) = dom::element_by_id::<web::HtmlCanvasElement>(&document, canvas_id) else {
        log::warn!("[beams] no canvas #{}; background disabled", canvas_id);
        return Ok(None);
    };
    let ctx = match canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
    {
        Some(obj) => obj
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?,
        None => {
            log::warn!("[beams] 2D context unavailable; background disabled");
            return Ok(None);
        }
    };

    let config = read_config(&canvas);
    log::info!(
        "[beams] mount #{} intensity={:?} pool={} recycle={:?}",
        canvas_id,
        config.intensity,
        config.pool_size(),
        config.recycle
    );

    // second blur stage, on the composited layer
    _ = canvas
        .style()
        .set_property("filter", &format!("blur({}px)", LAYER_BLUR_PX));
    dom::sync_canvas_to_viewport(&canvas);

    let field = Rc::new(RefCell::new(BeamField::new(config)));
    field
        .borrow_mut()
        .initialize(canvas.width() as f32, canvas.height() as f32);

    let canvas_resize = canvas.clone();
    let field_resize = field.clone();
    let resize = Listener::new(&window, "resize", move |_| {
        dom::sync_canvas_to_viewport(&canvas_resize);
        field_resize.borrow_mut().initialize(
            canvas_resize.width() as f32,
            canvas_resize.height() as f32,
        );
    })?;

    let frame_ctx = Rc::new(RefCell::new(FrameContext::new(
        field.clone(),
        CanvasSurface::new(ctx),
    )));
    let frames = frame::start_loop(frame_ctx);

    Ok(Some(Mounted {
        field,
        frames,
        _resize: resize,
    }))
}

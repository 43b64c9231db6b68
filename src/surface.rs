use savoir_core::{DrawSurface, LinearGradient, Rect};
use web_sys as web;

/// `DrawSurface` backed by a canvas 2D context.
pub struct CanvasSurface {
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(ctx: web::CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }
}

impl DrawSurface for CanvasSurface {
    fn clear(&mut self, width: f32, height: f32) {
        self.ctx.clear_rect(0.0, 0.0, width as f64, height as f64);
    }

    fn set_blur(&mut self, radius_px: f32) {
        // filter is reset whenever the canvas is resized
        if radius_px > 0.0 {
            self.ctx.set_filter(&format!("blur({}px)", radius_px));
        } else {
            self.ctx.set_filter("none");
        }
    }

    fn save(&mut self) {
        self.ctx.save();
    }

    fn restore(&mut self) {
        self.ctx.restore();
    }

    fn translate(&mut self, x: f32, y: f32) {
        _ = self.ctx.translate(x as f64, y as f64);
    }

    fn rotate(&mut self, radians: f32) {
        _ = self.ctx.rotate(radians as f64);
    }

    fn fill_rect(&mut self, rect: Rect, gradient: &LinearGradient) {
        let g = self.ctx.create_linear_gradient(
            gradient.from.x as f64,
            gradient.from.y as f64,
            gradient.to.x as f64,
            gradient.to.y as f64,
        );
        for stop in &gradient.stops {
            if let Err(e) = g.add_color_stop(stop.offset, &stop.color.to_string()) {
                log::trace!("[beams] bad colour stop {}: {:?}", stop.color, e);
            }
        }
        #[allow(deprecated)]
        self.ctx.set_fill_style(&g);
        self.ctx.fill_rect(
            rect.origin.x as f64,
            rect.origin.y as f64,
            rect.size.x as f64,
            rect.size.y as f64,
        );
    }
}

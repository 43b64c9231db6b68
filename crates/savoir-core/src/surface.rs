//! Immediate-mode 2D drawing seam.
//!
//! The beam field only talks to this trait; the web front-end implements it
//! on top of `CanvasRenderingContext2d`, tests implement it with a recorder.

use crate::color::LinearGradient;
use glam::Vec2;

/// Axis-aligned rectangle in the current drawing space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }
}

pub trait DrawSurface {
    /// Clear `width` x `height` pixels from the origin.
    fn clear(&mut self, width: f32, height: f32);
    /// Gaussian blur applied to subsequent fills; 0 disables it.
    fn set_blur(&mut self, radius_px: f32);
    /// Push the current transform.
    fn save(&mut self);
    /// Pop back to the last saved transform.
    fn restore(&mut self);
    fn translate(&mut self, x: f32, y: f32);
    fn rotate(&mut self, radians: f32);
    fn fill_rect(&mut self, rect: Rect, gradient: &LinearGradient);
}

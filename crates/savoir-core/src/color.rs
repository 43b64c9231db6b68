use glam::Vec2;
use std::fmt;

/// Colour in CSS `hsla()` terms: hue in degrees, saturation and lightness in
/// percent, alpha in \[0, 1\].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsla {
    pub h: f32,
    pub s: f32,
    pub l: f32,
    pub a: f32,
}

impl Hsla {
    pub const fn new(h: f32, s: f32, l: f32, a: f32) -> Self {
        Self { h, s, l, a }
    }
}

impl fmt::Display for Hsla {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsla({}, {}%, {}%, {})",
            self.h,
            self.s,
            self.l,
            self.a.clamp(0.0, 1.0)
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorStop {
    pub offset: f32,
    pub color: Hsla,
}

/// Linear gradient between two points in the current (transformed) drawing
/// space, with stops ordered by offset.
#[derive(Clone, Debug, PartialEq)]
pub struct LinearGradient {
    pub from: Vec2,
    pub to: Vec2,
    pub stops: Vec<ColorStop>,
}

impl LinearGradient {
    pub fn new(from: Vec2, to: Vec2) -> Self {
        Self {
            from,
            to,
            stops: Vec::new(),
        }
    }

    pub fn add_stop(&mut self, offset: f32, color: Hsla) {
        self.stops.push(ColorStop {
            offset: offset.clamp(0.0, 1.0),
            color,
        });
    }
}

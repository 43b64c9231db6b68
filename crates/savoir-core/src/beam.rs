use crate::color::{Hsla, LinearGradient};
use crate::constants::*;
use glam::Vec2;
use rand::Rng;
use std::f32::consts::TAU;

/// One translucent bar in the background field.
#[derive(Clone, Debug, PartialEq)]
pub struct Beam {
    /// Anchor before rotation; the bar is centred horizontally on it.
    pub position: Vec2,
    pub width: f32,
    pub length: f32,
    pub angle_deg: f32,
    pub speed: f32,
    /// Base alpha; the pulse never writes back into it.
    pub opacity: f32,
    pub hue: f32,
    pub pulse_phase: f32,
    pub pulse_speed: f32,
}

/// `lo + u * (hi - lo)` with `u` in \[0, 1). Never panics on empty ranges.
#[inline]
pub(crate) fn uniform<R: Rng + ?Sized>(rng: &mut R, (lo, hi): (f32, f32)) -> f32 {
    lo + rng.gen::<f32>() * (hi - lo)
}

impl Beam {
    /// Fresh beam scattered over the viewport (plus a quarter margin on each side).
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, width: f32, height: f32) -> Self {
        let angle_deg = uniform(rng, SPAWN_ANGLE_DEG);
        let x = uniform(
            rng,
            (-SPAWN_MARGIN_FRAC * width, (1.0 + SPAWN_MARGIN_FRAC) * width),
        );
        let y = uniform(
            rng,
            (-SPAWN_MARGIN_FRAC * height, (1.0 + SPAWN_MARGIN_FRAC) * height),
        );
        Self {
            position: Vec2::new(x, y),
            width: uniform(rng, SPAWN_WIDTH),
            length: height * BEAM_LENGTH_FACTOR,
            angle_deg,
            speed: uniform(rng, SPAWN_SPEED),
            opacity: uniform(rng, SPAWN_OPACITY),
            hue: uniform(rng, SPAWN_HUE),
            pulse_phase: uniform(rng, (0.0, TAU)),
            pulse_speed: uniform(rng, SPAWN_PULSE_SPEED),
        }
    }

    /// Move up by `speed` and advance the pulse.
    #[inline]
    pub fn step(&mut self) {
        self.position.y -= self.speed;
        self.pulse_phase += self.pulse_speed;
    }

    #[inline]
    pub fn has_exited(&self) -> bool {
        self.position.y + self.length < -EXIT_MARGIN
    }

    /// Re-enter below the bottom edge in column `index % 3`, with the hue
    /// banded by slot so the pool spreads evenly over the palette.
    pub fn recycle_into_column<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        index: usize,
        pool_size: usize,
        width: f32,
        height: f32,
    ) {
        let column = (index % RECYCLE_COLUMNS) as f32;
        let spacing = width / RECYCLE_COLUMNS as f32;
        let jitter = (rng.gen::<f32>() - 0.5) * spacing * RECYCLE_JITTER_FRAC;

        self.position.y = height + EXIT_MARGIN;
        self.position.x = column * spacing + spacing / 2.0 + jitter;
        self.width = uniform(rng, RECYCLE_WIDTH);
        self.speed = uniform(rng, RECYCLE_SPEED);
        self.hue = RECYCLE_HUE_BASE + (index as f32 / pool_size.max(1) as f32) * RECYCLE_HUE_SPAN;
        self.opacity = uniform(rng, RECYCLE_OPACITY);
    }

    /// Alpha for this frame after the sinusoidal pulse and intensity scaling.
    #[inline]
    pub fn pulsing_opacity(&self, intensity: f32) -> f32 {
        self.opacity * (PULSE_BASE + PULSE_DEPTH * self.pulse_phase.sin()) * intensity
    }

    /// Gradient along the beam's local length axis (0,0) -> (0,length).
    pub fn gradient(&self, intensity: f32) -> LinearGradient {
        let alpha = self.pulsing_opacity(intensity);
        let mut g = LinearGradient::new(Vec2::ZERO, Vec2::new(0.0, self.length));
        for (offset, scale) in GRADIENT_STOPS {
            g.add_stop(
                offset,
                Hsla::new(self.hue, BEAM_SATURATION, BEAM_LIGHTNESS, alpha * scale),
            );
        }
        g
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn uniform_handles_degenerate_range() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(uniform(&mut rng, (0.0, 0.0)), 0.0);
    }

    #[test]
    fn step_moves_up_and_advances_pulse() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut b = Beam::spawn(&mut rng, 800.0, 600.0);
        let (y0, p0) = (b.position.y, b.pulse_phase);
        b.step();
        assert!((b.position.y - (y0 - b.speed)).abs() < 1e-4);
        assert!((b.pulse_phase - (p0 + b.pulse_speed)).abs() < 1e-5);
    }

    #[test]
    fn pulse_stays_within_band() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut b = Beam::spawn(&mut rng, 800.0, 600.0);
        for _ in 0..500 {
            b.step();
            let o = b.pulsing_opacity(1.0);
            assert!(o >= b.opacity * 0.6 - 1e-6 && o <= b.opacity + 1e-6);
        }
    }
}

//! The beam field animator.
//!
//! Owns a fixed-size pool of beams for one viewport size. A resize rebuilds
//! the whole pool; a beam leaving the top is recycled in its own slot, so the
//! pool length only changes through [`BeamField::initialize`].

use crate::beam::Beam;
use crate::config::{FieldConfig, RecyclePolicy};
use crate::constants::BEAM_BLUR_PX;
use crate::surface::{DrawSurface, Rect};
use rand::prelude::*;

pub struct BeamField<R: Rng = StdRng> {
    config: FieldConfig,
    beams: Vec<Beam>,
    width: f32,
    height: f32,
    rng: R,
}

impl BeamField<StdRng> {
    /// Seed from `config.seed` when set, otherwise from entropy.
    pub fn new(config: FieldConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(config, rng)
    }
}

impl<R: Rng> BeamField<R> {
    pub fn with_rng(config: FieldConfig, rng: R) -> Self {
        Self {
            config,
            beams: Vec::new(),
            width: 0.0,
            height: 0.0,
            rng,
        }
    }

    /// Discard the pool and spawn a new one for a `width` x `height` surface
    /// (device pixels). Safe to call repeatedly.
    pub fn initialize(&mut self, width: f32, height: f32) {
        self.width = width.max(0.0);
        self.height = height.max(0.0);
        let count = if self.width > 0.0 && self.height > 0.0 {
            self.config.pool_size()
        } else {
            0
        };
        let (w, h) = (self.width, self.height);
        let rng = &mut self.rng;
        self.beams = (0..count).map(|_| Beam::spawn(&mut *rng, w, h)).collect();
        log::debug!("[beams] pool={} viewport={}x{}", count, w, h);
    }

    /// Update every beam once, recycling those that have left the top.
    pub fn advance(&mut self) {
        for i in 0..self.beams.len() {
            self.beams[i].step();
            if self.beams[i].has_exited() {
                self.recycle(i);
            }
        }
    }

    /// Reset slot `index` in place according to the configured policy.
    pub fn recycle(&mut self, index: usize) {
        let pool_size = self.beams.len();
        let (w, h) = (self.width, self.height);
        let Some(beam) = self.beams.get_mut(index) else {
            return;
        };
        match self.config.recycle {
            RecyclePolicy::Columns => {
                beam.recycle_into_column(&mut self.rng, index, pool_size, w, h)
            }
            RecyclePolicy::Respawn => *beam = Beam::spawn(&mut self.rng, w, h),
        }
        log::trace!("[beams] recycled slot {} -> y={:.1}", index, beam.position.y);
    }

    /// Clear the surface and draw the pool in order, later beams on top.
    pub fn render<S: DrawSurface + ?Sized>(&self, surface: &mut S) {
        surface.clear(self.width, self.height);
        surface.set_blur(BEAM_BLUR_PX);
        let intensity = self.config.intensity.multiplier();
        for beam in &self.beams {
            draw_beam(surface, beam, intensity);
        }
    }

    /// One animation frame: advance then render.
    pub fn tick<S: DrawSurface + ?Sized>(&mut self, surface: &mut S) {
        self.advance();
        self.render(surface);
    }

    pub fn beams(&self) -> &[Beam] {
        &self.beams
    }

    pub fn len(&self) -> usize {
        self.beams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.beams.is_empty()
    }

    pub fn viewport(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }
}

fn draw_beam<S: DrawSurface + ?Sized>(surface: &mut S, beam: &Beam, intensity: f32) {
    surface.save();
    surface.translate(beam.position.x, beam.position.y);
    surface.rotate(beam.angle_deg.to_radians());
    let gradient = beam.gradient(intensity);
    surface.fill_rect(
        Rect::new(-beam.width / 2.0, 0.0, beam.width, beam.length),
        &gradient,
    );
    surface.restore();
}

// Beam field tuning constants shared by every view that shows the background.

// Pool sizing
pub const DEFAULT_MINIMUM_BEAMS: u32 = 20;
pub const MAX_MINIMUM_BEAMS: u32 = 500; // upper bound accepted from page config
pub const POOL_SIZE_FACTOR: f32 = 1.5; // pool = round(minimum * factor)

// Spawn ranges (uniform draws)
pub const SPAWN_ANGLE_DEG: (f32, f32) = (-35.0, -25.0);
pub const SPAWN_MARGIN_FRAC: f32 = 0.25; // spawn area extends this far past each edge
pub const SPAWN_WIDTH: (f32, f32) = (30.0, 90.0);
pub const SPAWN_SPEED: (f32, f32) = (0.6, 1.8);
pub const SPAWN_OPACITY: (f32, f32) = (0.12, 0.28);
pub const SPAWN_HUE: (f32, f32) = (190.0, 260.0);
pub const SPAWN_PULSE_SPEED: (f32, f32) = (0.02, 0.05);

pub const BEAM_LENGTH_FACTOR: f32 = 2.5; // length = viewport height * factor

// Recycling
pub const EXIT_MARGIN: f32 = 100.0; // distance past the top edge before a beam is recycled
pub const RECYCLE_COLUMNS: usize = 3;
pub const RECYCLE_JITTER_FRAC: f32 = 0.5; // total jitter span as a fraction of column width
pub const RECYCLE_WIDTH: (f32, f32) = (100.0, 200.0);
pub const RECYCLE_SPEED: (f32, f32) = (0.5, 0.9);
pub const RECYCLE_OPACITY: (f32, f32) = (0.2, 0.3);
pub const RECYCLE_HUE_BASE: f32 = 190.0;
pub const RECYCLE_HUE_SPAN: f32 = 70.0;

// Pulse modulation: alpha *= PULSE_BASE + PULSE_DEPTH * sin(phase)
pub const PULSE_BASE: f32 = 0.8;
pub const PULSE_DEPTH: f32 = 0.2;

// Gradient along the beam length
pub const BEAM_SATURATION: f32 = 85.0;
pub const BEAM_LIGHTNESS: f32 = 65.0;
pub const GRADIENT_STOPS: [(f32, f32); 6] = [
    (0.0, 0.0),
    (0.1, 0.5),
    (0.4, 1.0),
    (0.6, 1.0),
    (0.9, 0.5),
    (1.0, 0.0),
]; // (offset, alpha scale)

// Glow
pub const BEAM_BLUR_PX: f32 = 35.0; // applied to the drawing pass
pub const LAYER_BLUR_PX: f32 = 15.0; // applied to the composited canvas element

// Tuning constants for the particle trail. Shared by the simulation, the
// emitter and the renderer; kept free of platform types so host tests can
// include this file directly.

// Population
pub const MAX_PARTICLES: usize = 1200; // hard cap, oldest evicted first

// Emission
pub const SPAWN_STEP: f32 = 6.0; // distance units per particle (lower = denser)
pub const MIN_SPAWN_DISTANCE: f32 = 1.0; // floor so a slow drag still makes progress
pub const INHERIT_VELOCITY: f32 = 0.03; // share of pointer velocity given to new particles

// Particle shaping (base = BASE_MIN + min(BASE_SPEED_CAP, speed / BASE_SPEED_DIVISOR))
pub const BASE_MIN: f32 = 0.6;
pub const BASE_SPEED_CAP: f32 = 2.2;
pub const BASE_SPEED_DIVISOR: f32 = 25.0;

pub const LIFE_MIN: f32 = 30.0;
pub const LIFE_JITTER: f32 = 30.0;
pub const LIFE_BASE_PENALTY: f32 = 6.0; // faster pointer = shorter life

pub const SIZE_MIN: f32 = 1.2;
pub const SIZE_JITTER: f32 = 2.8;
pub const SIZE_BASE_GAIN: f32 = 0.9;

pub const SPEED_MIN: f32 = 0.25;
pub const SPEED_JITTER: f32 = 0.9;

pub const HUE_JITTER_DEG: f32 = 9.0;

// Hue cursor
pub const HUE_START_DEG: f32 = 210.0;
pub const HUE_DRIFT_DEG: f32 = 0.35; // per motion sample
pub const HUE_SPEED_GAIN: f32 = 0.01;

// Simulation
pub const DAMPING: f32 = 0.985;
pub const FRAME_MS: f32 = 16.67; // 60fps baseline for normalising motion
pub const MAX_FRAME_DT_MS: f32 = 32.0; // clamp after stalls (tab switch etc.)

// Surface
pub const MIN_PIXEL_RATIO: f64 = 1.0;
pub const MAX_PIXEL_RATIO: f64 = 2.0;

// Rendering
pub const BACKGROUND_CSS: &str = "#070A12";
pub const TRAIL_FADE_CSS: &str = "rgba(7,10,18,0.12)"; // lower alpha = longer trails
pub const SATURATION_PCT: f32 = 95.0;
pub const GLOW_LIGHTNESS_PCT: f32 = 65.0;
pub const GLYPH_LIGHTNESS_PCT: f32 = 72.0;
pub const GLOW_RADIUS_SCALE: f32 = 4.2;
pub const GLOW_ALPHA_SCALE: f32 = 0.22;
pub const AGE_GROWTH_MIN: f32 = 0.6; // glyph scale at birth
pub const AGE_GROWTH_SPAN: f32 = 0.8; // extra scale reached at end of life
pub const RING_RADIUS_SCALE: f32 = 1.8;
pub const RING_WIDTH_SCALE: f32 = 0.55;
pub const LINE_WIDTH_SCALE: f32 = 0.7;
pub const MIN_STROKE_WIDTH: f32 = 1.0;

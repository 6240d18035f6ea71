// Owned simulation state for one trail surface.
//
// Everything that drifts between events (hue, spawn carry, mode, RNG) lives
// here rather than in globals, so several surfaces can coexist and tests can
// drive the loop with synthetic input and frame deltas.

use super::constants::{MAX_PARTICLES, SPAWN_STEP};
use super::draw::{draw_frame, paint_background, Canvas2d};
use super::emitter::{emit, SpawnCarry};
use super::mode::{Mode, ModeCommand, ModeSelector};
use super::motion::{HueCursor, InputTracker, MotionSample};
use super::particles::{clamp_frame_dt, ParticleStore};
use super::surface::SurfaceMetrics;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[derive(Clone, Debug)]
pub struct TrailParams {
    /// Distance travelled per spawned particle.
    pub spawn_step: f32,
    pub max_particles: usize,
}

impl Default for TrailParams {
    fn default() -> Self {
        Self {
            spawn_step: SPAWN_STEP,
            max_particles: MAX_PARTICLES,
        }
    }
}

pub struct TrailState {
    pub params: TrailParams,
    pub store: ParticleStore,
    pub tracker: InputTracker,
    pub hue: HueCursor,
    pub carry: SpawnCarry,
    pub mode: ModeSelector,
    pub surface: SurfaceMetrics,
    rng: StdRng,
}

impl TrailState {
    pub fn new(params: TrailParams, seed: u64) -> Self {
        Self::with_rng(params, StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy(params: TrailParams) -> Self {
        Self::with_rng(params, StdRng::from_entropy())
    }

    fn with_rng(params: TrailParams, rng: StdRng) -> Self {
        Self {
            store: ParticleStore::with_cap(params.max_particles),
            params,
            tracker: InputTracker::default(),
            hue: HueCursor::default(),
            carry: SpawnCarry::default(),
            mode: ModeSelector::default(),
            surface: SurfaceMetrics::compute(0.0, 0.0, None),
            rng,
        }
    }

    /// Feed one pointer/touch move. Returns how many particles were spawned.
    pub fn on_move(&mut self, x: f32, y: f32) -> usize {
        let sample = self.tracker.on_move(x, y);
        self.hue.advance(self.tracker.sample().speed);
        match sample {
            Some(m) => self.spawn(&m),
            None => 0,
        }
    }

    fn spawn(&mut self, motion: &MotionSample) -> usize {
        let spawned = emit(
            &mut self.rng,
            &mut self.carry,
            motion,
            self.hue.degrees(),
            self.params.spawn_step,
        );
        let n = spawned.len();
        for p in spawned {
            self.store.push(p);
        }
        n
    }

    /// Advance the simulation by a frame delta in milliseconds.
    /// Returns how many particles expired.
    pub fn step(&mut self, dt_ms: f64) -> usize {
        self.store.step(clamp_frame_dt(dt_ms))
    }

    pub fn render<C: Canvas2d + ?Sized>(&self, canvas: &mut C) {
        draw_frame(
            canvas,
            &self.store,
            self.mode.current(),
            self.surface.width as f32,
            self.surface.height as f32,
        );
    }

    /// One animation frame: simulate, then draw the survivors.
    pub fn frame<C: Canvas2d + ?Sized>(&mut self, canvas: &mut C, dt_ms: f64) {
        self.step(dt_ms);
        self.render(canvas);
    }

    /// Adopt new surface metrics and reinstall the logical-pixel transform.
    pub fn resize<C: Canvas2d + ?Sized>(&mut self, canvas: &mut C, metrics: SurfaceMetrics) {
        self.surface = metrics;
        canvas.set_transform(metrics.transform());
    }

    pub fn paint_background<C: Canvas2d + ?Sized>(&self, canvas: &mut C) {
        paint_background(
            canvas,
            self.surface.width as f32,
            self.surface.height as f32,
        );
    }

    pub fn apply_mode(&mut self, cmd: ModeCommand) -> Mode {
        self.mode.apply(cmd)
    }
}

/// Turns monotonic frame timestamps (ms) into clamped deltas.
#[derive(Clone, Copy, Debug)]
pub struct FrameClock {
    last_ms: f64,
}

impl FrameClock {
    pub fn new(start_ms: f64) -> Self {
        Self { last_ms: start_ms }
    }

    pub fn tick(&mut self, now_ms: f64) -> f64 {
        let dt = clamp_frame_dt(now_ms - self.last_ms) as f64;
        self.last_ms = now_ms;
        dt
    }
}

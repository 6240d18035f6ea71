// Particle model, bounded store and the per-frame simulation step.
//
// The store is a fixed-capacity ring buffer: inserting past the cap advances
// the head instead of shifting the whole collection, and expired particles
// are dropped with an order-preserving in-place retain.

use super::constants::{DAMPING, FRAME_MS, MAX_FRAME_DT_MS, MAX_PARTICLES};
use glam::Vec2;
use std::collections::VecDeque;

/// One glyph in flight.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    /// Position before the last step; line mode draws `prev -> pos`.
    pub prev: Vec2,
    pub vel: Vec2,
    pub life: f32,
    pub max_life: f32,
    pub size: f32,
    pub hue: f32,
}

impl Particle {
    pub fn new(pos: Vec2, vel: Vec2, life: f32, size: f32, hue: f32) -> Self {
        Self {
            pos,
            prev: pos,
            vel,
            life,
            max_life: life,
            size,
            hue,
        }
    }

    /// Remaining life normalised to [0, 1].
    #[inline]
    pub fn fade(&self) -> f32 {
        (self.life / self.max_life).max(0.0)
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.life > 0.0
    }

    /// Advance by `frames` 60fps-equivalent frames. Returns whether the
    /// particle is still alive afterwards.
    #[inline]
    pub fn advance(&mut self, frames: f32) -> bool {
        self.prev = self.pos;
        self.vel *= DAMPING;
        self.pos += self.vel * frames;
        self.life -= frames;
        self.is_alive()
    }
}

/// Clamp a raw frame delta (ms) to `[0, MAX_FRAME_DT_MS]`.
#[inline]
pub fn clamp_frame_dt(dt_ms: f64) -> f32 {
    if !dt_ms.is_finite() {
        return 0.0;
    }
    (dt_ms as f32).clamp(0.0, MAX_FRAME_DT_MS)
}

/// Insertion-ordered particle collection with a hard population cap.
#[derive(Clone, Debug)]
pub struct ParticleStore {
    items: VecDeque<Particle>,
    cap: usize,
}

impl Default for ParticleStore {
    fn default() -> Self {
        Self::with_cap(MAX_PARTICLES)
    }
}

impl ParticleStore {
    pub fn with_cap(cap: usize) -> Self {
        Self {
            items: VecDeque::with_capacity(cap + 1),
            cap,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn cap(&self) -> usize {
        self.cap
    }

    /// Append a particle, evicting the oldest surplus in one batch.
    /// Returns how many particles were evicted.
    pub fn push(&mut self, p: Particle) -> usize {
        self.items.push_back(p);
        let surplus = self.items.len().saturating_sub(self.cap);
        if surplus > 0 {
            self.items.drain(..surplus);
        }
        surplus
    }

    /// Oldest first.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Particle> + ExactSizeIterator {
        self.items.iter()
    }

    /// Run one simulation step with a frame delta in milliseconds (clamped)
    /// and drop every particle whose life ran out. Returns the number removed.
    pub fn step(&mut self, dt_ms: f32) -> usize {
        self.advance_frames(dt_ms.clamp(0.0, MAX_FRAME_DT_MS) / FRAME_MS)
    }

    /// Advance every particle by `frames` 60fps-equivalent frames.
    pub fn advance_frames(&mut self, frames: f32) -> usize {
        let before = self.items.len();
        self.items.retain_mut(|p| p.advance(frames));
        before - self.items.len()
    }
}

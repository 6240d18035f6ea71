// Emission policy: how many particles a motion sample produces, where they
// go along the travelled segment, and how each one is shaped.

use super::constants::*;
use super::motion::{wrap_degrees, MotionSample};
use super::particles::Particle;
use glam::Vec2;
use rand::Rng;
use smallvec::SmallVec;
use std::f32::consts::TAU;

/// Spawn points for one event; a fast flick rarely needs more than this.
pub type SpawnPoints = SmallVec<[Vec2; 32]>;

/// Fractional accumulator so the long-run spawn rate matches the true
/// per-event rate instead of drifting with rounding.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SpawnCarry(f32);

impl SpawnCarry {
    #[inline]
    pub fn value(&self) -> f32 {
        self.0
    }

    /// Add `count` and take out its whole part.
    pub fn accumulate(&mut self, count: f32) -> usize {
        self.0 += count;
        let whole = self.0.floor();
        self.0 -= whole;
        whole.max(0.0) as usize
    }
}

/// Fractional particle count for a sample with the given speed.
#[inline]
pub fn spawn_count(speed: f32, step: f32) -> f32 {
    speed.max(MIN_SPAWN_DISTANCE) / step
}

/// `n` evenly spaced points from `from` to `to`, both ends included.
/// A single point sits at `to`.
pub fn spawn_points(from: Vec2, to: Vec2, n: usize) -> SpawnPoints {
    match n {
        0 => SpawnPoints::new(),
        1 => SpawnPoints::from_elem(to, 1),
        _ => {
            let last = (n - 1) as f32;
            (0..n).map(|i| from.lerp(to, i as f32 / last)).collect()
        }
    }
}

/// Speed-dependent scale shared by life, size and launch speed.
#[inline]
pub fn speed_base(speed: f32) -> f32 {
    BASE_MIN + (speed / BASE_SPEED_DIVISOR).min(BASE_SPEED_CAP)
}

/// Shape one particle at `pos` for the given motion.
pub fn make_particle<R: Rng>(
    rng: &mut R,
    pos: Vec2,
    motion: &MotionSample,
    hue: f32,
) -> Particle {
    let base = speed_base(motion.speed);
    // life has no floor; speed alone shortens it
    let life = LIFE_MIN + rng.gen_range(0.0..LIFE_JITTER) - base * LIFE_BASE_PENALTY;
    let size = SIZE_MIN + rng.gen_range(0.0..SIZE_JITTER) + base * SIZE_BASE_GAIN;

    let angle = rng.gen_range(0.0..TAU);
    let launch = (SPEED_MIN + rng.gen_range(0.0..SPEED_JITTER)) * base;
    let vel = Vec2::from_angle(angle) * launch + motion.vel * INHERIT_VELOCITY;

    let jitter = rng.gen_range(-HUE_JITTER_DEG..HUE_JITTER_DEG);
    Particle::new(pos, vel, life, size, wrap_degrees(hue + jitter))
}

/// Particles produced by a single motion sample.
pub fn emit<R: Rng>(
    rng: &mut R,
    carry: &mut SpawnCarry,
    motion: &MotionSample,
    hue: f32,
    step: f32,
) -> SmallVec<[Particle; 32]> {
    let n = carry.accumulate(spawn_count(motion.speed, step));
    spawn_points(motion.origin(), motion.pos, n)
        .into_iter()
        .map(|p| make_particle(rng, p, motion, hue))
        .collect()
}

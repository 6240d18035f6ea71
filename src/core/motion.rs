use super::constants::{HUE_DRIFT_DEG, HUE_SPEED_GAIN, HUE_START_DEG};
use glam::Vec2;

/// Pointer motion annotated with the delta since the previous event.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MotionSample {
    pub pos: Vec2,
    pub vel: Vec2,
    pub speed: f32,
}

impl MotionSample {
    /// Start of the segment travelled since the previous sample.
    #[inline]
    pub fn origin(&self) -> Vec2 {
        self.pos - self.vel
    }
}

/// Turns raw move events into motion samples. Mouse and touch share it.
#[derive(Clone, Debug, Default)]
pub struct InputTracker {
    last: Option<Vec2>,
    sample: MotionSample,
}

impl InputTracker {
    /// Record a move to `(x, y)`. Returns `None` for the very first event,
    /// which has no direction yet.
    pub fn on_move(&mut self, x: f32, y: f32) -> Option<MotionSample> {
        let pos = Vec2::new(x, y);
        let primed = match self.last {
            Some(last) => {
                let vel = pos - last;
                self.sample.vel = vel;
                self.sample.speed = vel.length();
                true
            }
            None => false,
        };
        self.sample.pos = pos;
        self.last = Some(pos);
        primed.then_some(self.sample)
    }

    #[inline]
    pub fn sample(&self) -> MotionSample {
        self.sample
    }
}

/// Colour cursor that drifts with every motion sample.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HueCursor(pub f32);

impl Default for HueCursor {
    fn default() -> Self {
        Self(HUE_START_DEG)
    }
}

impl HueCursor {
    #[inline]
    pub fn degrees(&self) -> f32 {
        self.0
    }

    pub fn advance(&mut self, speed: f32) -> f32 {
        self.0 = wrap_degrees(self.0 + HUE_DRIFT_DEG + speed * HUE_SPEED_GAIN);
        self.0
    }
}

/// Wrap an angle in degrees into [0, 360).
#[inline]
pub fn wrap_degrees(deg: f32) -> f32 {
    let d = deg.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if d >= 360.0 {
        0.0
    } else {
        d
    }
}

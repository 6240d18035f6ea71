pub mod constants;
pub mod draw;
pub mod emitter;
pub mod mode;
pub mod motion;
pub mod particles;
pub mod state;
pub mod surface;

pub use draw::{Blend, Canvas2d};
pub use mode::{mode_command_for_key, Mode, ModeCommand};
pub use state::{FrameClock, TrailParams, TrailState};
pub use surface::SurfaceMetrics;

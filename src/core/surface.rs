use super::constants::{MAX_PIXEL_RATIO, MIN_PIXEL_RATIO};

/// Drawing-surface dimensions for one viewport size.
///
/// `width`/`height` are logical (CSS) pixels; the backing store is
/// `backing_width` x `backing_height` device pixels and drawing is scaled by
/// `ratio` so callers keep working in logical units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceMetrics {
    pub width: u32,
    pub height: u32,
    pub ratio: f64,
    pub backing_width: u32,
    pub backing_height: u32,
}

impl SurfaceMetrics {
    pub fn compute(inner_width: f64, inner_height: f64, device_pixel_ratio: Option<f64>) -> Self {
        let ratio = clamp_pixel_ratio(device_pixel_ratio);
        let width = to_px(inner_width);
        let height = to_px(inner_height);
        Self {
            width,
            height,
            ratio,
            backing_width: to_px(width as f64 * ratio),
            backing_height: to_px(height as f64 * ratio),
        }
    }

    /// Row-major 2D affine `(a, b, c, d, e, f)` mapping logical to device pixels.
    #[inline]
    pub fn transform(&self) -> [f64; 6] {
        [self.ratio, 0.0, 0.0, self.ratio, 0.0, 0.0]
    }

    /// CSS size strings for the canvas style.
    pub fn css_size(&self) -> (String, String) {
        (format!("{}px", self.width), format!("{}px", self.height))
    }
}

/// Pixel ratio clamped to [1, 2]; 1 when the host does not report one.
#[inline]
pub fn clamp_pixel_ratio(dpr: Option<f64>) -> f64 {
    match dpr {
        Some(r) if r.is_finite() => r.clamp(MIN_PIXEL_RATIO, MAX_PIXEL_RATIO),
        _ => MIN_PIXEL_RATIO,
    }
}

#[inline]
fn to_px(v: f64) -> u32 {
    if v.is_finite() && v > 0.0 {
        v.floor() as u32
    } else {
        0
    }
}

// Frame rendering against an abstract immediate-mode 2D surface.
//
// The browser implements [`Canvas2d`] on top of `CanvasRenderingContext2d`;
// host tests use a recorder.

use super::constants::*;
use super::mode::Mode;
use super::particles::{Particle, ParticleStore};
use glam::Vec2;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Blend {
    /// Regular alpha compositing (`source-over`).
    Normal,
    /// Additive (`lighter`).
    Additive,
}

impl Blend {
    pub fn as_css(self) -> &'static str {
        match self {
            Blend::Normal => "source-over",
            Blend::Additive => "lighter",
        }
    }
}

/// Minimal drawing surface the renderer needs. Coordinates are logical pixels.
pub trait Canvas2d {
    fn set_transform(&mut self, m: [f64; 6]);
    fn set_blend(&mut self, blend: Blend);
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: &str);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: &str);
    fn stroke_circle(&mut self, center: Vec2, radius: f32, width: f32, color: &str);
    /// Round-capped segment.
    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: &str);
}

/// CSS `hsla()` colour.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsla {
    pub hue: f32,
    pub saturation: f32,
    pub lightness: f32,
    pub alpha: f32,
}

impl fmt::Display for Hsla {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsla({}, {}%, {}%, {})",
            self.hue, self.saturation, self.lightness, self.alpha
        )
    }
}

/// Opacity and glyph scale derived from a particle's remaining life.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlyphStyle {
    pub alpha: f32,
    pub scale: f32,
}

impl GlyphStyle {
    pub fn for_particle(p: &Particle) -> Self {
        let fade = p.fade();
        Self {
            // quadratic: sharper cutoff near the end of life
            alpha: fade * fade,
            scale: p.size * (AGE_GROWTH_MIN + (1.0 - fade) * AGE_GROWTH_SPAN),
        }
    }
}

/// Opaque background fill used once before the first frame.
pub fn paint_background<C: Canvas2d + ?Sized>(canvas: &mut C, width: f32, height: f32) {
    canvas.set_blend(Blend::Normal);
    canvas.fill_rect(0.0, 0.0, width, height, BACKGROUND_CSS);
}

/// Translucent overlay that partially erases the previous frame.
pub fn fade_background<C: Canvas2d + ?Sized>(canvas: &mut C, width: f32, height: f32) {
    canvas.set_blend(Blend::Normal);
    canvas.fill_rect(0.0, 0.0, width, height, TRAIL_FADE_CSS);
}

pub fn draw_particle<C: Canvas2d + ?Sized>(canvas: &mut C, p: &Particle, mode: Mode) {
    let GlyphStyle { alpha, scale: s } = GlyphStyle::for_particle(p);

    let glow = Hsla {
        hue: p.hue,
        saturation: SATURATION_PCT,
        lightness: GLOW_LIGHTNESS_PCT,
        alpha: alpha * GLOW_ALPHA_SCALE,
    };
    canvas.fill_circle(p.pos, s * GLOW_RADIUS_SCALE, &glow.to_string());

    let color = Hsla {
        lightness: GLYPH_LIGHTNESS_PCT,
        alpha,
        ..glow
    }
    .to_string();
    match mode {
        Mode::Point => canvas.fill_circle(p.pos, s, &color),
        Mode::Ring => canvas.stroke_circle(
            p.pos,
            s * RING_RADIUS_SCALE,
            (s * RING_WIDTH_SCALE).max(MIN_STROKE_WIDTH),
            &color,
        ),
        Mode::Line => canvas.stroke_line(
            p.prev,
            p.pos,
            (s * LINE_WIDTH_SCALE).max(MIN_STROKE_WIDTH),
            &color,
        ),
    }
}

/// Fade overlay, then every live particle newest-first with additive blending.
/// Leaves the surface in normal compositing.
pub fn draw_frame<C: Canvas2d + ?Sized>(
    canvas: &mut C,
    store: &ParticleStore,
    mode: Mode,
    width: f32,
    height: f32,
) {
    fade_background(canvas, width, height);
    if !store.is_empty() {
        canvas.set_blend(Blend::Additive);
        for p in store.iter().rev() {
            draw_particle(canvas, p, mode);
        }
    }
    canvas.set_blend(Blend::Normal);
}

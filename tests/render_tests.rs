// Host-side tests for frame rendering, using a recording surface.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod trails {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod draw {
        include!("../src/core/draw.rs");
    }
    pub mod mode {
        include!("../src/core/mode.rs");
    }
    pub mod particles {
        include!("../src/core/particles.rs");
    }
}

use glam::Vec2;
use trails::constants::*;
use trails::draw::*;
use trails::mode::Mode;
use trails::particles::{Particle, ParticleStore};

#[derive(Clone, Debug, PartialEq)]
enum Op {
    Transform([f64; 6]),
    Blend(Blend),
    Rect(f32, f32, f32, f32, String),
    FillCircle(Vec2, f32, String),
    StrokeCircle(Vec2, f32, f32, String),
    Line(Vec2, Vec2, f32, String),
}

#[derive(Default)]
struct Recorder {
    ops: Vec<Op>,
}

impl Canvas2d for Recorder {
    fn set_transform(&mut self, m: [f64; 6]) {
        self.ops.push(Op::Transform(m));
    }
    fn set_blend(&mut self, blend: Blend) {
        self.ops.push(Op::Blend(blend));
    }
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: &str) {
        self.ops.push(Op::Rect(x, y, w, h, color.to_string()));
    }
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: &str) {
        self.ops.push(Op::FillCircle(center, radius, color.to_string()));
    }
    fn stroke_circle(&mut self, center: Vec2, radius: f32, width: f32, color: &str) {
        self.ops
            .push(Op::StrokeCircle(center, radius, width, color.to_string()));
    }
    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: &str) {
        self.ops.push(Op::Line(from, to, width, color.to_string()));
    }
}

fn close(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}

fn fresh(pos: Vec2, size: f32, hue: f32) -> Particle {
    Particle::new(pos, Vec2::ZERO, 10.0, size, hue)
}

fn store_of(ps: &[Particle]) -> ParticleStore {
    let mut s = ParticleStore::default();
    for p in ps {
        s.push(*p);
    }
    s
}

#[test]
fn hsla_formats_as_css() {
    let c = Hsla {
        hue: 200.0,
        saturation: 95.0,
        lightness: 72.0,
        alpha: 0.5,
    };
    assert_eq!(c.to_string(), "hsla(200, 95%, 72%, 0.5)");
}

#[test]
fn blend_css_names() {
    assert_eq!(Blend::Normal.as_css(), "source-over");
    assert_eq!(Blend::Additive.as_css(), "lighter");
}

#[test]
fn empty_frame_only_fades_background() {
    let mut rec = Recorder::default();
    draw_frame(&mut rec, &ParticleStore::default(), Mode::Point, 800.0, 600.0);
    assert_eq!(
        rec.ops,
        vec![
            Op::Blend(Blend::Normal),
            Op::Rect(0.0, 0.0, 800.0, 600.0, TRAIL_FADE_CSS.to_string()),
            Op::Blend(Blend::Normal),
        ]
    );
}

#[test]
fn background_paint_is_opaque() {
    let mut rec = Recorder::default();
    paint_background(&mut rec, 10.0, 20.0);
    assert_eq!(
        rec.ops.last(),
        Some(&Op::Rect(0.0, 0.0, 10.0, 20.0, BACKGROUND_CSS.to_string()))
    );
}

#[test]
fn particles_drawn_additively_after_fade() {
    let mut rec = Recorder::default();
    let store = store_of(&[fresh(Vec2::new(5.0, 5.0), 5.0, 200.0)]);
    draw_frame(&mut rec, &store, Mode::Point, 100.0, 100.0);

    assert_eq!(rec.ops[0], Op::Blend(Blend::Normal));
    assert!(matches!(rec.ops[1], Op::Rect(..)));
    assert_eq!(rec.ops[2], Op::Blend(Blend::Additive));
    assert_eq!(rec.ops.last(), Some(&Op::Blend(Blend::Normal)));
    // glow + glyph
    assert_eq!(rec.ops.len(), 6);
}

#[test]
fn fresh_particle_glow_and_point() {
    let mut rec = Recorder::default();
    draw_particle(&mut rec, &fresh(Vec2::new(5.0, 6.0), 5.0, 200.0), Mode::Point);
    match &rec.ops[0] {
        Op::FillCircle(c, r, color) => {
            assert_eq!(*c, Vec2::new(5.0, 6.0));
            assert!(close(*r, 5.0 * 0.6 * 4.2));
            assert_eq!(color, "hsla(200, 95%, 65%, 0.22)");
        }
        other => panic!("expected glow, got {:?}", other),
    }
    match &rec.ops[1] {
        Op::FillCircle(c, r, color) => {
            assert_eq!(*c, Vec2::new(5.0, 6.0));
            assert!(close(*r, 3.0));
            assert_eq!(color, "hsla(200, 95%, 72%, 1)");
        }
        other => panic!("expected point, got {:?}", other),
    }
}

#[test]
fn aging_particle_fades_quadratically_and_grows() {
    let mut p = fresh(Vec2::ZERO, 2.0, 30.0);
    p.life = 5.0;
    let style = GlyphStyle::for_particle(&p);
    assert!(close(style.alpha, 0.25));
    assert!(close(style.scale, 2.0));

    p.life = 10.0;
    let young = GlyphStyle::for_particle(&p);
    p.life = 0.1;
    let old = GlyphStyle::for_particle(&p);
    assert!(old.scale > young.scale);
    assert!(old.scale <= 2.0 * (AGE_GROWTH_MIN + AGE_GROWTH_SPAN));
    assert!(old.alpha < young.alpha);
}

#[test]
fn ring_mode_strokes_circle() {
    let mut rec = Recorder::default();
    draw_particle(&mut rec, &fresh(Vec2::new(1.0, 2.0), 5.0, 90.0), Mode::Ring);
    assert_eq!(rec.ops.len(), 2);
    match &rec.ops[1] {
        Op::StrokeCircle(c, r, w, _) => {
            assert_eq!(*c, Vec2::new(1.0, 2.0));
            assert!(close(*r, 3.0 * 1.8));
            assert!(close(*w, 3.0 * 0.55));
        }
        other => panic!("expected ring, got {:?}", other),
    }
}

#[test]
fn thin_strokes_keep_minimum_width() {
    let tiny = fresh(Vec2::ZERO, 1.0, 0.0);
    let mut rec = Recorder::default();
    draw_particle(&mut rec, &tiny, Mode::Ring);
    draw_particle(&mut rec, &tiny, Mode::Line);
    match (&rec.ops[1], &rec.ops[3]) {
        (Op::StrokeCircle(_, _, ring_w, _), Op::Line(_, _, line_w, _)) => {
            assert_eq!(*ring_w, MIN_STROKE_WIDTH);
            assert_eq!(*line_w, MIN_STROKE_WIDTH);
        }
        other => panic!("unexpected ops {:?}", other),
    }
}

#[test]
fn line_mode_draws_from_previous_position() {
    let mut p = fresh(Vec2::new(10.0, 10.0), 5.0, 0.0);
    p.prev = Vec2::new(7.0, 6.0);
    let mut rec = Recorder::default();
    draw_particle(&mut rec, &p, Mode::Line);
    match &rec.ops[1] {
        Op::Line(from, to, w, _) => {
            assert_eq!(*from, Vec2::new(7.0, 6.0));
            assert_eq!(*to, Vec2::new(10.0, 10.0));
            assert!(close(*w, 3.0 * 0.7));
        }
        other => panic!("expected line, got {:?}", other),
    }
}

#[test]
fn newest_particles_drawn_first() {
    let store = store_of(&[
        fresh(Vec2::new(1.0, 0.0), 2.0, 0.0),
        fresh(Vec2::new(2.0, 0.0), 2.0, 0.0),
    ]);
    let mut rec = Recorder::default();
    draw_frame(&mut rec, &store, Mode::Point, 10.0, 10.0);
    let centers: Vec<Vec2> = rec
        .ops
        .iter()
        .filter_map(|op| match op {
            Op::FillCircle(c, _, _) => Some(*c),
            _ => None,
        })
        .collect();
    assert_eq!(
        centers,
        vec![
            Vec2::new(2.0, 0.0),
            Vec2::new(2.0, 0.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(1.0, 0.0)
        ]
    );
}

use crate::core::{Blend, Canvas2d};
use glam::Vec2;
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys as web;

impl Canvas2d for web::CanvasRenderingContext2d {
    fn set_transform(&mut self, m: [f64; 6]) {
        _ = web::CanvasRenderingContext2d::set_transform(self, m[0], m[1], m[2], m[3], m[4], m[5]);
    }

    fn set_blend(&mut self, blend: Blend) {
        _ = self.set_global_composite_operation(blend.as_css());
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: &str) {
        self.set_fill_style_str(color);
        web::CanvasRenderingContext2d::fill_rect(self, x as f64, y as f64, w as f64, h as f64);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: &str) {
        self.begin_path();
        self.set_fill_style_str(color);
        _ = self.arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU);
        self.fill();
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f32, width: f32, color: &str) {
        self.begin_path();
        self.set_stroke_style_str(color);
        self.set_line_width(width as f64);
        _ = self.arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU);
        self.stroke();
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: &str) {
        self.begin_path();
        self.set_stroke_style_str(color);
        self.set_line_width(width as f64);
        self.set_line_cap("round");
        self.move_to(from.x as f64, from.y as f64);
        self.line_to(to.x as f64, to.y as f64);
        self.stroke();
    }
}

/// Fetch the 2D context of `canvas`.
pub fn context_2d(canvas: &web::HtmlCanvasElement) -> anyhow::Result<web::CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))
}

use crate::core::SurfaceMetrics;
use web_sys as web;

/// Current viewport size and pixel ratio.
pub fn viewport_metrics(window: &web::Window) -> SurfaceMetrics {
    let inner = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
    };
    let dpr = window.device_pixel_ratio();
    SurfaceMetrics::compute(
        inner(window.inner_width()),
        inner(window.inner_height()),
        (dpr > 0.0).then_some(dpr),
    )
}

/// Size the canvas backing store and its CSS box.
pub fn apply_canvas_size(canvas: &web::HtmlCanvasElement, metrics: &SurfaceMetrics) {
    canvas.set_width(metrics.backing_width);
    canvas.set_height(metrics.backing_height);
    let (w, h) = metrics.css_size();
    let style = canvas.style();
    _ = style.set_property("width", &w);
    _ = style.set_property("height", &h);
}

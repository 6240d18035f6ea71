/// Host page wiring.
///
/// Element ids the front-end looks up at startup; the page in
/// `static/index.html` must provide them.
pub const CANVAS_ID: &str = "c";
pub const MODE_LABEL_ID: &str = "modeName";

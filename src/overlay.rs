use crate::constants::MODE_LABEL_ID;
use crate::core::Mode;
use web_sys as web;

/// Show the active drawing mode in the on-page label.
#[inline]
pub fn set_mode_label(document: &web::Document, mode: Mode) {
    if let Some(el) = document.get_element_by_id(MODE_LABEL_ID) {
        el.set_text_content(Some(mode.label()));
    }
}

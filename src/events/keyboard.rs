use crate::core::{mode_command_for_key, TrailState};
use crate::overlay;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn handle_global_keydown(
    ev: &web::KeyboardEvent,
    state: &Rc<RefCell<TrailState>>,
    document: &web::Document,
) {
    let Some(cmd) = mode_command_for_key(&ev.key(), &ev.code()) else {
        return;
    };
    let mut s = state.borrow_mut();
    let mode = s.apply_mode(cmd);
    overlay::set_mode_label(document, mode);
    log::info!("[keys] mode={} ({})", mode.label(), s.mode.index() + 1);
}

pub fn wire_global_keydown(window: &web::Window, state: Rc<RefCell<TrailState>>, document: web::Document) {
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        handle_global_keydown(&ev, &state, &document);
    }) as Box<dyn FnMut(_)>);
    _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    closure.forget();
}

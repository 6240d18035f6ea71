use crate::core::TrailState;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub window: web::Window,
    pub state: Rc<RefCell<TrailState>>,
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_mousemove(&w);
    wire_touchmove(&w);
}

fn passive() -> web::AddEventListenerOptions {
    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(true);
    opts
}

fn wire_mousemove(w: &InputWiring) {
    let state = w.state.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        state
            .borrow_mut()
            .on_move(ev.client_x() as f32, ev.client_y() as f32);
    }) as Box<dyn FnMut(_)>);
    _ = w
        .window
        .add_event_listener_with_callback_and_add_event_listener_options(
            "mousemove",
            closure.as_ref().unchecked_ref(),
            &passive(),
        );
    closure.forget();
}

fn wire_touchmove(w: &InputWiring) {
    let state = w.state.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::TouchEvent| {
        // single-touch only
        if let Some(t) = ev.touches().get(0) {
            state
                .borrow_mut()
                .on_move(t.client_x() as f32, t.client_y() as f32);
        }
    }) as Box<dyn FnMut(_)>);
    _ = w
        .window
        .add_event_listener_with_callback_and_add_event_listener_options(
            "touchmove",
            closure.as_ref().unchecked_ref(),
            &passive(),
        );
    closure.forget();
}

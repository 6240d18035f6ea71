#![cfg(target_arch = "wasm32")]
use crate::core::{FrameClock, ModeCommand, TrailParams, TrailState};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod canvas;
mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod overlay;

thread_local! {
    static FRAME_LOOP: RefCell<Option<frame::FrameLoop>> = const { RefCell::new(None) };
}

fn resize_surface(
    window: &web::Window,
    canvas: &web::HtmlCanvasElement,
    ctx: &mut web::CanvasRenderingContext2d,
    state: &Rc<RefCell<TrailState>>,
) {
    let metrics = dom::viewport_metrics(window);
    // resizing the backing store resets the context transform
    dom::apply_canvas_size(canvas, &metrics);
    state.borrow_mut().resize(ctx, metrics);
    log::debug!(
        "[surface] {}x{} @{} -> {}x{}",
        metrics.width,
        metrics.height,
        metrics.ratio,
        metrics.backing_width,
        metrics.backing_height
    );
}

fn wire_canvas_resize(
    window: &web::Window,
    canvas: &web::HtmlCanvasElement,
    ctx: &web::CanvasRenderingContext2d,
    state: &Rc<RefCell<TrailState>>,
) {
    let window_resize = window.clone();
    let canvas_resize = canvas.clone();
    let mut ctx_resize = ctx.clone();
    let state_resize = state.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        resize_surface(&window_resize, &canvas_resize, &mut ctx_resize, &state_resize);
    }) as Box<dyn FnMut()>);
    _ = window.add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    resize_closure.forget();
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("[init] particle-trails starting");

    if let Err(e) = init() {
        log::error!("[init] {:?}", e);
    }
    Ok(())
}

/// Stop the animation loop. Input handlers stay attached but nothing is drawn.
#[wasm_bindgen]
pub fn stop() {
    FRAME_LOOP.with(|l| {
        if let Some(lp) = l.borrow().as_ref() {
            lp.stop();
        }
    });
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(constants::CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", constants::CANVAS_ID))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let mut ctx = canvas::context_2d(&canvas)?;

    let state = Rc::new(RefCell::new(TrailState::from_entropy(TrailParams::default())));
    log::info!("[init] particle cap={}", state.borrow().store.cap());

    resize_surface(&window, &canvas, &mut ctx, &state);
    wire_canvas_resize(&window, &canvas, &ctx, &state);
    state.borrow().paint_background(&mut ctx);

    let mode = state.borrow_mut().apply_mode(ModeCommand::Set(0));
    overlay::set_mode_label(&document, mode);

    events::wire_global_keydown(&window, state.clone(), document.clone());
    events::wire_input_handlers(events::InputWiring {
        window: window.clone(),
        state: state.clone(),
    });

    let now = window.performance().map(|p| p.now()).unwrap_or(0.0);
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        state,
        ctx,
        clock: FrameClock::new(now),
    }));
    let frame_loop = frame::FrameLoop::start(window, frame_ctx);
    FRAME_LOOP.with(|l| *l.borrow_mut() = Some(frame_loop));
    Ok(())
}

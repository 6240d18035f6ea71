use crate::core::{FrameClock, TrailState};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub state: Rc<RefCell<TrailState>>,
    pub ctx: web::CanvasRenderingContext2d,
    pub clock: FrameClock,
}

impl FrameContext {
    pub fn frame(&mut self, now_ms: f64) {
        let dt = self.clock.tick(now_ms);
        self.state.borrow_mut().frame(&mut self.ctx, dt);
    }
}

type TickClosure = Closure<dyn FnMut(f64)>;

/// Self-rearming `requestAnimationFrame` loop.
pub struct FrameLoop {
    window: web::Window,
    pending: Rc<Cell<Option<i32>>>,
    running: Rc<Cell<bool>>,
    tick: Rc<RefCell<Option<TickClosure>>>,
}

impl FrameLoop {
    pub fn start(window: web::Window, frame_ctx: Rc<RefCell<FrameContext>>) -> Self {
        let pending = Rc::new(Cell::new(None::<i32>));
        let running = Rc::new(Cell::new(true));
        let tick: Rc<RefCell<Option<TickClosure>>> = Rc::new(RefCell::new(None));

        let tick_clone = tick.clone();
        let window_tick = window.clone();
        let pending_tick = pending.clone();
        let running_tick = running.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move |now: f64| {
            pending_tick.set(None);
            if !running_tick.get() {
                return;
            }
            frame_ctx.borrow_mut().frame(now);
            if !running_tick.get() {
                return;
            }
            if let Some(cb) = tick_clone.borrow().as_ref() {
                pending_tick.set(
                    window_tick
                        .request_animation_frame(cb.as_ref().unchecked_ref())
                        .ok(),
                );
            }
        }) as Box<dyn FnMut(f64)>));

        if let Some(cb) = tick.borrow().as_ref() {
            pending.set(
                window
                    .request_animation_frame(cb.as_ref().unchecked_ref())
                    .ok(),
            );
        }
        log::info!("[loop] started");
        Self {
            window,
            pending,
            running,
            tick,
        }
    }

    /// Cancel the pending frame and release the callback. Safe to call twice.
    pub fn stop(&self) {
        if !self.running.replace(false) {
            return;
        }
        if let Some(id) = self.pending.take() {
            _ = self.window.cancel_animation_frame(id);
        }
        // breaks the closure's reference to itself
        self.tick.borrow_mut().take();
        log::info!("[loop] stopped");
    }
}

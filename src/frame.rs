use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

struct LoopState {
    tick: RefCell<Option<Closure<dyn FnMut()>>>,
    pending: Cell<Option<i32>>,
    running: Cell<bool>,
}

impl LoopState {
    fn request(&self) {
        let Some(w) = web::window() else {
            return;
        };
        let guard = self.tick.borrow();
        let Some(tick) = guard.as_ref() else {
            return;
        };
        match w.request_animation_frame(tick.as_ref().unchecked_ref()) {
            Ok(id) => self.pending.set(Some(id)),
            Err(e) => {
                log::error!("[frame] requestAnimationFrame failed: {:?}", e);
                self.running.set(false);
            }
        }
    }
}

/// Self-rescheduling requestAnimationFrame loop with an explicit lifecycle.
///
/// `on_frame` runs once per display refresh while the loop is running.
/// `stop` cancels the pending frame; a stopped loop can be started again.
/// Dropping the loop stops it and releases the callback.
pub struct FrameLoop {
    state: Rc<LoopState>,
}

impl FrameLoop {
    pub fn new(mut on_frame: impl FnMut() + 'static) -> Self {
        let state = Rc::new(LoopState {
            tick: RefCell::new(None),
            pending: Cell::new(None),
            running: Cell::new(false),
        });
        // Weak so the closure does not keep its own owner alive.
        let weak: Weak<LoopState> = Rc::downgrade(&state);
        *state.tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            let Some(state) = weak.upgrade() else {
                return;
            };
            state.pending.set(None);
            if !state.running.get() {
                return;
            }
            on_frame();
            if state.running.get() {
                state.request();
            }
        }) as Box<dyn FnMut()>));
        Self { state }
    }

    pub fn start(&self) {
        if self.state.running.replace(true) {
            return;
        }
        self.state.request();
    }

    pub fn stop(&self) {
        self.state.running.set(false);
        if let Some(id) = self.state.pending.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.state.running.get()
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.stop();
    }
}

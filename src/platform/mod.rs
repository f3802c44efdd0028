//! Browser scheduling and time glue
//!
//! Wraps the host timer primitives behind handles that release their
//! callbacks deterministically: dropping a handle cancels the schedule, so no
//! callback can ever fire against torn-down state.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::Closure;

/// Wall-clock milliseconds since the Unix epoch.
pub fn now_ms() -> f64 {
    js_sys::Date::now()
}

/// A periodic callback bound to `setInterval`.
///
/// Holds its closure alive for exactly as long as the handle lives; dropping
/// it clears the interval.
pub struct Interval {
    id: i32,
    // Kept alive so the JS side has a valid function to call
    _closure: Closure<dyn FnMut()>,
}

impl Interval {
    pub fn new(
        window: &web_sys::Window,
        period_ms: i32,
        callback: impl FnMut() + 'static,
    ) -> Option<Self> {
        let closure = Closure::<dyn FnMut()>::new(callback);
        let id = window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                period_ms,
            )
            .map_err(|e| log::warn!("setInterval failed: {e:?}"))
            .ok()?;
        Some(Self {
            id,
            _closure: closure,
        })
    }
}

impl Drop for Interval {
    fn drop(&mut self) {
        if let Some(window) = web_sys::window() {
            window.clear_interval_with_handle(self.id);
        }
    }
}

/// A requestAnimationFrame recursion that stops rescheduling once its handle
/// is dropped.
pub struct FrameLoop {
    running: Rc<Cell<bool>>,
    pending: Rc<Cell<i32>>,
    closure: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>,
}

impl FrameLoop {
    /// Start the loop. `callback` receives the rAF timestamp (ms).
    pub fn start(mut callback: impl FnMut(f64) + 'static) -> Self {
        let running = Rc::new(Cell::new(true));
        let pending = Rc::new(Cell::new(0));
        let closure = Rc::new(RefCell::new(None::<Closure<dyn FnMut(f64)>>));

        let running_inner = running.clone();
        let pending_inner = pending.clone();
        let closure_inner = closure.clone();
        *closure.borrow_mut() = Some(Closure::new(move |time: f64| {
            if !running_inner.get() {
                return;
            }
            callback(time);
            if let Some(cb) = closure_inner.borrow().as_ref() {
                pending_inner.set(request_frame(cb));
            }
        }));

        if let Some(cb) = closure.borrow().as_ref() {
            pending.set(request_frame(cb));
        }

        Self {
            running,
            pending,
            closure,
        }
    }
}

fn request_frame(closure: &Closure<dyn FnMut(f64)>) -> i32 {
    web_sys::window()
        .and_then(|w| {
            w.request_animation_frame(closure.as_ref().unchecked_ref())
                .ok()
        })
        .unwrap_or(0)
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.running.set(false);
        if let Some(window) = web_sys::window() {
            let _ = window.cancel_animation_frame(self.pending.get());
        }
        // The closure is not executing here (single-threaded event loop), so
        // releasing it now is safe and frees everything it captured.
        let _ = self.closure.borrow_mut().take();
    }
}

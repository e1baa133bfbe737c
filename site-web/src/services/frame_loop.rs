//! `requestAnimationFrame` driver.
//!
//! A [`FrameLoop`] calls its callback once per frame with `performance.now()`
//! and keeps re-registering itself while the callback returns `true`. A
//! stopped loop can be started again; starting a running loop is a no-op.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

type FrameClosure = Closure<dyn FnMut(f64)>;

/// Milliseconds from `performance.now()`; every animation clock in the app uses it.
pub fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|window| window.performance())
        .map(|performance| performance.now())
        .unwrap_or_else(js_sys::Date::now)
}

pub struct FrameLoop {
    inner: Rc<Inner>,
}

struct Inner {
    /// Registered with `requestAnimationFrame`; references itself through `inner`.
    closure: RefCell<Option<FrameClosure>>,
    callback: RefCell<Box<dyn FnMut(f64) -> bool>>,
    running: Cell<bool>,
    frame_id: Cell<i32>,
}

impl FrameLoop {
    pub fn new(callback: impl FnMut(f64) -> bool + 'static) -> Self {
        Self {
            inner: Rc::new(Inner {
                closure: RefCell::new(None),
                callback: RefCell::new(Box::new(callback)),
                running: Cell::new(false),
                frame_id: Cell::new(0),
            }),
        }
    }

    pub fn is_running(&self) -> bool {
        self.inner.running.get()
    }

    pub fn start(&self) {
        if self.inner.running.get() {
            return;
        }
        self.inner.running.set(true);

        if self.inner.closure.borrow().is_none() {
            let weak = Rc::downgrade(&self.inner);
            let closure = Closure::wrap(Box::new(move |_timestamp: f64| {
                let Some(inner) = weak.upgrade() else {
                    return;
                };
                if !inner.running.get() {
                    return;
                }
                let keep_going = {
                    let mut callback = inner.callback.borrow_mut();
                    (*callback)(now_ms())
                };
                if keep_going && inner.running.get() {
                    inner.request();
                } else {
                    inner.running.set(false);
                }
            }) as Box<dyn FnMut(f64)>);
            *self.inner.closure.borrow_mut() = Some(closure);
        }

        self.inner.request();
    }

    pub fn stop(&self) {
        if !self.inner.running.replace(false) {
            return;
        }
        if let Some(window) = web_sys::window() {
            window
                .cancel_animation_frame(self.inner.frame_id.get())
                .ok();
        }
    }
}

impl Inner {
    fn request(&self) {
        let Some(window) = web_sys::window() else {
            self.running.set(false);
            return;
        };
        let closure = self.closure.borrow();
        let Some(closure) = closure.as_ref() else {
            self.running.set(false);
            return;
        };
        match window.request_animation_frame(closure.as_ref().unchecked_ref()) {
            Ok(id) => self.frame_id.set(id),
            Err(e) => {
                log::warn!("requestAnimationFrame failed: {:?}", e);
                self.running.set(false);
            }
        }
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.stop();
    }
}

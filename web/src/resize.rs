//! Debounced `resize` listener
//!
//! A burst of `resize` events keeps pushing a single `setTimeout` back; the
//! callback runs once the viewport has been still for the delay.

use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Window;

/// Installed `resize` listener; dropping it removes the listener and any
/// pending timeout
pub struct ResizeWatcher {
    window: Window,
    on_resize: Closure<dyn FnMut()>,
    _on_settle: Closure<dyn FnMut()>,
    pending: Rc<Cell<Option<i32>>>,
}

impl ResizeWatcher {
    pub fn install(
        window: Window,
        delay_ms: i32,
        mut on_settle: impl FnMut() + 'static,
    ) -> Result<Self, JsValue> {
        let pending = Rc::new(Cell::new(None));

        let settle_pending = Rc::clone(&pending);
        let settle = Closure::wrap(Box::new(move || {
            settle_pending.set(None);
            on_settle();
        }) as Box<dyn FnMut()>);
        let settle_fn: JsValue = settle.as_ref().clone();

        let resize_window = window.clone();
        let resize_pending = Rc::clone(&pending);
        let on_resize = Closure::wrap(Box::new(move || {
            if let Some(handle) = resize_pending.take() {
                resize_window.clear_timeout_with_handle(handle);
            }
            match resize_window.set_timeout_with_callback_and_timeout_and_arguments_0(
                settle_fn.unchecked_ref(),
                delay_ms,
            ) {
                Ok(handle) => resize_pending.set(Some(handle)),
                Err(e) => log::warn!("[POINTER] Failed to schedule re-classification: {:?}", e),
            }
        }) as Box<dyn FnMut()>);

        window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())?;
        log::debug!("[POINTER] Watching resize with {}ms debounce", delay_ms);

        Ok(Self {
            window,
            on_resize,
            _on_settle: settle,
            pending,
        })
    }

    pub fn is_pending(&self) -> bool {
        self.pending.get().is_some()
    }
}

impl Drop for ResizeWatcher {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.take() {
            self.window.clear_timeout_with_handle(handle);
        }
        if let Err(e) = self
            .window
            .remove_event_listener_with_callback("resize", self.on_resize.as_ref().unchecked_ref())
        {
            log::warn!("[POINTER] Failed to remove resize listener: {:?}", e);
        }
    }
}

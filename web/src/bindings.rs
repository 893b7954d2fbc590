//! JavaScript API
//!
//! ```js
//! import init, { PointerAccuracy, initLogging } from './pointer_accuracy_web.js';
//!
//! await init();
//! initLogging();
//! const accuracy = new PointerAccuracy();
//! accuracy.init((mode) => document.body.dataset.pointer = mode);
//! accuracy.watchResize();
//! ```

use crate::capabilities::WebCapabilities;
use crate::resize::ResizeWatcher;
use pointer_accuracy::core::ClassifierSettings;
use pointer_accuracy::input::{PointerClassifier, PointerMode};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;

const BUSY: &str = "PointerAccuracy is notifying its listener; re-entrant call rejected";

#[wasm_bindgen]
extern "C" {
    /// Any JavaScript function taking the new mode
    #[derive(Clone)]
    #[wasm_bindgen(typescript_type = "(mode: 'fine' | 'coarse') => void")]
    pub type ModeListener;

    #[wasm_bindgen(method, catch, js_name = call)]
    fn call(this: &ModeListener, context: &JsValue, mode: &str) -> Result<JsValue, JsValue>;
}

/// Install the panic hook and route log records to the browser console
#[wasm_bindgen(js_name = initLogging)]
pub fn init_logging() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        log::debug!("[POINTER] Console logger already installed");
    }
}

/// Browser-facing pointer accuracy classifier
///
/// Read accessors answer from a snapshot taken on every transition, so a
/// listener may call them while it is being notified. Calls that would
/// re-classify from inside a listener are rejected.
#[wasm_bindgen]
pub struct PointerAccuracy {
    classifier: Rc<RefCell<PointerClassifier<WebCapabilities>>>,
    listener: Rc<RefCell<Option<ModeListener>>>,
    mode: Rc<Cell<Option<PointerMode>>>,
    native: Cell<Option<PointerMode>>,
    watcher: RefCell<Option<ResizeWatcher>>,
}

#[wasm_bindgen]
impl PointerAccuracy {
    /// Classifier for the global `window` using the touch-only heuristic
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<PointerAccuracy, JsValue> {
        Self::build(ClassifierSettings::default())
    }

    /// Classifier configured from a JSON settings document
    #[wasm_bindgen(js_name = withSettings)]
    pub fn with_settings(json: &str) -> Result<PointerAccuracy, JsValue> {
        let settings: ClassifierSettings = serde_json::from_str(json)
            .map_err(|e| JsValue::from_str(&format!("invalid settings: {e}")))?;
        settings
            .validate()
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Self::build(settings)
    }

    /// Query the native pointer media feature and classify
    ///
    /// A listener passed here replaces the current one before the first
    /// classification, so it sees the initial mode. A rejected re-entrant
    /// call leaves the listener untouched.
    pub fn init(&self, listener: Option<ModeListener>) -> Result<String, JsValue> {
        let mut classifier = self.classifier.try_borrow_mut().map_err(|_| busy())?;
        if listener.is_some() {
            self.set_mode_listener(listener);
        }
        let mode = classifier.init();
        self.native.set(classifier.native_mode());
        Ok(mode.to_string())
    }

    /// Re-derive the mode from the current environment
    pub fn classify(&self) -> Result<String, JsValue> {
        classify_shared(&self.classifier).map(|mode| mode.to_string())
    }

    /// Replace the listener; it fires on the next transition only
    #[wasm_bindgen(js_name = setModeListener)]
    pub fn set_mode_listener(&self, listener: Option<ModeListener>) {
        *self.listener.borrow_mut() = listener;
    }

    /// The listener installed by `init` or `setModeListener`, if any
    #[wasm_bindgen(js_name = modeListener)]
    pub fn mode_listener(&self) -> Option<ModeListener> {
        self.listener.borrow().clone()
    }

    /// `"fine"`, `"coarse"`, or `undefined` before `init`
    #[wasm_bindgen(js_name = pointerMode)]
    pub fn pointer_mode(&self) -> Option<String> {
        self.mode.get().map(|mode| mode.to_string())
    }

    /// Result of the native media query from the last `init`
    #[wasm_bindgen(js_name = nativeMode)]
    pub fn native_mode(&self) -> Option<String> {
        self.native.get().map(|mode| mode.to_string())
    }

    #[wasm_bindgen(js_name = hasTouchSupport)]
    pub fn has_touch_support(&self) -> Result<bool, JsValue> {
        let classifier = self.classifier.try_borrow().map_err(|_| busy())?;
        Ok(classifier.has_touch_support())
    }

    #[wasm_bindgen(js_name = isPointerFine)]
    pub fn is_pointer_fine(&self) -> bool {
        self.mode.get() == Some(PointerMode::Fine)
    }

    #[wasm_bindgen(js_name = isPointerCoarse)]
    pub fn is_pointer_coarse(&self) -> bool {
        self.mode.get() == Some(PointerMode::Coarse)
    }

    /// Re-classify after the viewport has stopped resizing
    ///
    /// Defaults to the configured debounce delay. Replaces any earlier watch.
    #[wasm_bindgen(js_name = watchResize)]
    pub fn watch_resize(&self, debounce_ms: Option<u32>) -> Result<(), JsValue> {
        let delay_ms = match debounce_ms {
            Some(ms) => u64::from(ms),
            None => self.classifier.try_borrow().map_err(|_| busy())?.settings().debounce_ms,
        };
        let delay_ms = i32::try_from(delay_ms).unwrap_or(i32::MAX);
        let window = self
            .classifier
            .try_borrow()
            .map_err(|_| busy())?
            .provider()
            .window()
            .clone();

        let classifier = Rc::clone(&self.classifier);
        let watcher = ResizeWatcher::install(window, delay_ms, move || {
            if let Err(e) = classify_shared(&classifier) {
                log::warn!("[POINTER] Resize re-classification skipped: {:?}", e);
            }
        })?;
        *self.watcher.borrow_mut() = Some(watcher);
        Ok(())
    }

    /// Stop re-classifying on resize
    #[wasm_bindgen(js_name = unwatchResize)]
    pub fn unwatch_resize(&self) {
        self.watcher.borrow_mut().take();
    }
}

impl PointerAccuracy {
    fn build(settings: ClassifierSettings) -> Result<PointerAccuracy, JsValue> {
        let capabilities = WebCapabilities::from_global()
            .ok_or_else(|| JsValue::from_str("no global `window` exists"))?;
        let mut classifier = PointerClassifier::with_settings(capabilities, settings);

        let listener: Rc<RefCell<Option<ModeListener>>> = Rc::new(RefCell::new(None));
        let mode = Rc::new(Cell::new(None));

        let slot = Rc::clone(&listener);
        let snapshot = Rc::clone(&mode);
        classifier.set_mode_listener(move |new_mode: PointerMode| {
            snapshot.set(Some(new_mode));
            // Clone out so the listener may replace itself
            let current = slot.borrow().clone();
            if let Some(listener) = current {
                if let Err(e) = listener.call(&JsValue::NULL, new_mode.as_str()) {
                    log::error!("[POINTER] Mode listener threw: {:?}", e);
                }
            }
        });

        Ok(PointerAccuracy {
            classifier: Rc::new(RefCell::new(classifier)),
            listener,
            mode,
            native: Cell::new(None),
            watcher: RefCell::new(None),
        })
    }
}

fn busy() -> JsValue {
    log::warn!("[POINTER] {}", BUSY);
    JsValue::from_str(BUSY)
}

fn classify_shared(
    classifier: &Rc<RefCell<PointerClassifier<WebCapabilities>>>,
) -> Result<PointerMode, JsValue> {
    let mut classifier = classifier.try_borrow_mut().map_err(|_| busy())?;
    Ok(classifier.classify())
}

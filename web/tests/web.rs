//! WASM-specific tests
//!
//! These tests run in a browser environment using wasm-pack test.
//! Run with: cd web && wasm-pack test --headless --chrome

use pointer_accuracy::input::{CapabilityProvider, PointerClassifier, PointerMode};
use pointer_accuracy_web::{ModeListener, PointerAccuracy, ResizeWatcher, WebCapabilities};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn capabilities() -> WebCapabilities {
    WebCapabilities::from_global().expect("Window should exist in browser context")
}

/// Wrap a Rust closure as a JavaScript mode listener
fn js_listener(callback: impl FnMut(String) + 'static) -> ModeListener {
    Closure::wrap(Box::new(callback) as Box<dyn FnMut(String)>)
        .into_js_value()
        .unchecked_into()
}

fn same_listener(a: Option<ModeListener>, b: &ModeListener) -> bool {
    a.is_some_and(|a| JsValue::from(a) == JsValue::from(b.clone()))
}

/// Test console logging works
#[wasm_bindgen_test]
fn test_init_logging_is_idempotent() {
    pointer_accuracy_web::init_logging();
    pointer_accuracy_web::init_logging();
    log::info!("WASM test logging works!");
}

/// A browser answers at most one of the two pointer features first
#[wasm_bindgen_test]
fn test_native_query_is_consistent() {
    let caps = capabilities();
    let mut classifier = PointerClassifier::new(caps.clone());
    classifier.init();
    match classifier.native_mode() {
        Some(PointerMode::Fine) => assert!(caps.matches_pointer(PointerMode::Fine)),
        Some(PointerMode::Coarse) => {
            assert!(!caps.matches_pointer(PointerMode::Fine));
            assert!(caps.matches_pointer(PointerMode::Coarse));
        }
        None => {
            assert!(!caps.matches_pointer(PointerMode::Fine));
            assert!(!caps.matches_pointer(PointerMode::Coarse));
        }
    }
}

#[wasm_bindgen_test]
fn test_malformed_media_query_does_not_match() {
    assert!(!capabilities().media_matches("(pointer:"));
}

#[wasm_bindgen_test]
fn test_viewport_queries_report_values() {
    let caps = capabilities();
    assert!(caps.viewport_width().is_some_and(|width| width >= 0.0));
    assert!(caps.device_pixel_ratio().is_some_and(|dpr| dpr > 0.0));
}

#[wasm_bindgen_test]
fn test_js_api_settles_on_a_mode() {
    let accuracy = PointerAccuracy::new().expect("window is available");
    assert_eq!(accuracy.pointer_mode(), None);
    assert!(!accuracy.is_pointer_fine());
    assert!(!accuracy.is_pointer_coarse());

    let mode = accuracy.init(None).expect("not re-entrant");
    assert!(mode == "fine" || mode == "coarse");
    assert_eq!(accuracy.pointer_mode(), Some(mode.clone()));
    assert!(accuracy.is_pointer_fine() ^ accuracy.is_pointer_coarse());
    assert_eq!(accuracy.classify().expect("not re-entrant"), mode);
}

#[wasm_bindgen_test]
fn test_js_api_rejects_invalid_settings() {
    assert!(PointerAccuracy::with_settings("{ not json").is_err());
    assert!(PointerAccuracy::with_settings(r#"{"dpr_threshold": -1.0}"#).is_err());
    assert!(PointerAccuracy::with_settings(r#"{"resolution_tiers": true}"#).is_ok());
}

#[wasm_bindgen_test]
fn test_watch_and_unwatch_resize() {
    let accuracy = PointerAccuracy::new().expect("window is available");
    accuracy.init(None).expect("not re-entrant");
    accuracy.watch_resize(Some(10)).expect("listener installs");
    accuracy.watch_resize(None).expect("listener replaces");
    accuracy.unwatch_resize();
}

#[wasm_bindgen_test]
fn test_resize_watcher_starts_idle() {
    let window = web_sys::window().expect("Window should exist");
    let watcher = ResizeWatcher::install(window, 50, || {}).expect("listener installs");
    assert!(!watcher.is_pending());
}

// ============================================================================
// JavaScript listener
// ============================================================================

#[wasm_bindgen_test]
fn test_listener_sees_initial_mode_once() {
    let calls = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&calls);
    let accuracy = PointerAccuracy::new().expect("window is available");

    let mode = accuracy
        .init(Some(js_listener(move |mode| sink.borrow_mut().push(mode))))
        .expect("not re-entrant");
    accuracy.classify().expect("not re-entrant");
    accuracy.classify().expect("not re-entrant");

    assert_eq!(*calls.borrow(), vec![mode]);
}

#[wasm_bindgen_test]
fn test_throwing_listener_is_contained() {
    let throwing: ModeListener = Closure::wrap(Box::new(|_mode: String| -> Result<(), JsValue> {
        Err(JsValue::from_str("listener failure"))
    }) as Box<dyn FnMut(String) -> Result<(), JsValue>>)
    .into_js_value()
    .unchecked_into();
    let accuracy = PointerAccuracy::new().expect("window is available");

    let mode = accuracy.init(Some(throwing)).expect("listener error is logged");
    assert_eq!(accuracy.pointer_mode(), Some(mode));
    assert!(accuracy.classify().is_ok());
}

#[derive(Default)]
struct Reentry {
    classify_rejected: bool,
    touch_rejected: bool,
    init_rejected: bool,
    mode_seen: Option<String>,
}

#[wasm_bindgen_test]
fn test_listener_reentry_is_rejected() {
    let accuracy = Rc::new(PointerAccuracy::new().expect("window is available"));
    let seen = Rc::new(RefCell::new(Reentry::default()));

    let inner = Rc::clone(&accuracy);
    let record = Rc::clone(&seen);
    let listener = js_listener(move |_mode| {
        let mut record = record.borrow_mut();
        record.classify_rejected = inner.classify().is_err();
        record.touch_rejected = inner.has_touch_support().is_err();
        record.init_rejected = inner.init(Some(js_listener(|_| {}))).is_err();
        record.mode_seen = inner.pointer_mode();
    });

    let mode = accuracy.init(Some(listener.clone())).expect("outer call succeeds");

    let seen = seen.borrow();
    assert!(seen.classify_rejected);
    assert!(seen.touch_rejected);
    assert!(seen.init_rejected);
    assert_eq!(seen.mode_seen, Some(mode));
    assert!(
        same_listener(accuracy.mode_listener(), &listener),
        "rejected init replaced the listener"
    );
    assert!(accuracy.has_touch_support().is_ok());

    // Break the accuracy -> listener -> accuracy cycle
    accuracy.set_mode_listener(None);
}

#[wasm_bindgen_test]
fn test_listener_may_clear_itself() {
    let accuracy = Rc::new(PointerAccuracy::new().expect("window is available"));
    let inner = Rc::clone(&accuracy);
    let listener = js_listener(move |_mode| inner.set_mode_listener(None));

    accuracy.init(Some(listener)).expect("not re-entrant");

    assert!(accuracy.mode_listener().is_none());
    assert!(accuracy.classify().is_ok());
}

#[wasm_bindgen_test]
fn test_set_mode_listener_does_not_fire() {
    let calls = Rc::new(RefCell::new(0));
    let sink = Rc::clone(&calls);
    let accuracy = PointerAccuracy::new().expect("window is available");
    accuracy.init(None).expect("not re-entrant");

    let listener = js_listener(move |_| *sink.borrow_mut() += 1);
    accuracy.set_mode_listener(Some(listener.clone()));
    accuracy.classify().expect("not re-entrant");

    assert_eq!(*calls.borrow(), 0);
    assert!(same_listener(accuracy.mode_listener(), &listener));
}

//! Browser capability provider
//!
//! Answers the classifier's queries from the global `window`:
//!
//! - `window.matchMedia('(pointer:fine)')` / `('(pointer:coarse)')`
//! - `'ontouchstart' in window` (most browsers)
//! - `'onmsgesturechange' in window` (IE10)
//! - `window.innerWidth`, `window.devicePixelRatio`

use pointer_accuracy::input::{CapabilityProvider, PointerMode};
use wasm_bindgen::prelude::*;
use web_sys::Window;

#[wasm_bindgen(inline_js = "export function has_property(target, name) { return name in target; }")]
extern "C" {
    /// JavaScript `name in target`, which also sees inherited handlers
    fn has_property(target: &JsValue, name: &str) -> bool;
}

/// [`CapabilityProvider`] backed by a browser window
#[derive(Debug, Clone)]
pub struct WebCapabilities {
    window: Window,
}

impl WebCapabilities {
    pub fn new(window: Window) -> Self {
        Self { window }
    }

    /// Provider for the global `window`, `None` outside a browser main thread
    pub fn from_global() -> Option<Self> {
        web_sys::window().map(Self::new)
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    /// Evaluate a media query; unsupported or malformed queries do not match
    pub fn media_matches(&self, query: &str) -> bool {
        match self.window.match_media(query) {
            Ok(Some(list)) => list.matches(),
            Ok(None) => false,
            Err(e) => {
                log::debug!("[POINTER] matchMedia({}) failed: {:?}", query, e);
                false
            }
        }
    }
}

impl CapabilityProvider for WebCapabilities {
    fn matches_pointer(&self, mode: PointerMode) -> bool {
        self.media_matches(mode.media_query())
    }

    fn has_standard_touch(&self) -> bool {
        has_property(self.window.as_ref(), "ontouchstart")
    }

    fn has_legacy_touch(&self) -> bool {
        has_property(self.window.as_ref(), "onmsgesturechange")
    }

    fn viewport_width(&self) -> Option<f64> {
        self.window.inner_width().ok().and_then(|width| width.as_f64())
    }

    fn device_pixel_ratio(&self) -> Option<f64> {
        Some(self.window.device_pixel_ratio())
    }
}

//! Host capability queries
//!
//! [`CapabilityProvider`] is the only way the classifier learns about its
//! environment. Every query is a read; none of them mutate host state.
//!
//! Hosts:
//! - [`FixedCapabilities`] - answers held in a plain struct (tests, CLI, desktop)
//! - `WebCapabilities` in the `pointer-accuracy-web` crate - browser `window`

use super::mode::PointerMode;
use serde::{Deserialize, Serialize};

/// Read-only view of the host's input capabilities
pub trait CapabilityProvider {
    /// Whether the `(pointer: <mode>)` media feature matches
    fn matches_pointer(&self, mode: PointerMode) -> bool;

    /// Standard touch indicator (`ontouchstart` on the window)
    fn has_standard_touch(&self) -> bool;

    /// Legacy vendor touch indicator (`onmsgesturechange`, IE10)
    fn has_legacy_touch(&self) -> bool;

    /// Viewport width in CSS pixels, if the host can report one
    fn viewport_width(&self) -> Option<f64> {
        None
    }

    /// Device pixel ratio, if the host can report one
    fn device_pixel_ratio(&self) -> Option<f64> {
        None
    }

    /// Told about the viewport by hosts that measure it on the provider's
    /// behalf (a Bevy window resize). Providers that query the viewport
    /// themselves ignore it.
    fn observe_viewport(&mut self, _width: f64, _dpr: Option<f64>) {}
}

impl<P: CapabilityProvider + ?Sized> CapabilityProvider for &P {
    fn matches_pointer(&self, mode: PointerMode) -> bool {
        (**self).matches_pointer(mode)
    }

    fn has_standard_touch(&self) -> bool {
        (**self).has_standard_touch()
    }

    fn has_legacy_touch(&self) -> bool {
        (**self).has_legacy_touch()
    }

    fn viewport_width(&self) -> Option<f64> {
        (**self).viewport_width()
    }

    fn device_pixel_ratio(&self) -> Option<f64> {
        (**self).device_pixel_ratio()
    }
}

/// Capability answers fixed at construction time
///
/// The default reports nothing at all, which classifies as fine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FixedCapabilities {
    /// `(pointer: fine)` matches
    pub pointer_fine: bool,
    /// `(pointer: coarse)` matches
    pub pointer_coarse: bool,
    /// `ontouchstart` present
    pub touch: bool,
    /// `onmsgesturechange` present
    pub legacy_touch: bool,
    /// Viewport width in CSS pixels
    pub width: Option<f64>,
    /// Device pixel ratio
    pub dpr: Option<f64>,
}

impl FixedCapabilities {
    /// A touch-only device without pointer media query support
    pub fn touch_only() -> Self {
        Self {
            touch: true,
            ..Self::default()
        }
    }

    /// A host reporting `(pointer: <mode>)` natively
    pub fn native(mode: PointerMode) -> Self {
        Self {
            pointer_fine: mode == PointerMode::Fine,
            pointer_coarse: mode == PointerMode::Coarse,
            ..Self::default()
        }
    }

    pub fn with_width(mut self, width: f64) -> Self {
        self.width = Some(width);
        self
    }

    pub fn with_dpr(mut self, dpr: f64) -> Self {
        self.dpr = Some(dpr);
        self
    }
}

impl CapabilityProvider for FixedCapabilities {
    fn matches_pointer(&self, mode: PointerMode) -> bool {
        match mode {
            PointerMode::Fine => self.pointer_fine,
            PointerMode::Coarse => self.pointer_coarse,
        }
    }

    fn has_standard_touch(&self) -> bool {
        self.touch
    }

    fn has_legacy_touch(&self) -> bool {
        self.legacy_touch
    }

    fn viewport_width(&self) -> Option<f64> {
        self.width
    }

    fn device_pixel_ratio(&self) -> Option<f64> {
        self.dpr
    }

    fn observe_viewport(&mut self, width: f64, dpr: Option<f64>) {
        self.width = Some(width);
        if dpr.is_some() {
            self.dpr = dpr;
        }
    }
}

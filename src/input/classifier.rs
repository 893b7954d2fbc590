//! Pointer accuracy classifier
//!
//! Heuristically resembles the `@media (pointer: coarse)` query for hosts
//! that do not support it, and always resolves to exactly
//! [`PointerMode::Fine`] or [`PointerMode::Coarse`].
//!
//! # Decision order
//!
//! 1. Native `(pointer: fine)`, then `(pointer: coarse)`, recorded once by
//!    [`PointerClassifier::init`]. If either matched it is authoritative.
//! 2. Resolution tier, only when enabled in [`ClassifierSettings`]
//!    (see [`super::screen`]).
//! 3. Touch support: coarse if present, fine otherwise.
//!
//! # Notification
//!
//! Observers are told about transitions only. Re-classifying to the same
//! value is silent. The single-slot listener runs first, then every
//! subscriber in subscription order.
//!
//! ```rust
//! use pointer_accuracy::input::{FixedCapabilities, PointerClassifier, PointerMode};
//!
//! let mut classifier = PointerClassifier::new(FixedCapabilities::touch_only());
//! classifier.init();
//! assert_eq!(classifier.pointer_mode(), Some(PointerMode::Coarse));
//! ```

use super::capability::CapabilityProvider;
use super::mode::PointerMode;
use super::screen::classify_by_resolution;
use crate::core::ClassifierSettings;
use tracing::debug;

type ModeCallback = Box<dyn FnMut(PointerMode)>;

/// Handle returned by [`PointerClassifier::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Classification state for one host environment
///
/// Construct one per environment and pass it by reference to whatever needs
/// the pointer mode.
pub struct PointerClassifier<P> {
    provider: P,
    settings: ClassifierSettings,
    native_mode: Option<PointerMode>,
    current_mode: Option<PointerMode>,
    listener: Option<ModeCallback>,
    subscribers: Vec<(SubscriptionId, ModeCallback)>,
    next_subscription: u64,
}

impl<P: CapabilityProvider> PointerClassifier<P> {
    /// Classifier using the touch-only heuristic
    pub fn new(provider: P) -> Self {
        Self::with_settings(provider, ClassifierSettings::default())
    }

    pub fn with_settings(provider: P, settings: ClassifierSettings) -> Self {
        Self {
            provider,
            settings,
            native_mode: None,
            current_mode: None,
            listener: None,
            subscribers: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Query the native pointer feature and run the first classification
    pub fn init(&mut self) -> PointerMode {
        self.native_mode = if self.provider.matches_pointer(PointerMode::Fine) {
            Some(PointerMode::Fine)
        } else if self.provider.matches_pointer(PointerMode::Coarse) {
            Some(PointerMode::Coarse)
        } else {
            None
        };
        debug!("[POINTER] Native pointer mode: {:?}", self.native_mode);
        self.classify()
    }

    /// Derive the mode from the current environment and store it
    pub fn classify(&mut self) -> PointerMode {
        let mode = self.derive_mode();
        self.set_pointer_mode(mode);
        mode
    }

    fn derive_mode(&self) -> PointerMode {
        if let Some(native) = self.native_mode {
            return native;
        }
        if self.settings.resolution_tiers {
            let tiered = classify_by_resolution(
                self.provider.device_pixel_ratio(),
                self.provider.viewport_width(),
                || self.has_touch_support(),
                &self.settings,
            );
            if let Some(mode) = tiered {
                return mode;
            }
        }
        if self.has_touch_support() {
            PointerMode::Coarse
        } else {
            PointerMode::Fine
        }
    }

    /// Store `mode`, notifying observers if it differs from the stored one
    ///
    /// Returns `true` if the stored mode changed.
    pub fn set_pointer_mode(&mut self, mode: PointerMode) -> bool {
        if self.current_mode == Some(mode) {
            return false;
        }
        self.current_mode = Some(mode);
        debug!("[POINTER] Using pointer mode: {}", mode);
        if let Some(listener) = self.listener.as_mut() {
            listener(mode);
        }
        for (_, subscriber) in self.subscribers.iter_mut() {
            subscriber(mode);
        }
        true
    }

    /// Replace the single-slot listener
    ///
    /// The new listener is not called for the current mode, only for later
    /// transitions. Use [`clear_mode_listener`](Self::clear_mode_listener)
    /// to remove it.
    pub fn set_mode_listener<F>(&mut self, listener: F)
    where
        F: FnMut(PointerMode) + 'static,
    {
        self.listener = Some(Box::new(listener));
    }

    /// Remove the single-slot listener
    pub fn clear_mode_listener(&mut self) {
        self.listener = None;
    }

    /// Register an additional observer of mode transitions
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(PointerMode) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Returns `false` if `id` was not subscribed
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub_id, _)| *sub_id != id);
        self.subscribers.len() != before
    }

    pub fn pointer_mode(&self) -> Option<PointerMode> {
        self.current_mode
    }

    /// Result of the native media query, `None` if neither feature matched
    /// or [`init`](Self::init) has not run
    pub fn native_mode(&self) -> Option<PointerMode> {
        self.native_mode
    }

    pub fn has_touch_support(&self) -> bool {
        self.provider.has_standard_touch() || self.provider.has_legacy_touch()
    }

    pub fn is_pointer_fine(&self) -> bool {
        self.current_mode == Some(PointerMode::Fine)
    }

    pub fn is_pointer_coarse(&self) -> bool {
        self.current_mode == Some(PointerMode::Coarse)
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Mutable access for hosts whose environment is updated in place
    ///
    /// Changes take effect on the next [`classify`](Self::classify). The
    /// native mode is only re-read by [`init`](Self::init).
    pub fn provider_mut(&mut self) -> &mut P {
        &mut self.provider
    }

    pub fn settings(&self) -> &ClassifierSettings {
        &self.settings
    }
}

impl<P: std::fmt::Debug> std::fmt::Debug for PointerClassifier<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PointerClassifier")
            .field("provider", &self.provider)
            .field("settings", &self.settings)
            .field("native_mode", &self.native_mode)
            .field("current_mode", &self.current_mode)
            .field("has_listener", &self.listener.is_some())
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

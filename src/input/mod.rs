//! Input module - pointer accuracy classification
//!
//! # Architecture
//!
//! - `mode` - [`PointerMode`], the two-valued result
//! - `capability` - [`CapabilityProvider`], the host queries, and the
//!   [`FixedCapabilities`] host
//! - `classifier` - [`PointerClassifier`], the decision procedure and its
//!   observers
//! - `screen` - optional screen-size / pixel-density tier
//! - `debounce` - [`ResizeDebounce`] for collapsing change-event bursts
//! - `pointer` - Bevy plugin (feature `bevy`)

pub mod capability;
pub mod classifier;
pub mod debounce;
pub mod mode;
#[cfg(feature = "bevy")]
pub mod pointer;
pub mod screen;

// Re-export commonly used items
pub use capability::{CapabilityProvider, FixedCapabilities};
pub use classifier::{PointerClassifier, SubscriptionId};
pub use debounce::ResizeDebounce;
pub use mode::{ParsePointerModeError, PointerMode};
#[cfg(feature = "bevy")]
pub use pointer::{CurrentPointerMode, PointerAccuracyPlugin, PointerModeChanged};
pub use screen::ScreenClass;

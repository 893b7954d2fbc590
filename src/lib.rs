//! Heuristic pointer accuracy, `coarse` or `fine`, for a device or user agent.
//!
//! Rendering that depends on how precise the pointing device is can use the
//! Media Queries Level 4 `(pointer: coarse)` feature, but not every host
//! answers it. [`input::PointerClassifier`] resembles that query
//! heuristically and never reports `none`.

pub mod core;
pub mod input;

pub use crate::core::{ClassifierSettings, CoreError, CoreResult};
pub use input::{CapabilityProvider, FixedCapabilities, PointerClassifier, PointerMode};

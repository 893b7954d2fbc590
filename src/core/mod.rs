//! Core module - settings and error types shared by every host
//!
//! - [`ClassifierSettings`] - heuristic tunables, persisted as JSON
//! - [`CoreError`] / [`CoreResult`] - failures of the settings layer

pub mod error;
pub mod settings;

// Re-export commonly used items
pub use error::{CoreError, CoreResult};
pub use settings::{load_or_default, load_settings, save_settings, settings_path, ClassifierSettings};

//! Browser host for `pointer-accuracy`
//!
//! - `capabilities` - [`WebCapabilities`], queries answered by `window`
//! - `resize` - debounced `resize` listener
//! - `bindings` - the `PointerAccuracy` JavaScript class

pub mod bindings;
pub mod capabilities;
pub mod resize;

pub use bindings::{init_logging, ModeListener, PointerAccuracy};
pub use capabilities::WebCapabilities;
pub use resize::ResizeWatcher;

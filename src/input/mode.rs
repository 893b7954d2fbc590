//! Pointer precision values
//!
//! The two values mirror the CSS Media Queries Level 4 `pointer` feature
//! keywords. The `none` keyword is deliberately absent: a classification
//! always resolves to one of these two.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Accuracy of the primary pointing device
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointerMode {
    /// Mouse, trackpad, stylus
    Fine,
    /// Finger on a touch screen
    Coarse,
}

impl PointerMode {
    /// Keyword used in media queries and on the JavaScript side
    pub fn as_str(self) -> &'static str {
        match self {
            PointerMode::Fine => "fine",
            PointerMode::Coarse => "coarse",
        }
    }

    /// The `(pointer: ...)` media query that tests for this mode
    pub fn media_query(self) -> &'static str {
        match self {
            PointerMode::Fine => "(pointer:fine)",
            PointerMode::Coarse => "(pointer:coarse)",
        }
    }
}

impl fmt::Display for PointerMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing anything other than `fine` or `coarse`
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown pointer mode '{0}', expected 'fine' or 'coarse'")]
pub struct ParsePointerModeError(pub String);

impl FromStr for PointerMode {
    type Err = ParsePointerModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fine" => Ok(PointerMode::Fine),
            "coarse" => Ok(PointerMode::Coarse),
            other => Err(ParsePointerModeError(other.to_string())),
        }
    }
}

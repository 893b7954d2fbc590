//! Screen-size and pixel-density tier
//!
//! Optional heuristic tier that sits between the native media query and the
//! touch fallback. Enabled with [`ClassifierSettings::resolution_tiers`].
//!
//! | Signal | Result |
//! |---|---|
//! | DPR >= `dpr_threshold` | Coarse |
//! | Small screen | Coarse |
//! | Medium screen | touch support decides |
//! | Large screen | Fine |
//! | width unknown or non-finite | touch support decides |

use super::mode::PointerMode;
use crate::core::ClassifierSettings;

/// Viewport size bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenClass {
    Small,
    Medium,
    Large,
}

impl ScreenClass {
    /// Bucket a CSS-pixel viewport width using the configured breakpoints
    pub fn from_width(width: f64, settings: &ClassifierSettings) -> Self {
        if width <= f64::from(settings.small_max_width) {
            ScreenClass::Small
        } else if width <= f64::from(settings.medium_max_width) {
            ScreenClass::Medium
        } else {
            ScreenClass::Large
        }
    }
}

/// High-density screens are, in practice, small and medium touch devices
pub fn is_high_density(dpr: Option<f64>, settings: &ClassifierSettings) -> bool {
    dpr.is_some_and(|ratio| ratio >= settings.dpr_threshold)
}

/// Decide from density and viewport size
///
/// Returns `None` when this tier has no opinion and the touch fallback must
/// decide. A non-finite width counts as unknown. `has_touch` is only
/// consulted for medium screens.
pub fn classify_by_resolution(
    dpr: Option<f64>,
    width: Option<f64>,
    has_touch: impl FnOnce() -> bool,
    settings: &ClassifierSettings,
) -> Option<PointerMode> {
    if is_high_density(dpr, settings) {
        return Some(PointerMode::Coarse);
    }
    let width = width.filter(|w| w.is_finite())?;
    match ScreenClass::from_width(width, settings) {
        ScreenClass::Small => Some(PointerMode::Coarse),
        ScreenClass::Medium if has_touch() => Some(PointerMode::Coarse),
        ScreenClass::Medium => Some(PointerMode::Fine),
        ScreenClass::Large => Some(PointerMode::Fine),
    }
}

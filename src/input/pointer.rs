//! Bevy integration for the pointer accuracy classifier
//!
//! [`PointerAccuracyPlugin`] owns one [`PointerClassifier`] per app and keeps
//! [`CurrentPointerMode`] in sync with it.
//!
//! # Systems
//!
//! - `Startup`: [`init_pointer_mode_system`] runs the native query and the
//!   first classification
//! - `Update`: [`debounce_resize_system`] collapses bursts of
//!   `WindowResized` messages and re-classifies once they settle
//!
//! # Messages
//!
//! [`PointerModeChanged`] is written only when the mode actually changes.
//!
//! ```rust,ignore
//! App::new()
//!     .add_plugins(DefaultPlugins)
//!     .add_plugins(PointerAccuracyPlugin::new(FixedCapabilities::default()))
//!     .add_systems(Update, resize_hit_targets);
//!
//! fn resize_hit_targets(mut changes: MessageReader<PointerModeChanged>) {
//!     for change in changes.read() {
//!         info!("pointer is now {}", change.mode);
//!     }
//! }
//! ```

use super::capability::CapabilityProvider;
use super::classifier::PointerClassifier;
use super::debounce::ResizeDebounce;
use super::mode::PointerMode;
use crate::core::ClassifierSettings;
use bevy::prelude::*;
use bevy::window::WindowResized;
use tracing::{debug, info, trace};

/// Mode the classifier last settled on, `None` until startup has run
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CurrentPointerMode(pub Option<PointerMode>);

impl CurrentPointerMode {
    pub fn is_coarse(&self) -> bool {
        self.0 == Some(PointerMode::Coarse)
    }

    pub fn is_fine(&self) -> bool {
        self.0 == Some(PointerMode::Fine)
    }
}

/// Written once per transition to a new pointer mode
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerModeChanged {
    pub mode: PointerMode,
}

/// Resize quiescence timer driven by frame time
#[derive(Resource, Debug)]
pub struct PointerResizeDebounce(pub ResizeDebounce);

/// Plugin that classifies the pointer at startup and after window resizes
///
/// The classifier is stored as a non-send resource so that listeners
/// registered on it do not need to be `Send`. Access it with
/// `NonSendMut<PointerClassifier<P>>`.
pub struct PointerAccuracyPlugin<P> {
    provider: P,
    settings: ClassifierSettings,
}

impl<P> PointerAccuracyPlugin<P> {
    pub fn new(provider: P) -> Self {
        Self::with_settings(provider, ClassifierSettings::default())
    }

    pub fn with_settings(provider: P, settings: ClassifierSettings) -> Self {
        Self { provider, settings }
    }
}

impl<P> Plugin for PointerAccuracyPlugin<P>
where
    P: CapabilityProvider + Clone + Send + Sync + 'static,
{
    fn build(&self, app: &mut App) {
        let classifier =
            PointerClassifier::with_settings(self.provider.clone(), self.settings.clone());

        app.insert_non_send_resource(classifier);
        app.init_resource::<CurrentPointerMode>();
        app.insert_resource(PointerResizeDebounce(ResizeDebounce::new(
            self.settings.debounce(),
        )));

        // WindowPlugin registers this already; headless apps need it too
        app.add_message::<WindowResized>();
        app.add_message::<PointerModeChanged>();

        app.add_systems(Startup, init_pointer_mode_system::<P>);
        app.add_systems(Update, debounce_resize_system::<P>);
    }
}

/// Copy the classifier's mode into the ECS, announcing transitions
fn publish_mode(
    mode: Option<PointerMode>,
    current: &mut CurrentPointerMode,
    changed: &mut MessageWriter<PointerModeChanged>,
) {
    if current.0 == mode {
        return;
    }
    current.0 = mode;
    if let Some(mode) = mode {
        info!("[POINTER] Pointer mode is now {}", mode);
        changed.write(PointerModeChanged { mode });
    }
}

/// Run the native query and the first classification
pub fn init_pointer_mode_system<P: CapabilityProvider + 'static>(
    mut classifier: NonSendMut<PointerClassifier<P>>,
    mut current: ResMut<CurrentPointerMode>,
    mut changed: MessageWriter<PointerModeChanged>,
) {
    let mode = classifier.init();
    debug!(
        "[POINTER] Initial classification {} (native: {:?})",
        mode,
        classifier.native_mode()
    );
    publish_mode(classifier.pointer_mode(), &mut current, &mut changed);
}

/// Re-classify once window resizes have been quiet for the debounce delay
///
/// The latest resize also updates the provider's idea of the viewport, which
/// only matters when the resolution tier is enabled.
pub fn debounce_resize_system<P: CapabilityProvider + 'static>(
    mut resized: MessageReader<WindowResized>,
    windows: Query<&Window>,
    time: Res<Time>,
    mut debounce: ResMut<PointerResizeDebounce>,
    mut classifier: NonSendMut<PointerClassifier<P>>,
    mut current: ResMut<CurrentPointerMode>,
    mut changed: MessageWriter<PointerModeChanged>,
) {
    if let Some(last) = resized.read().last() {
        let dpr = windows
            .get(last.window)
            .ok()
            .map(|window| f64::from(window.scale_factor()));
        classifier
            .provider_mut()
            .observe_viewport(f64::from(last.width), dpr);
        debounce.0.note_change();
        trace!("[POINTER] Resize to {}px, re-arming debounce", last.width);
        return;
    }

    if debounce.0.tick(time.delta()) {
        classifier.classify();
        publish_mode(classifier.pointer_mode(), &mut current, &mut changed);
    }
}

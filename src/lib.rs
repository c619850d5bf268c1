//! Gesture Control - hand landmarks in, debounced desktop actions out.
//!
//! This is the main library crate. It classifies pinch, clap and selection
//! gestures from per-frame hand landmarks, smooths the continuous outputs and
//! debounces the discrete ones, and emits abstract cursor, window and image
//! viewer actions for an external executor.

pub mod actions;
pub mod capture;
pub mod config;
pub mod engine;
pub mod gesture;
pub mod processing;
pub mod session;
pub mod viewer;

pub use actions::{Action, ActionSink, MouseButton};
pub use capture::{FrameObservation, HandObservation, Handedness, InputEvent, Point2D};
pub use config::{ConfigError, GestureConfig};
pub use engine::{Mode, ModeStateMachine};
pub use session::{GestureSession, SessionError, SessionSummary};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing/logging
///
/// `RUST_LOG` overrides the default filter.
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gesture_control_lib=debug,gesture_control=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Gesture Control v{}", env!("CARGO_PKG_VERSION"));
}

// crates/covidmap-core/src/engine.rs

//! Capabilities the map lifecycle needs from its environment.
//!
//! [`MapView`](crate::map_view::MapView) talks to the mapping library only
//! through [`MapEngine`] and [`MapSession`], and to the user only through
//! [`Notifier`]. The browser implementation lives in `covidmap-wasm`; tests
//! use recording stand-ins.

use crate::config::MapOptions;
use crate::error::EngineError;
use crate::marker::MarkerDescriptor;
use serde::{Deserialize, Serialize};

/// Controls a session can carry. Only the pan/zoom control is used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ControlKind {
    Navigation,
}

/// Corner a control is docked to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ControlPosition {
    TopLeft,
    #[default]
    TopRight,
    BottomLeft,
    BottomRight,
}

impl ControlPosition {
    pub fn as_str(self) -> &'static str {
        match self {
            ControlPosition::TopLeft => "top-left",
            ControlPosition::TopRight => "top-right",
            ControlPosition::BottomLeft => "bottom-left",
            ControlPosition::BottomRight => "bottom-right",
        }
    }
}

/// Factory for live map sessions.
pub trait MapEngine {
    /// Where a session is drawn (a DOM element in the browser).
    type Mount;
    type Session: MapSession;

    /// Builds a session on `mount` with the given credential and initial view.
    fn create_session(
        &self,
        mount: &Self::Mount,
        credential: &str,
        options: &MapOptions,
    ) -> Result<Self::Session, EngineError>;
}

/// One live map instance.
///
/// [`remove`](MapSession::remove) consumes the session, so a session can be
/// released at most once.
pub trait MapSession {
    fn add_control(&mut self, kind: ControlKind, position: ControlPosition) -> Result<(), EngineError>;

    fn add_marker(&mut self, marker: &MarkerDescriptor) -> Result<(), EngineError>;

    /// Releases every resource the session holds.
    fn remove(self);
}

/// Severity of a user notification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Default,
    Destructive,
}

/// A transient, user-facing message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    pub description: String,
    #[serde(rename = "variant")]
    pub severity: Severity,
}

impl Notification {
    /// The message raised when a map session could not be created.
    pub fn session_init_failed() -> Self {
        Self {
            title: "Error".to_string(),
            description: "Failed to initialize the map. Please check your API key.".to_string(),
            severity: Severity::Destructive,
        }
    }
}

/// Displays notifications to the user.
pub trait Notifier {
    fn notify(&self, notification: Notification);
}

impl<F> Notifier for F
where
    F: Fn(Notification),
{
    fn notify(&self, notification: Notification) {
        self(notification)
    }
}

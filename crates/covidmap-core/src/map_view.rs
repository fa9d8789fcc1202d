// crates/covidmap-core/src/map_view.rs

//! # Map View
//!
//! Owns the lifecycle of the single embedded map session.
//!
//! A session exists only while both a mount point and a non-empty credential
//! are present. Whenever the credential changes, or the view is unmounted or
//! dropped, the current session is released *before* anything new is built,
//! so two sessions never overlap.
//!
//! ```text
//!   Uncredentialed ──credential──▶ AwaitingMount ──mount──▶ Active
//!        ▲                                                  │
//!        └────── engine error (ClearCredential) ◀── Failed ◀┘ (creation failed)
//! ```

use crate::config::{DashboardConfig, FailurePolicy, MapOptions};
use crate::dataset::Dataset;
use crate::engine::{ControlKind, MapEngine, MapSession, Notification, Notifier};
use crate::error::MapError;
use crate::marker::{build_markers, MarkerDescriptor};
use crate::model::CountryStats;
use crate::registry::LocationRegistry;
use log::{debug, error};
use serde::Serialize;

/// Lifecycle state of a [`MapView`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MapState {
    /// No credential yet; the prompt is shown.
    Uncredentialed,
    /// A credential is set but there is nowhere to draw yet.
    AwaitingMount,
    Active,
    /// The last creation attempt failed.
    Failed,
}

/// The blocking overlay asking for a map credential.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CredentialPrompt {
    pub title: &'static str,
    pub placeholder: &'static str,
    pub help_text: &'static str,
    pub help_link_label: &'static str,
    pub help_url: &'static str,
    /// Current input value (only non-empty when a rejected credential is retained).
    pub value: String,
    /// Why the previous attempt failed, if it did.
    pub error: Option<String>,
}

impl CredentialPrompt {
    fn new(value: String, error: Option<String>) -> Self {
        Self {
            title: "Enter Mapbox Token",
            placeholder: "Enter your Mapbox public token",
            help_text: "Get your token from",
            help_link_label: "Mapbox",
            help_url: "https://account.mapbox.com/access-tokens/",
            value,
            error,
        }
    }
}

/// What the map area shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MapArea {
    Prompt(CredentialPrompt),
    /// The mount point, drawn by the engine.
    Map,
}

/// Manages one map session tied to a mount point and a credential.
pub struct MapView<E: MapEngine, N: Notifier> {
    engine: E,
    notifier: N,
    options: MapOptions,
    policy: FailurePolicy,
    stats: Vec<CountryStats>,
    registry: LocationRegistry,
    credential: String,
    mount: Option<E::Mount>,
    session: Option<E::Session>,
    placed_markers: usize,
    last_error: Option<MapError>,
}

impl<E: MapEngine, N: Notifier> MapView<E, N> {
    /// A view over the embedded dataset, configured from `config`.
    ///
    /// Nothing is created until [`mount`](Self::mount) is called.
    pub fn new(engine: E, notifier: N, config: &DashboardConfig) -> Self {
        let dataset = Dataset::embedded();
        Self {
            engine,
            notifier,
            options: config.map.clone(),
            policy: config.failure_policy,
            stats: dataset.stats.clone(),
            registry: dataset.registry.clone(),
            credential: config.initial_credential().to_string(),
            mount: None,
            session: None,
            placed_markers: 0,
            last_error: None,
        }
    }

    /// Replaces the stats list and registry used for markers. Takes effect at
    /// the next session creation.
    pub fn with_dataset(mut self, stats: Vec<CountryStats>, registry: LocationRegistry) -> Self {
        self.stats = stats;
        self.registry = registry;
        self
    }

    /// Attaches the mount point, creating a session if a credential is set.
    /// A previously attached mount point is released first.
    pub fn mount(&mut self, mount: E::Mount) {
        self.teardown();
        self.mount = Some(mount);
        self.initialize();
    }

    /// Releases the session and hands the mount point back.
    pub fn unmount(&mut self) -> Option<E::Mount> {
        self.teardown();
        self.mount.take()
    }

    /// Sets the credential. An unchanged value is ignored; otherwise the
    /// current session is released and a new one is built if the value is
    /// non-empty and the view is mounted.
    pub fn set_credential(&mut self, value: &str) {
        let value = value.trim();
        if value == self.credential {
            return;
        }
        self.teardown();
        self.credential = value.to_string();
        self.last_error = None;
        self.initialize();
    }

    /// Tries the current credential again after a failure.
    pub fn retry(&mut self) {
        if self.state() != MapState::Failed {
            return;
        }
        self.last_error = None;
        self.initialize();
    }

    pub fn state(&self) -> MapState {
        if self.session.is_some() {
            MapState::Active
        } else if self.last_error.is_some() {
            MapState::Failed
        } else if self.credential.is_empty() {
            MapState::Uncredentialed
        } else {
            MapState::AwaitingMount
        }
    }

    pub fn credential(&self) -> &str {
        &self.credential
    }

    pub fn has_session(&self) -> bool {
        self.session.is_some()
    }

    pub fn is_mounted(&self) -> bool {
        self.mount.is_some()
    }

    /// Markers placed on the live session (0 without one).
    pub fn placed_markers(&self) -> usize {
        self.placed_markers
    }

    pub fn last_error(&self) -> Option<&MapError> {
        self.last_error.as_ref()
    }

    pub fn options(&self) -> &MapOptions {
        &self.options
    }

    /// Markers a session would be populated with.
    pub fn marker_descriptors(&self) -> Vec<MarkerDescriptor> {
        build_markers(&self.stats, &self.registry)
    }

    /// The map-area content for the current state.
    pub fn render(&self) -> MapArea {
        match self.state() {
            MapState::Uncredentialed => MapArea::Prompt(CredentialPrompt::new(String::new(), None)),
            MapState::Failed => MapArea::Prompt(CredentialPrompt::new(
                self.credential.clone(),
                self.last_error.as_ref().map(|_| Notification::session_init_failed().description),
            )),
            MapState::AwaitingMount | MapState::Active => MapArea::Map,
        }
    }

    fn initialize(&mut self) {
        if self.credential.is_empty() || self.session.is_some() {
            return;
        }
        let Some(mount) = self.mount.as_ref() else {
            return;
        };

        match Self::create_session(
            &self.engine,
            mount,
            &self.credential,
            &self.options,
            &self.stats,
            &self.registry,
        ) {
            Ok((session, placed)) => {
                debug!("map session created with {placed} markers");
                self.session = Some(session);
                self.placed_markers = placed;
            }
            Err(err) => {
                error!("{err}");
                self.notifier.notify(Notification::session_init_failed());
                self.last_error = Some(err);
                if self.policy == FailurePolicy::ClearCredential {
                    self.credential.clear();
                }
            }
        }
    }

    /// Builds and populates a session. A session that fails midway is
    /// released before the error is returned.
    fn create_session(
        engine: &E,
        mount: &E::Mount,
        credential: &str,
        options: &MapOptions,
        stats: &[CountryStats],
        registry: &LocationRegistry,
    ) -> Result<(E::Session, usize), MapError> {
        let mut session = engine.create_session(mount, credential, options)?;

        let populated = session
            .add_control(ControlKind::Navigation, options.control_position)
            .and_then(|()| {
                let markers = build_markers(stats, registry);
                for marker in &markers {
                    session.add_marker(marker)?;
                }
                Ok(markers.len())
            });

        match populated {
            Ok(placed) => Ok((session, placed)),
            Err(err) => {
                session.remove();
                Err(err.into())
            }
        }
    }

    fn teardown(&mut self) {
        if let Some(session) = self.session.take() {
            debug!("releasing map session");
            session.remove();
        }
        self.placed_markers = 0;
    }
}

impl<E: MapEngine, N: Notifier> Drop for MapView<E, N> {
    fn drop(&mut self) {
        self.teardown();
    }
}

// crates/covidmap-core/src/lib.rs

//! # covidmap-core
//!
//! Host-independent core of the African COVID-19 dashboard: the static
//! country registry and statistics, the map-session lifecycle ([`MapView`]),
//! the collapsible [`SummaryPanel`] and the [`Page`] that composes them.
//!
//! The mapping engine and the notification surface are reached only through
//! the [`MapEngine`] / [`MapSession`] / [`Notifier`] traits, so the whole
//! lifecycle runs the same way in the browser (see `covidmap-wasm`) and
//! against a recording stand-in in tests.
//!
//! ```rust
//! use covidmap_core::prelude::*;
//!
//! let markers = build_markers(dataset::stats(), LocationRegistry::africa());
//! assert_eq!(markers.len(), 30);
//! assert!(markers[0].popup_html.contains("4,000,000"));
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod config;
pub mod dataset; // Embedded stats + coordinates
pub mod engine; // Capability traits for the mapping engine
pub mod error;
pub mod format;
pub mod map_view;
pub mod marker;
pub mod model;
pub mod page;
pub mod panel;
pub mod prelude;
pub mod registry;

// Re-exports
pub use crate::config::{DashboardConfig, FailurePolicy, MapOptions, Projection};
pub use crate::engine::{
    ControlKind, ControlPosition, MapEngine, MapSession, Notification, Notifier, Severity,
};
pub use crate::error::{CoreError, EngineError, MapError, Result};
pub use crate::map_view::{CredentialPrompt, MapArea, MapState, MapView};
pub use crate::marker::{build_markers, MarkerDescriptor, MarkerStyle};
pub use crate::model::{CountryStats, GeoPoint, Totals};
pub use crate::page::{Page, PageView, SidebarState};
pub use crate::panel::{PanelView, SummaryCard, SummaryPanel, ToggleIcon, Tone};
pub use crate::registry::LocationRegistry;

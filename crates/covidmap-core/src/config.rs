// crates/covidmap-core/src/config.rs

//! Dashboard configuration.
//!
//! The access credential is only ever taken from configuration (environment,
//! a JSON file, or the JS object handed to the wasm bindings). There is no
//! built-in default token: without one the map shows its credential prompt.

use crate::engine::ControlPosition;
use crate::error::{CoreError, Result};
use crate::model::GeoPoint;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable holding the initial map credential.
pub const ENV_ACCESS_TOKEN: &str = "COVIDMAP_ACCESS_TOKEN";
/// Environment variable overriding [`MapOptions::style`].
pub const ENV_STYLE: &str = "COVIDMAP_STYLE";

pub const DEFAULT_STYLE: &str = "mapbox://styles/mapbox/light-v11";
pub const DEFAULT_ZOOM: f64 = 3.0;
/// Roughly the middle of Africa.
pub const DEFAULT_CENTER: GeoPoint = GeoPoint::from_trusted(20.0, 0.0);

/// Map projection requested from the engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Projection {
    /// Flat projection.
    #[default]
    Mercator,
    Globe,
}

impl Projection {
    pub fn as_str(self) -> &'static str {
        match self {
            Projection::Mercator => "mercator",
            Projection::Globe => "globe",
        }
    }
}

/// What the map does with a credential the engine rejected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailurePolicy {
    /// Reset the credential to empty so the prompt asks again.
    #[default]
    ClearCredential,
    /// Keep the rejected credential; the user may retry it.
    RetainCredential,
}

/// Initial view and style of a map session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapOptions {
    pub style: String,
    pub center: GeoPoint,
    pub zoom: f64,
    pub projection: Projection,
    pub control_position: ControlPosition,
}

impl Default for MapOptions {
    fn default() -> Self {
        Self {
            style: DEFAULT_STYLE.to_string(),
            center: DEFAULT_CENTER,
            zoom: DEFAULT_ZOOM,
            projection: Projection::Mercator,
            control_position: ControlPosition::TopRight,
        }
    }
}

/// Top-level configuration for a dashboard instance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Initial credential. `None` or empty means "ask the user".
    pub access_token: Option<String>,
    pub map: MapOptions,
    pub failure_policy: FailurePolicy,
}

impl DashboardConfig {
    /// Reads a JSON config file. Missing fields take their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        let cfg: Self = serde_json::from_str(&text)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Defaults overlaid with [`ENV_ACCESS_TOKEN`] and [`ENV_STYLE`].
    pub fn from_env() -> Result<Self> {
        Self::default().with_env_overrides(|key| std::env::var(key).ok())
    }

    /// Applies environment-style overrides through a lookup function so
    /// callers (and tests) control where values come from.
    pub fn with_env_overrides<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(token) = lookup(ENV_ACCESS_TOKEN) {
            self.access_token = Some(token);
        }
        if let Some(style) = lookup(ENV_STYLE) {
            self.map.style = style;
        }
        self.validate()?;
        Ok(self)
    }

    /// The initial credential with surrounding whitespace removed; empty when unset.
    pub fn initial_credential(&self) -> &str {
        self.access_token.as_deref().map(str::trim).unwrap_or("")
    }

    pub fn validate(&self) -> Result<()> {
        if self.map.style.trim().is_empty() {
            return Err(CoreError::Config("map style must not be empty".into()));
        }
        if !(0.0..=24.0).contains(&self.map.zoom) {
            return Err(CoreError::Config(format!(
                "zoom {} outside 0..=24",
                self.map.zoom
            )));
        }
        Ok(())
    }
}

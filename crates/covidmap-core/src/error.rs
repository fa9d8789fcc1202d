// crates/covidmap-core/src/error.rs

//! Error types for the dashboard core.

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Errors raised while building or validating static data and configuration.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Invalid coordinate: longitude {lng}, latitude {lat}")]
    InvalidCoordinate { lng: f64, lat: f64 },

    #[error("Dataset error: {0}")]
    Dataset(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors reported by a [`MapEngine`](crate::engine::MapEngine) implementation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// The engine refused to build a session, usually because the credential
    /// was not accepted.
    #[error("engine rejected the request: {0}")]
    Rejected(String),

    /// The engine itself is missing or not loaded in this environment.
    #[error("engine unavailable: {0}")]
    Unavailable(String),
}

/// Errors raised by the map-session lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MapError {
    #[error("Error initializing map: {0}")]
    SessionInit(#[from] EngineError),
}

//! covidmap-rs
//!
//! Workspace host crate. Re-exports [`covidmap_core`] so the dashboard core
//! can be used as `covidmap_rs::...` from tooling at the workspace root.
pub use covidmap_core::*;

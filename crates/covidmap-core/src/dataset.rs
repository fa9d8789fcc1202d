// crates/covidmap-core/src/dataset.rs

//! # Embedded Dataset
//!
//! The dashboard's sample figures and country coordinates ship inside the
//! binary as `data/africa.json` and are parsed once per process.

use crate::error::Result;
use crate::model::CountryStats;
use crate::registry::LocationRegistry;
use once_cell::sync::Lazy;
use serde::Deserialize;

static AFRICA_JSON: &str = include_str!("../data/africa.json");

static DATASET: Lazy<Dataset> =
    Lazy::new(|| Dataset::from_json(AFRICA_JSON).expect("embedded dataset is valid"));

/// Raw coordinate row as it appears in the JSON file.
#[derive(Debug, Deserialize)]
pub(crate) struct LocationRaw {
    pub country: String,
    pub lng: f64,
    pub lat: f64,
}

#[derive(Debug, Deserialize)]
struct DatasetRaw {
    locations: Vec<LocationRaw>,
    stats: Vec<CountryStats>,
}

/// Parsed dataset: the ordered stats list plus its coordinate registry.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub stats: Vec<CountryStats>,
    pub registry: LocationRegistry,
}

impl Dataset {
    /// Parses a dataset document. Coordinates are range-checked.
    pub fn from_json(src: &str) -> Result<Self> {
        let raw: DatasetRaw = serde_json::from_str(src)?;
        let registry = LocationRegistry::from_raw(raw.locations)?;
        Ok(Self {
            stats: raw.stats,
            registry,
        })
    }

    /// The dataset compiled into this crate.
    pub fn embedded() -> &'static Dataset {
        &DATASET
    }
}

/// The embedded stats list, in display order.
pub fn stats() -> &'static [CountryStats] {
    &DATASET.stats
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_dataset_parses() {
        let ds = Dataset::from_json(AFRICA_JSON).expect("parse");
        assert_eq!(ds.stats.len(), 30);
        assert_eq!(ds.registry.len(), 30);
    }

    #[test]
    fn every_stats_row_has_a_coordinate() {
        let ds = Dataset::embedded();
        for s in &ds.stats {
            assert!(
                ds.registry.coordinate(&s.country).is_some(),
                "no coordinate for {}",
                s.country
            );
        }
    }

    #[test]
    fn order_follows_the_file() {
        let names: Vec<_> = stats().iter().take(3).map(|s| s.country.as_str()).collect();
        assert_eq!(names, ["South Africa", "Egypt", "Morocco"]);
        assert_eq!(stats().last().map(|s| s.country.as_str()), Some("Djibouti"));
    }

    #[test]
    fn out_of_range_coordinate_is_rejected() {
        let src = r#"{"locations":[{"country":"Nowhere","lng":200.0,"lat":0.0}],"stats":[]}"#;
        assert!(Dataset::from_json(src).is_err());
    }

    #[test]
    fn malformed_document_is_a_dataset_error() {
        let err = Dataset::from_json("{").unwrap_err();
        assert!(matches!(err, crate::error::CoreError::Dataset(_)));
    }
}

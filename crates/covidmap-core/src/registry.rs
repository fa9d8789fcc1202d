// crates/covidmap-core/src/registry.rs
use crate::dataset::{Dataset, LocationRaw};
use crate::error::Result;
use crate::format::fold_key;
use crate::model::GeoPoint;
use std::collections::HashMap;

/// Fixed mapping from country name to the point its marker is placed at.
///
/// Lookups by [`coordinate`](Self::coordinate) are exact; a stats record whose
/// country is not registered simply gets no marker.
#[derive(Debug, Clone, Default)]
pub struct LocationRegistry {
    entries: Vec<(String, GeoPoint)>,
    index: HashMap<String, usize>,
    folded: HashMap<String, usize>,
}

impl LocationRegistry {
    /// The registry of the embedded African dataset.
    pub fn africa() -> &'static LocationRegistry {
        &Dataset::embedded().registry
    }

    /// Builds a registry from already validated points. A repeated name
    /// replaces the earlier point.
    pub fn from_points<I, S>(points: I) -> Self
    where
        I: IntoIterator<Item = (S, GeoPoint)>,
        S: Into<String>,
    {
        let mut reg = Self::default();
        for (name, point) in points {
            reg.insert(name.into(), point);
        }
        reg
    }

    pub(crate) fn from_raw(rows: Vec<LocationRaw>) -> Result<Self> {
        let mut reg = Self::default();
        for row in rows {
            let point = GeoPoint::new(row.lng, row.lat)?;
            reg.insert(row.country, point);
        }
        Ok(reg)
    }

    fn insert(&mut self, name: String, point: GeoPoint) {
        if let Some(&i) = self.index.get(&name) {
            self.entries[i].1 = point;
            return;
        }
        let i = self.entries.len();
        self.folded.insert(fold_key(&name), i);
        self.index.insert(name.clone(), i);
        self.entries.push((name, point));
    }

    /// Exact-name lookup used for marker placement.
    pub fn coordinate(&self, country: &str) -> Option<GeoPoint> {
        self.index.get(country).map(|&i| self.entries[i].1)
    }

    /// Case- and accent-insensitive lookup. Returns the canonical name.
    pub fn find(&self, query: &str) -> Option<(&str, GeoPoint)> {
        self.folded
            .get(&fold_key(query))
            .map(|&i| (self.entries[i].0.as_str(), self.entries[i].1))
    }

    pub fn contains(&self, country: &str) -> bool {
        self.index.contains_key(country)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, GeoPoint)> + '_ {
        self.entries.iter().map(|(n, p)| (n.as_str(), *p))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pt(lng: f64, lat: f64) -> GeoPoint {
        GeoPoint::new(lng, lat).unwrap()
    }

    #[test]
    fn africa_has_known_points() {
        let reg = LocationRegistry::africa();
        assert_eq!(reg.coordinate("Kenya"), Some(pt(37.9062, -1.2864)));
        assert_eq!(reg.coordinate("Djibouti"), Some(pt(42.5903, 11.8251)));
        assert_eq!(reg.coordinate("Atlantis"), None);
    }

    #[test]
    fn exact_lookup_is_case_sensitive() {
        let reg = LocationRegistry::africa();
        assert!(reg.contains("Sierra Leone"));
        assert!(!reg.contains("sierra leone"));
    }

    #[test]
    fn folded_lookup_returns_canonical_name() {
        let reg = LocationRegistry::from_points([("Côte d'Ivoire", pt(-5.5, 7.5))]);
        let (name, p) = reg.find("COTE D'IVOIRE").expect("folded match");
        assert_eq!(name, "Côte d'Ivoire");
        assert_eq!(p, pt(-5.5, 7.5));
    }

    #[test]
    fn repeated_name_replaces_point() {
        let reg = LocationRegistry::from_points([("A", pt(1.0, 1.0)), ("B", pt(2.0, 2.0)), ("A", pt(3.0, 3.0))]);
        assert_eq!(reg.len(), 2);
        assert_eq!(reg.coordinate("A"), Some(pt(3.0, 3.0)));
        let names: Vec<_> = reg.iter().map(|(n, _)| n).collect();
        assert_eq!(names, ["A", "B"]);
    }
}

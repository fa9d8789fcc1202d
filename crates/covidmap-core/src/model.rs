// crates/covidmap-core/src/model.rs
use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};

/// A geographic point in `(longitude, latitude)` order, the order the
/// mapping engine expects.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "[f64; 2]", into = "[f64; 2]")]
pub struct GeoPoint {
    lng: f64,
    lat: f64,
}

impl GeoPoint {
    /// Builds a point, rejecting longitudes outside `[-180, 180]` and
    /// latitudes outside `[-90, 90]`.
    pub fn new(lng: f64, lat: f64) -> Result<Self> {
        if !(-180.0..=180.0).contains(&lng) || !(-90.0..=90.0).contains(&lat) {
            return Err(CoreError::InvalidCoordinate { lng, lat });
        }
        Ok(Self { lng, lat })
    }

    /// For compile-time constants already known to be in range.
    pub(crate) const fn from_trusted(lng: f64, lat: f64) -> Self {
        Self { lng, lat }
    }

    #[inline]
    pub fn lng(&self) -> f64 {
        self.lng
    }

    #[inline]
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// `[lng, lat]`, the array form used by the map engine.
    #[inline]
    pub fn to_array(self) -> [f64; 2] {
        [self.lng, self.lat]
    }
}

impl TryFrom<[f64; 2]> for GeoPoint {
    type Error = CoreError;

    fn try_from([lng, lat]: [f64; 2]) -> Result<Self> {
        Self::new(lng, lat)
    }
}

impl From<GeoPoint> for [f64; 2] {
    fn from(p: GeoPoint) -> Self {
        p.to_array()
    }
}

/// COVID-19 figures for one country.
///
/// Records are trusted literals: `cases ≈ deaths + recovered + active` is
/// expected but never checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryStats {
    pub country: String,
    pub cases: u64,
    pub deaths: u64,
    pub recovered: u64,
    pub active: u64,
}

impl CountryStats {
    pub fn new(country: impl Into<String>, cases: u64, deaths: u64, recovered: u64, active: u64) -> Self {
        Self {
            country: country.into(),
            cases,
            deaths,
            recovered,
            active,
        }
    }
}

/// Sums over a list of [`CountryStats`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Totals {
    pub countries: usize,
    pub cases: u64,
    pub deaths: u64,
    pub recovered: u64,
    pub active: u64,
}

impl Totals {
    pub fn from_stats(stats: &[CountryStats]) -> Self {
        stats.iter().fold(Self::default(), |mut acc, s| {
            acc.countries += 1;
            acc.cases += s.cases;
            acc.deaths += s.deaths;
            acc.recovered += s.recovered;
            acc.active += s.active;
            acc
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn geopoint_rejects_out_of_range() {
        assert!(GeoPoint::new(180.0, 90.0).is_ok());
        assert!(GeoPoint::new(-180.0, -90.0).is_ok());
        assert!(matches!(
            GeoPoint::new(180.5, 0.0),
            Err(CoreError::InvalidCoordinate { .. })
        ));
        assert!(GeoPoint::new(0.0, -90.1).is_err());
        assert!(GeoPoint::new(f64::NAN, 0.0).is_err());
    }

    #[test]
    fn geopoint_array_is_lng_lat() {
        let p = GeoPoint::new(25.0339, -29.0).unwrap();
        assert_eq!(p.to_array(), [25.0339, -29.0]);
    }

    #[test]
    fn geopoint_serde_uses_arrays_and_validates() {
        let p: GeoPoint = serde_json::from_str("[20.0, 0.0]").unwrap();
        assert_eq!(p, GeoPoint::new(20.0, 0.0).unwrap());
        assert_eq!(serde_json::to_string(&p).unwrap(), "[20.0,0.0]");
        assert!(serde_json::from_str::<GeoPoint>("[0.0, 95.0]").is_err());
    }

    #[test]
    fn totals_sum_every_field() {
        let stats = vec![
            CountryStats::new("A", 10, 1, 8, 1),
            CountryStats::new("B", 20, 2, 15, 3),
        ];
        let t = Totals::from_stats(&stats);
        assert_eq!(t.countries, 2);
        assert_eq!(t.cases, 30);
        assert_eq!(t.deaths, 3);
        assert_eq!(t.recovered, 23);
        assert_eq!(t.active, 4);
    }

    #[test]
    fn totals_of_nothing_is_zero() {
        assert_eq!(Totals::from_stats(&[]), Totals::default());
    }
}

// crates/covidmap-core/src/marker.rs
use crate::format::{escape_html, FormatThousands};
use crate::model::{CountryStats, GeoPoint};
use crate::registry::LocationRegistry;
use serde::{Deserialize, Serialize};

/// Pixel offset between a marker and its popup.
pub const POPUP_OFFSET_PX: u32 = 25;

/// Visual style of a country marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkerStyle {
    pub class_name: String,
    pub fill: String,
    pub diameter_px: u32,
    pub cursor: String,
}

impl Default for MarkerStyle {
    fn default() -> Self {
        Self {
            class_name: "marker".to_string(),
            fill: "#ea384c".to_string(),
            diameter_px: 15,
            cursor: "pointer".to_string(),
        }
    }
}

impl MarkerStyle {
    /// Inline CSS for the marker element: a filled circle.
    pub fn css(&self) -> String {
        format!(
            "background-color: {}; width: {d}px; height: {d}px; border-radius: 50%; cursor: {};",
            self.fill,
            self.cursor,
            d = self.diameter_px,
        )
    }
}

/// Everything the engine needs to place one marker with its popup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerDescriptor {
    pub country: String,
    pub position: GeoPoint,
    pub style: MarkerStyle,
    pub popup_html: String,
    pub popup_offset: u32,
}

impl MarkerDescriptor {
    pub fn for_country(stats: &CountryStats, position: GeoPoint) -> Self {
        Self {
            country: stats.country.clone(),
            position,
            style: MarkerStyle::default(),
            popup_html: popup_html(stats),
            popup_offset: POPUP_OFFSET_PX,
        }
    }
}

/// Popup body: the country as a heading, then the four figures.
pub fn popup_html(stats: &CountryStats) -> String {
    format!(
        r#"<div class="text-sm">
  <h3 class="font-bold mb-2">{}</h3>
  <p class="mb-1">Total Cases: {}</p>
  <p class="mb-1">Active Cases: {}</p>
  <p class="mb-1">Recovered: {}</p>
  <p>Deaths: {}</p>
</div>"#,
        escape_html(&stats.country),
        stats.cases.thousands(),
        stats.active.thousands(),
        stats.recovered.thousands(),
        stats.deaths.thousands(),
    )
}

/// One descriptor per stats entry whose country is registered, in stats order.
/// Unregistered countries are skipped without error.
pub fn build_markers(stats: &[CountryStats], registry: &LocationRegistry) -> Vec<MarkerDescriptor> {
    stats
        .iter()
        .filter_map(|s| {
            registry
                .coordinate(&s.country)
                .map(|p| MarkerDescriptor::for_country(s, p))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset;

    #[test]
    fn popup_formats_with_separators() {
        let s = CountryStats::new("South Africa", 4_000_000, 100_000, 3_800_000, 100_000);
        let html = popup_html(&s);
        assert!(html.contains("<h3 class=\"font-bold mb-2\">South Africa</h3>"));
        assert!(html.contains("Total Cases: 4,000,000"));
        assert!(html.contains("Active Cases: 100,000"));
        assert!(html.contains("Recovered: 3,800,000"));
        assert!(html.contains("Deaths: 100,000"));
    }

    #[test]
    fn popup_lists_figures_in_fixed_order() {
        let s = CountryStats::new("X", 4, 1, 2, 3);
        let html = popup_html(&s);
        let pos = |needle: &str| html.find(needle).unwrap();
        assert!(pos("Total Cases") < pos("Active Cases"));
        assert!(pos("Active Cases") < pos("Recovered"));
        assert!(pos("Recovered") < pos("Deaths"));
    }

    #[test]
    fn popup_escapes_country_name() {
        let s = CountryStats::new("<script>", 1, 0, 1, 0);
        assert!(popup_html(&s).contains("&lt;script&gt;"));
    }

    #[test]
    fn one_marker_per_registered_country() {
        let reg = LocationRegistry::africa();
        let markers = build_markers(dataset::stats(), reg);
        assert_eq!(markers.len(), dataset::stats().len());
        for (m, s) in markers.iter().zip(dataset::stats()) {
            assert_eq!(m.country, s.country);
            assert_eq!(Some(m.position), reg.coordinate(&s.country));
        }
    }

    #[test]
    fn unknown_country_yields_no_marker() {
        let stats = vec![
            CountryStats::new("Atlantis", 10, 1, 8, 1),
            CountryStats::new("Kenya", 1_200_000, 32_000, 1_100_000, 80_000),
        ];
        let markers = build_markers(&stats, LocationRegistry::africa());
        assert_eq!(markers.len(), 1);
        assert_eq!(markers[0].country, "Kenya");
    }

    #[test]
    fn default_style_is_red_circle() {
        let css = MarkerStyle::default().css();
        assert!(css.contains("background-color: #ea384c"));
        assert!(css.contains("width: 15px"));
        assert!(css.contains("height: 15px"));
        assert!(css.contains("border-radius: 50%"));
        assert!(css.contains("cursor: pointer"));
    }
}

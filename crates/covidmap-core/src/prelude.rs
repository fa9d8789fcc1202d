// crates/covidmap-core/src/prelude.rs
pub use crate::config::{DashboardConfig, FailurePolicy, MapOptions, Projection};
pub use crate::dataset;
pub use crate::engine::{
    ControlKind, ControlPosition, MapEngine, MapSession, Notification, Notifier, Severity,
};
pub use crate::error::{CoreError, EngineError, MapError};
pub use crate::format::{format_thousands, FormatThousands};
pub use crate::map_view::{MapArea, MapState, MapView};
pub use crate::marker::{build_markers, MarkerDescriptor};
pub use crate::model::{CountryStats, GeoPoint, Totals};
pub use crate::page::Page;
pub use crate::panel::SummaryPanel;
pub use crate::registry::LocationRegistry;

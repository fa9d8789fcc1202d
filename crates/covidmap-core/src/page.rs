// crates/covidmap-core/src/page.rs
use crate::engine::{MapEngine, Notifier};
use crate::map_view::{MapArea, MapView};
use crate::panel::{PanelView, SummaryPanel};
use serde::Serialize;

/// Open/closed flag of the sidebar. Starts open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SidebarState(bool);

impl Default for SidebarState {
    fn default() -> Self {
        Self(true)
    }
}

impl SidebarState {
    pub fn is_open(self) -> bool {
        self.0
    }

    pub fn toggle(&mut self) {
        self.0 = !self.0;
    }
}

/// Everything the page draws.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageView {
    pub panel: PanelView,
    pub map: MapArea,
}

/// The dashboard page: sidebar and map side by side.
pub struct Page<E: MapEngine, N: Notifier> {
    sidebar: SidebarState,
    map: MapView<E, N>,
}

impl<E: MapEngine, N: Notifier> Page<E, N> {
    pub fn new(map: MapView<E, N>) -> Self {
        Self {
            sidebar: SidebarState::default(),
            map,
        }
    }

    pub fn sidebar_open(&self) -> bool {
        self.sidebar.is_open()
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar.toggle();
    }

    /// The panel, wired to flip this page's sidebar flag and nothing else.
    pub fn summary_panel(&mut self) -> SummaryPanel<impl FnMut() + '_> {
        let open = self.sidebar.is_open();
        let sidebar = &mut self.sidebar;
        SummaryPanel::new(open, move || sidebar.toggle())
    }

    pub fn map(&self) -> &MapView<E, N> {
        &self.map
    }

    pub fn map_mut(&mut self) -> &mut MapView<E, N> {
        &mut self.map
    }

    pub fn render(&mut self) -> PageView {
        let panel = self.summary_panel().view();
        PageView {
            panel,
            map: self.map.render(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DashboardConfig, MapOptions};
    use crate::engine::{ControlKind, ControlPosition, MapSession, Notification};
    use crate::error::EngineError;
    use crate::marker::MarkerDescriptor;

    struct NoEngine;
    struct NoSession;

    impl MapSession for NoSession {
        fn add_control(&mut self, _: ControlKind, _: ControlPosition) -> Result<(), EngineError> {
            Ok(())
        }
        fn add_marker(&mut self, _: &MarkerDescriptor) -> Result<(), EngineError> {
            Ok(())
        }
        fn remove(self) {}
    }

    impl MapEngine for NoEngine {
        type Mount = ();
        type Session = NoSession;
        fn create_session(&self, _: &(), _: &str, _: &MapOptions) -> Result<NoSession, EngineError> {
            Ok(NoSession)
        }
    }

    fn page() -> Page<NoEngine, fn(Notification)> {
        let notify: fn(Notification) = |_| {};
        Page::new(MapView::new(NoEngine, notify, &DashboardConfig::default()))
    }

    #[test]
    fn sidebar_starts_open() {
        assert!(page().sidebar_open());
    }

    #[test]
    fn double_toggle_returns_to_open() {
        let mut page = page();
        page.summary_panel().click();
        assert!(!page.sidebar_open());
        page.summary_panel().click();
        assert!(page.sidebar_open());
    }

    #[test]
    fn toggling_leaves_map_alone() {
        let mut page = page();
        page.map_mut().mount(());
        page.map_mut().set_credential("pk.test");
        assert!(page.map().has_session());
        page.toggle_sidebar();
        assert!(page.map().has_session());
        assert_eq!(page.map().credential(), "pk.test");
    }

    #[test]
    fn render_reflects_both_children() {
        let mut page = page();
        let view = page.render();
        assert!(view.panel.open);
        assert!(matches!(view.map, MapArea::Prompt(_)));
        page.toggle_sidebar();
        assert!(!page.render().panel.open);
    }
}

// crates/covidmap-core/src/panel.rs
use serde::Serialize;

/// Width of the sidebar in CSS pixels.
pub const PANEL_WIDTH_PX: u32 = 300;

/// Colour family of a summary card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Blue,
    Green,
    Red,
}

impl Tone {
    pub fn as_str(self) -> &'static str {
        match self {
            Tone::Blue => "blue",
            Tone::Green => "green",
            Tone::Red => "red",
        }
    }
}

/// One headline figure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryCard {
    pub label: &'static str,
    pub value: &'static str,
    pub tone: Tone,
}

/// The fixed aggregate figures shown in the sidebar.
pub const SUMMARY_CARDS: [SummaryCard; 3] = [
    SummaryCard {
        label: "Total Cases (Africa)",
        value: "9.5M",
        tone: Tone::Blue,
    },
    SummaryCard {
        label: "Recovered",
        value: "8.9M",
        tone: Tone::Green,
    },
    SummaryCard {
        label: "Deaths",
        value: "270K",
        tone: Tone::Red,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ToggleIcon {
    ChevronLeft,
    ChevronRight,
}

impl ToggleIcon {
    /// Text glyph for hosts without an icon set.
    pub fn glyph(self) -> &'static str {
        match self {
            ToggleIcon::ChevronLeft => "\u{2039}",
            ToggleIcon::ChevronRight => "\u{203A}",
        }
    }
}

/// Render description of the panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PanelView {
    pub open: bool,
    pub heading: &'static str,
    pub width_px: u32,
    /// Slide-in / slide-out transform class.
    pub transform_class: &'static str,
    pub toggle_icon: ToggleIcon,
    pub cards: Vec<SummaryCard>,
}

/// Collapsible sidebar: a function of `open` and a toggle callback.
pub struct SummaryPanel<F: FnMut()> {
    open: bool,
    on_toggle: F,
}

impl<F: FnMut()> SummaryPanel<F> {
    pub fn new(open: bool, on_toggle: F) -> Self {
        Self { open, on_toggle }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// The toggle button was pressed.
    pub fn click(&mut self) {
        (self.on_toggle)();
    }

    pub fn view(&self) -> PanelView {
        PanelView {
            open: self.open,
            heading: "COVID-19 Statistics",
            width_px: PANEL_WIDTH_PX,
            transform_class: if self.open {
                "translate-x-0"
            } else {
                "-translate-x-full"
            },
            toggle_icon: if self.open {
                ToggleIcon::ChevronLeft
            } else {
                ToggleIcon::ChevronRight
            },
            cards: SUMMARY_CARDS.to_vec(),
        }
    }
}

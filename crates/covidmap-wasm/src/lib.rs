//! covidmap-wasm — browser dashboard for covidmap-core
//!
//! Mounts the COVID-19 Africa dashboard (collapsible statistics sidebar plus
//! a Mapbox GL map with one marker per country) into a page element.
//!
//! What it provides
//! ----------------
//! - Automatic initialization on module load (panic hook + console logging)
//! - A `Dashboard` class driving the page: credential prompt, sidebar
//!   toggle, map session lifecycle
//! - Dataset helpers: `country_count()`, `countries()`, `markers()`
//!
//! Quick start (browser)
//! ---------------------
//! ```javascript
//! // <script src="https://api.mapbox.com/mapbox-gl-js/v3.0.0/mapbox-gl.js"></script>
//! import init, { Dashboard } from 'covidmap-wasm';
//!
//! async function main() {
//!   await init();
//!   const dashboard = new Dashboard('app', { access_token: null }, (n) => {
//!     console.warn(n.title, n.description, n.variant);
//!   });
//!   // The prompt is shown until a token is entered or passed in:
//!   dashboard.set_credential('pk.your-token');
//! }
//! main();
//! ```
//!
//! Notes
//! -----
//! - The Mapbox GL JS script must be loaded first; without it session
//!   creation fails and the error notification is raised.
//! - No token is compiled in. Pass it in the config object, or let the user
//!   type it into the prompt.
mod dom;
mod mapbox;
mod notify;

use std::cell::RefCell;
use std::rc::Rc;

use covidmap_core::prelude::*;
use serde::Serialize;
use serde_wasm_bindgen::to_value;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::dom::Shell;
use crate::mapbox::MapboxEngine;
pub use crate::notify::JsNotifier;

type DashboardPage = Page<MapboxEngine, JsNotifier>;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    notify::init_logging(log::LevelFilter::Info);
    log::info!("covidmap: {} countries in dataset", country_count());
}

fn to_js_err(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/* --------------------------------------------------------------------------
   Dashboard
-------------------------------------------------------------------------- */

/// The mounted dashboard page.
#[wasm_bindgen]
pub struct Dashboard {
    page: Rc<RefCell<DashboardPage>>,
    shell: Rc<Shell>,
    _listeners: Vec<Closure<dyn FnMut(web_sys::Event)>>,
}

fn rerender(page: &RefCell<DashboardPage>, shell: &Shell) -> Result<(), JsValue> {
    let view = page.borrow_mut().render();
    shell.render_panel(&view.panel)?;
    shell.render_map_area(&view.map)
}

fn report(result: Result<(), JsValue>) {
    if let Err(err) = result {
        log::error!("render failed: {err:?}");
    }
}

#[wasm_bindgen]
impl Dashboard {
    /// Builds the page inside the element with id `root_id`.
    ///
    /// `config` is a `DashboardConfig`-shaped object (or `undefined`);
    /// `notify` receives `{ title, description, variant }` on map errors; it
    /// must not call back into the dashboard synchronously.
    #[wasm_bindgen(constructor)]
    pub fn new(
        root_id: &str,
        config: JsValue,
        notify: Option<js_sys::Function>,
    ) -> Result<Dashboard, JsValue> {
        let config: DashboardConfig = if config.is_undefined() || config.is_null() {
            DashboardConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config)?
        };
        config.validate().map_err(to_js_err)?;

        let doc = dom::document()?;
        let root = doc
            .get_element_by_id(root_id)
            .ok_or_else(|| JsValue::from_str(&format!("no element with id '{root_id}'")))?
            .dyn_into::<web_sys::HtmlElement>()
            .map_err(JsValue::from)?;
        let shell = Rc::new(Shell::build(&doc, &root)?);

        let view = MapView::new(MapboxEngine, JsNotifier::new(notify), &config);
        let page = Rc::new(RefCell::new(Page::new(view)));

        let mut listeners = Vec::with_capacity(2);

        let toggle = {
            let page = Rc::clone(&page);
            let shell = Rc::clone(&shell);
            Closure::<dyn FnMut(web_sys::Event)>::new(move |_event: web_sys::Event| {
                page.borrow_mut().summary_panel().click();
                report(rerender(&page, &shell));
            })
        };
        shell
            .toggle
            .add_event_listener_with_callback("click", toggle.as_ref().unchecked_ref())?;
        listeners.push(toggle);

        let credential = {
            let page = Rc::clone(&page);
            let shell = Rc::clone(&shell);
            Closure::<dyn FnMut(web_sys::Event)>::new(move |_event: web_sys::Event| {
                let value = shell.input.value();
                page.borrow_mut().map_mut().set_credential(&value);
                report(rerender(&page, &shell));
            })
        };
        shell
            .input
            .add_event_listener_with_callback("change", credential.as_ref().unchecked_ref())?;
        listeners.push(credential);

        page.borrow_mut()
            .map_mut()
            .mount(shell.map_container.clone());
        rerender(&page, &shell)?;

        Ok(Dashboard {
            page,
            shell,
            _listeners: listeners,
        })
    }

    /// Sets the map credential, as if typed into the prompt.
    pub fn set_credential(&self, value: &str) -> Result<(), JsValue> {
        self.page.borrow_mut().map_mut().set_credential(value);
        rerender(&self.page, &self.shell)
    }

    /// Retries a retained credential after a failure.
    pub fn retry(&self) -> Result<(), JsValue> {
        self.page.borrow_mut().map_mut().retry();
        rerender(&self.page, &self.shell)
    }

    pub fn toggle_sidebar(&self) -> Result<(), JsValue> {
        self.page.borrow_mut().toggle_sidebar();
        rerender(&self.page, &self.shell)
    }

    pub fn sidebar_open(&self) -> bool {
        self.page.borrow().sidebar_open()
    }

    pub fn has_session(&self) -> bool {
        self.page.borrow().map().has_session()
    }

    /// `uncredentialed`, `awaiting_mount`, `active` or `failed`.
    pub fn state(&self) -> Result<JsValue, JsValue> {
        Ok(to_value(&self.page.borrow().map().state())?)
    }

    /// Releases the map session. The page stays in place showing the prompt area.
    pub fn destroy(&self) {
        self.page.borrow_mut().map_mut().unmount();
    }
}

/* --------------------------------------------------------------------------
   Dataset helpers
-------------------------------------------------------------------------- */

#[derive(Serialize)]
struct CountryRow<'a> {
    country: &'a str,
    cases: u64,
    deaths: u64,
    recovered: u64,
    active: u64,
    position: Option<GeoPoint>,
}

impl<'a> CountryRow<'a> {
    fn new(stats: &'a CountryStats, position: Option<GeoPoint>) -> Self {
        Self {
            country: &stats.country,
            cases: stats.cases,
            deaths: stats.deaths,
            recovered: stats.recovered,
            active: stats.active,
            position,
        }
    }
}

#[wasm_bindgen]
pub fn country_count() -> usize {
    dataset::stats().len()
}

/// All stats rows with their registered position (or `null`).
#[wasm_bindgen]
pub fn countries() -> Result<JsValue, JsValue> {
    let registry = LocationRegistry::africa();
    let rows: Vec<_> = dataset::stats()
        .iter()
        .map(|stats| CountryRow::new(stats, registry.coordinate(&stats.country)))
        .collect();
    Ok(to_value(&rows)?)
}

/// The marker descriptors a session is populated with.
#[wasm_bindgen]
pub fn markers() -> Result<JsValue, JsValue> {
    let markers = build_markers(dataset::stats(), LocationRegistry::africa());
    Ok(to_value(&markers)?)
}

//! Mapbox GL JS implementation of the map capability.
//!
//! Expects the `mapboxgl` global from the Mapbox GL JS script to be loaded
//! before the dashboard starts.

use covidmap_core::prelude::*;
use js_sys::{Array, Object, Reflect};
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

#[wasm_bindgen(js_namespace = mapboxgl)]
extern "C" {
    #[wasm_bindgen(js_name = Map)]
    type JsMap;

    #[wasm_bindgen(constructor, js_class = "Map", catch)]
    fn new(options: &JsValue) -> Result<JsMap, JsValue>;

    #[wasm_bindgen(method, js_name = addControl, catch)]
    fn add_control(this: &JsMap, control: &JsValue, position: &str) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(method)]
    fn remove(this: &JsMap);

    #[wasm_bindgen(js_name = NavigationControl)]
    type JsNavigationControl;

    #[wasm_bindgen(constructor, js_class = "NavigationControl")]
    fn new() -> JsNavigationControl;

    #[wasm_bindgen(js_name = Marker)]
    type JsMarker;

    #[wasm_bindgen(constructor, js_class = "Marker")]
    fn new(element: &web_sys::HtmlElement) -> JsMarker;

    #[wasm_bindgen(method, js_name = setLngLat)]
    fn set_lng_lat(this: &JsMarker, lng_lat: &Array) -> JsMarker;

    #[wasm_bindgen(method, js_name = setPopup)]
    fn set_popup(this: &JsMarker, popup: &JsPopup) -> JsMarker;

    #[wasm_bindgen(method, js_name = addTo, catch)]
    fn add_to(this: &JsMarker, map: &JsMap) -> Result<JsMarker, JsValue>;

    #[wasm_bindgen(js_name = Popup)]
    type JsPopup;

    #[wasm_bindgen(constructor, js_class = "Popup")]
    fn new(options: &JsValue) -> JsPopup;

    #[wasm_bindgen(method, js_name = setHTML)]
    fn set_html(this: &JsPopup, html: &str) -> JsPopup;
}

/// Options object for `new mapboxgl.Map(..)`. The container is set separately.
#[derive(Serialize)]
struct MapInit<'a> {
    style: &'a str,
    center: [f64; 2],
    zoom: f64,
    projection: &'a str,
}

fn js_error(err: JsValue) -> EngineError {
    EngineError::Rejected(
        err.as_string()
            .or_else(|| err.dyn_ref::<js_sys::Error>().map(|e| String::from(e.message())))
            .unwrap_or_else(|| format!("{err:?}")),
    )
}

/// Engine backed by the `mapboxgl` global.
#[derive(Default)]
pub struct MapboxEngine;

impl MapboxEngine {
    fn namespace() -> Result<Object, EngineError> {
        Reflect::get(&js_sys::global(), &"mapboxgl".into())
            .ok()
            .and_then(|v| v.dyn_into::<Object>().ok())
            .ok_or_else(|| EngineError::Unavailable("mapboxgl is not loaded".into()))
    }
}

impl MapEngine for MapboxEngine {
    type Mount = web_sys::HtmlElement;
    type Session = MapboxSession;

    fn create_session(
        &self,
        mount: &web_sys::HtmlElement,
        credential: &str,
        options: &MapOptions,
    ) -> Result<MapboxSession, EngineError> {
        let ns = Self::namespace()?;
        Reflect::set(&ns, &"accessToken".into(), &credential.into()).map_err(js_error)?;

        let init = MapInit {
            style: &options.style,
            center: options.center.to_array(),
            zoom: options.zoom,
            projection: options.projection.as_str(),
        };
        let init = serde_wasm_bindgen::to_value(&init)
            .map_err(|e| EngineError::Rejected(e.to_string()))?;
        Reflect::set(&init, &"container".into(), mount).map_err(js_error)?;

        let map = JsMap::new(&init).map_err(js_error)?;
        Ok(MapboxSession { map })
    }
}

/// A live `mapboxgl.Map`.
pub struct MapboxSession {
    map: JsMap,
}

impl MapSession for MapboxSession {
    fn add_control(&mut self, kind: ControlKind, position: ControlPosition) -> Result<(), EngineError> {
        let control: JsValue = match kind {
            ControlKind::Navigation => JsNavigationControl::new().into(),
        };
        self.map
            .add_control(&control, position.as_str())
            .map(drop)
            .map_err(js_error)
    }

    fn add_marker(&mut self, marker: &MarkerDescriptor) -> Result<(), EngineError> {
        let element = marker_element(marker)?;
        let offset = Object::new();
        Reflect::set(&offset, &"offset".into(), &marker.popup_offset.into()).map_err(js_error)?;
        let popup = JsPopup::new(&offset).set_html(&marker.popup_html);

        let [lng, lat] = marker.position.to_array();
        let lng_lat = Array::of2(&lng.into(), &lat.into());
        JsMarker::new(&element)
            .set_lng_lat(&lng_lat)
            .set_popup(&popup)
            .add_to(&self.map)
            .map(drop)
            .map_err(js_error)
    }

    fn remove(self) {
        self.map.remove();
    }
}

/// The marker's DOM element, styled from the descriptor.
fn marker_element(marker: &MarkerDescriptor) -> Result<web_sys::HtmlElement, EngineError> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| EngineError::Unavailable("no document".into()))?;
    let el = document
        .create_element("div")
        .map_err(js_error)?
        .dyn_into::<web_sys::HtmlElement>()
        .map_err(|_| EngineError::Unavailable("div is not an HtmlElement".into()))?;
    el.set_class_name(&marker.style.class_name);
    el.set_attribute("style", &marker.style.css()).map_err(js_error)?;
    el.set_title(&marker.country);
    Ok(el)
}

use wasm_bindgen_test::*;

use covidmap_wasm::{countries, country_count, markers};

#[wasm_bindgen_test]
fn dataset_is_embedded() {
    #[cfg(target_arch = "wasm32")]
    covidmap_wasm::start();

    assert_eq!(country_count(), 30);
}

#[wasm_bindgen_test]
fn countries_serialize_to_an_array() {
    let rows = countries().expect("serialize countries");
    let rows = js_sys::Array::from(&rows);
    assert_eq!(rows.length(), 30);
}

#[wasm_bindgen_test]
fn markers_serialize_to_an_array() {
    let list = markers().expect("serialize markers");
    assert_eq!(js_sys::Array::from(&list).length(), 30);
}

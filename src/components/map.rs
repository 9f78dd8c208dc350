//! Location map widget backed by Leaflet.
//!
//! Leaflet is loaded by the page as the global `L`; these bindings cover
//! only the calls the widget makes. Without the global, `L.map` throws and
//! the widget logs a warning and stays empty.

use js_sys::{Array, Object, Reflect};
use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

use crate::config::MapSettings;
use crate::util::dom::DomError;

pub const CONTAINER_ID: &str = "map";

#[wasm_bindgen]
extern "C" {
    type LeafletMap;
    type TileLayer;
    type Marker;

    #[wasm_bindgen(catch, js_namespace = L, js_name = map)]
    fn leaflet_map(container: &HtmlElement) -> Result<LeafletMap, JsValue>;

    #[wasm_bindgen(method, js_name = setView)]
    fn set_view(this: &LeafletMap, center: &Array, zoom: f64) -> LeafletMap;

    #[wasm_bindgen(catch, js_namespace = L, js_name = tileLayer)]
    fn tile_layer(url: &str, options: &Object) -> Result<TileLayer, JsValue>;

    #[wasm_bindgen(method, js_name = addTo)]
    fn add_tile_layer_to(this: &TileLayer, map: &LeafletMap) -> TileLayer;

    #[wasm_bindgen(catch, js_namespace = L, js_name = marker)]
    fn marker(at: &Array) -> Result<Marker, JsValue>;

    #[wasm_bindgen(method, js_name = addTo)]
    fn add_marker_to(this: &Marker, map: &LeafletMap) -> Marker;

    #[wasm_bindgen(method, js_name = bindPopup)]
    fn bind_popup(this: &Marker, html: &str) -> Marker;

    #[wasm_bindgen(method, js_name = openPopup)]
    fn open_popup(this: &Marker) -> Marker;
}

/// Keeps the Leaflet map object reachable for the page's lifetime.
pub struct MapWidget {
    _map: LeafletMap,
}

fn lat_lng(settings: &MapSettings) -> Array {
    Array::of2(&JsValue::from_f64(settings.latitude), &JsValue::from_f64(settings.longitude))
}

/// Build the map inside `container`: one tile layer, one marker with its
/// popup already open.
///
/// # Errors
///
/// Returns [`DomError`] when Leaflet is missing or rejects a call.
pub fn mount(container: HtmlElement, settings: &MapSettings) -> Result<MapWidget, DomError> {
    let center = lat_lng(settings);
    let map = leaflet_map(&container)
        .map_err(|err| DomError::js("create map", err))?
        .set_view(&center, settings.zoom);

    let options = Object::new();
    Reflect::set(&options, &JsValue::from_str("attribution"), &JsValue::from_str(&settings.attribution))
        .map_err(|err| DomError::js("tile layer options", err))?;
    tile_layer(&settings.tile_url, &options)
        .map_err(|err| DomError::js("create tile layer", err))?
        .add_tile_layer_to(&map);

    marker(&center)
        .map_err(|err| DomError::js("create marker", err))?
        .add_marker_to(&map)
        .bind_popup(&settings.popup_html)
        .open_popup();

    log::debug!("map: centred on {}, {}", settings.latitude, settings.longitude);
    Ok(MapWidget { _map: map })
}

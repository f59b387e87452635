// ============================================================================
// MAPS FFI - Foreign Function Interface para el glue JS de Google Maps
// ============================================================================
// Solo wrappers para funciones JS - Sin estado, sin lógica
// ============================================================================

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = initVenueMap)]
    pub fn init_venue_map(container_id: &str, api_key: &str, lat: f64, lng: f64, zoom: f64, styles_json: &str);

    #[wasm_bindgen(js_name = setVenueMarkers)]
    pub fn set_venue_markers(markers_json: &str);

    #[wasm_bindgen(js_name = setSelectedVenueMarker)]
    pub fn set_selected_venue_marker(venue_id: &str);

    #[wasm_bindgen(js_name = setUserLocationMarker)]
    pub fn set_user_location_marker(lat: f64, lng: f64);

    #[wasm_bindgen(js_name = setMapCenter)]
    pub fn set_map_center(lat: f64, lng: f64);
}

/// Helper: limpiar el marcador de selección en el glue JS
pub fn clear_selected_venue_marker() {
    if let Some(window) = web_sys::window() {
        let function = js_sys::Function::new_no_args(
            "if (window.clearSelectedVenueMarker) window.clearSelectedVenueMarker();",
        );
        let _ = function.call0(&window.into());
    }
}

// ============================================================================
// MAP LAYER - Contenedor del mapa o panel placeholder sin credencial
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, ElementBuilder};
use crate::utils::MAP_CONTAINER_ID;

/// Capa de fondo: el contenedor del widget de mapas si hay credencial,
/// o un panel estático explicando el requisito. El resto de la UI sigue
/// interactiva en ambos casos.
pub fn render_map_layer(has_credential: bool) -> Result<Element, JsValue> {
    let layer = ElementBuilder::new("div")?
        .id("map-layer")?
        .class("map-layer")
        .build();

    if has_credential {
        let canvas = ElementBuilder::new("div")?
            .id(MAP_CONTAINER_ID)?
            .class("map-canvas")
            .build();
        append_child(&layer, &canvas)?;
    } else {
        let placeholder = ElementBuilder::new("div")?
            .class("map-placeholder")
            .build();
        let message = ElementBuilder::new("p")?
            .class("map-placeholder-text")
            .text("Configura GOOGLE_MAPS_API_KEY en .env para cargar el mapa.")
            .build();
        append_child(&placeholder, &message)?;
        append_child(&layer, &placeholder)?;
    }

    Ok(layer)
}

// ============================================================================
// APP VIEW - Composición de la vista completa
// ============================================================================
// Capas, de atrás hacia adelante: mapa (o placeholder), barra superior,
// card de detalle, drawer de lista.
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::config::CONFIG;
use crate::dom::{append_child, ElementBuilder};
use crate::state::AppState;
use crate::views::{render_drawer_root, render_header, render_map_layer, render_venue_card_root};

/// Renderizar la aplicación completa
pub fn render_app(state: &AppState) -> Result<Element, JsValue> {
    let shell = ElementBuilder::new("main")?
        .class("app-shell")
        .build();

    let map_layer = render_map_layer(CONFIG.maps_api_key().is_some())?;
    append_child(&shell, &map_layer)?;

    let overlay = ElementBuilder::new("div")?
        .class("overlay")
        .build();

    let header = render_header(state)?;
    append_child(&overlay, &header)?;

    let card_root = render_venue_card_root(state)?;
    append_child(&overlay, &card_root)?;

    let drawer_root = render_drawer_root(state)?;
    append_child(&overlay, &drawer_root)?;

    append_child(&shell, &overlay)?;
    Ok(shell)
}

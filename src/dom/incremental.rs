// ============================================================================
// INCREMENTAL - Actualizaciones puntuales del DOM sin re-render completo
// ============================================================================
// Cada updater devuelve Err si el elemento objetivo no existe; el caller
// (lib.rs) cae entonces a un re-render completo.
// ============================================================================

use wasm_bindgen::prelude::*;

use crate::dom::get_element_by_id;
use crate::state::AppState;
use crate::views::{fill_category_nav, fill_drawer_root, fill_venue_card_root};

/// Actualizar clases activas de los botones de categoría
pub fn update_category_nav(state: &AppState) -> Result<(), JsValue> {
    let nav = get_element_by_id("category-nav")
        .ok_or_else(|| JsValue::from_str("category-nav not found, needs full render"))?;
    fill_category_nav(&nav, state)
}

/// Reconstruir el contenido del drawer (toggle + lista)
pub fn update_drawer(state: &AppState) -> Result<(), JsValue> {
    let root = get_element_by_id("drawer-root")
        .ok_or_else(|| JsValue::from_str("drawer-root not found, needs full render"))?;
    fill_drawer_root(&root, state)
}

/// Actualizar card de detalle y highlight de la fila seleccionada
pub fn update_selection(state: &AppState) -> Result<(), JsValue> {
    let card_root = get_element_by_id("venue-card-root")
        .ok_or_else(|| JsValue::from_str("venue-card-root not found, needs full render"))?;
    fill_venue_card_root(&card_root, state)?;

    // El highlight vive en las filas del drawer; reconstruirlas es barato
    // (la lista nunca pasa de un puñado de clubes)
    if *state.drawer_open.borrow() {
        update_drawer(state)?;
    }
    Ok(())
}

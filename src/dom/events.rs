// ============================================================================
// EVENT HANDLING - Sistema de eventos
// ============================================================================
// Los listeners se registran con Closure + forget(). Cuando el elemento se
// destruye del DOM (p.ej. con set_inner_html("")), el navegador limpia los
// listeners asociados, por lo que forget() no acumula leaks para listeners
// locales. Listeners globales (window/document) se registran UNA sola vez
// al inicio de la app.
// ============================================================================

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{Element, MouseEvent};

/// Helper para crear click handler simple
pub fn on_click<F>(element: &Element, handler: F) -> Result<(), JsValue>
where
    F: FnMut(MouseEvent) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(MouseEvent)>);
    element.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    // forget() mantiene el closure vivo mientras exista el elemento
    closure.forget();
    Ok(())
}

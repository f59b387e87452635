// ============================================================================
// BUKIT MAP - FRONTEND MVVM ESTRICTO (RUST PURO)
// ============================================================================
// Arquitectura MVVM estricta:
// - Views: Funciones que renderizan DOM (sin lógica)
// - ViewModels: Lógica de preparación de datos (sin estado)
// - Services: SOLO comunicación con el mundo exterior (geolocalización)
// - State: State Management con Rc<RefCell>
// - Models: Datos del dominio (clubes, categorías, coordenadas)
// ============================================================================

mod app;
mod config;
mod dom;
mod maps;
mod models;
mod services;
mod state;
mod utils;
mod viewmodels;
mod views;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;
use wasm_logger::Config;

use crate::app::App;
use crate::config::CONFIG;
use crate::state::UpdateType;

// Variable estática global para mantener la instancia de App
thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    // Panic hook para mejor debugging en consola
    console_error_panic_hook::set_once();

    if CONFIG.is_logging_enabled() {
        wasm_logger::init(Config::default());
    }
    log::info!("🚀 BUKIT Map - Rust Puro + MVVM");

    // Crear, renderizar y arrancar la app
    let mut app = App::new()?;
    app.render()?;
    app.bootstrap()?;

    // Guardar app en la variable global
    APP.with(|app_cell| {
        *app_cell.borrow_mut() = Some(app);
    });

    Ok(())
}

/// Re-render completo de la app
pub fn rerender_app() {
    rerender_app_with_type(UpdateType::FullRender);
}

/// Actualizar la app con tipo específico; lo incremental cae a re-render
/// completo si el elemento objetivo no existe
pub fn rerender_app_with_type(update_type: UpdateType) {
    APP.with(|app_cell| {
        match update_type {
            UpdateType::Incremental(inc_type) => {
                let needs_full_render = {
                    if let Some(ref app) = *app_cell.borrow() {
                        match app.update_incremental(inc_type) {
                            Ok(()) => false,
                            Err(e) => {
                                log::warn!("⚠️ Incremental {:?} falló ({:?}), re-render completo", inc_type, e);
                                true
                            }
                        }
                    } else {
                        log::warn!("⚠️ App no está inicializada");
                        false
                    }
                };

                if needs_full_render {
                    if let Some(ref mut app_mut) = *app_cell.borrow_mut() {
                        if let Err(e) = app_mut.render() {
                            log::error!("❌ Error re-renderizando: {:?}", e);
                        }
                    }
                }
            }
            UpdateType::FullRender => {
                if let Some(ref mut app_mut) = *app_cell.borrow_mut() {
                    if let Err(e) = app_mut.render() {
                        log::error!("❌ Error re-renderizando: {:?}", e);
                    }
                }
            }
        }
    });
}

/// Función pública WASM para re-renderizar la app (llamable desde JavaScript)
#[wasm_bindgen]
pub fn rerender_app_wasm() {
    rerender_app();
}

/// Export llamado por el glue JS cuando se hace click en un marcador del
/// mapa. El id llega tal cual se envió en el payload de marcadores.
#[wasm_bindgen]
pub fn handle_venue_marker_click(venue_id: String) {
    // Clonar el estado fuera del borrow: la selección dispara updates que
    // vuelven a entrar a APP
    let state = APP.with(|app_cell| {
        app_cell.borrow().as_ref().map(|app| app.state().clone())
    });

    match state {
        Some(state) => state.select_venue(&venue_id),
        None => log::error!("❌ App no está inicializada"),
    }
}

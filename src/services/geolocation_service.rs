// ============================================================================
// GEOLOCATION SERVICE - Request único de ubicación del navegador
// ============================================================================
// El API de callbacks del navegador se envuelve en una Promise y se consume
// como future con spawn_local. El handle devuelto lleva un flag de vida:
// si la vista se desmonta antes de resolver, el resultado se descarta sin
// tocar estado (no hay cancelación real del sensor, solo del efecto).
// ============================================================================

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use crate::models::Coordinates;
use crate::state::AppState;

/// Handle del request en vuelo. Al soltarlo, cualquier resolución posterior
/// se descarta.
pub struct LocationRequest {
    alive: Rc<Cell<bool>>,
}

impl LocationRequest {
    fn inert() -> Self {
        Self {
            alive: Rc::new(Cell::new(false)),
        }
    }
}

impl Drop for LocationRequest {
    fn drop(&mut self) {
        self.alive.set(false);
    }
}

pub struct GeolocationService;

impl GeolocationService {
    /// Disparar el request de ubicación. Como máximo una vez por sesión:
    /// si la máquina de estados ya salió de NotRequested, no hace nada.
    /// Toda falla (sin sensor, permiso denegado, timeout) degrada en
    /// silencio al centro por defecto.
    pub fn request_fix(state: &AppState, timeout_ms: u32) -> LocationRequest {
        if !state.begin_location_request() {
            log::warn!("⚠️ Request de ubicación ya disparado, ignorando");
            return LocationRequest::inert();
        }

        let geolocation = web_sys::window()
            .and_then(|window| window.navigator().geolocation().ok());

        let Some(geolocation) = geolocation else {
            log::info!("📡 Geolocalización no soportada por el navegador");
            state.mark_location_unavailable();
            return LocationRequest::inert();
        };

        log::info!("📡 Pidiendo ubicación (timeout {}ms)...", timeout_ms);

        let promise = js_sys::Promise::new(&mut move |resolve, reject| {
            let success = Closure::once_into_js(move |position: JsValue| {
                let _ = resolve.call1(&JsValue::NULL, &position);
            });
            let failure = Closure::once_into_js(move |error: JsValue| {
                let _ = reject.call1(&JsValue::NULL, &error);
            });

            let options = web_sys::PositionOptions::new();
            options.set_timeout(timeout_ms);
            options.set_enable_high_accuracy(false);

            if let Err(err) = geolocation.get_current_position_with_error_callback_and_options(
                success.unchecked_ref(),
                Some(failure.unchecked_ref()),
                &options,
            ) {
                log::warn!("⚠️ get_current_position falló de entrada: {:?}", err);
            }
        });

        let alive = Rc::new(Cell::new(true));
        let alive_flag = alive.clone();
        let state = state.clone();

        wasm_bindgen_futures::spawn_local(async move {
            match JsFuture::from(promise).await {
                Ok(position) => {
                    if !alive_flag.get() {
                        log::info!("📡 Fix resuelto después del teardown, descartado");
                        return;
                    }
                    let position: web_sys::Position = position.unchecked_into();
                    let coords = position.coords();
                    state.apply_location_fix(Coordinates::new(
                        coords.latitude(),
                        coords.longitude(),
                    ));
                }
                Err(_) => {
                    if !alive_flag.get() {
                        return;
                    }
                    // Denegación, timeout o sensor caído: degradación silenciosa
                    state.mark_location_unavailable();
                }
            }
        });

        LocationRequest { alive }
    }
}

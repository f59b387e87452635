// ============================================================================
// APP - Aplicación principal
// ============================================================================

use std::cell::RefCell;

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::config::CONFIG;
use crate::dom::incremental::{update_category_nav, update_drawer, update_selection};
use crate::dom::{append_child, get_element_by_id, set_inner_html};
use crate::maps::web::WebMapSurface;
use crate::maps::{MapSurface, MapViewport};
use crate::models::venue_fixture;
use crate::services::{GeolocationService, LocationRequest};
use crate::state::{AppState, IncrementalUpdate};
use crate::viewmodels::MapViewModel;
use crate::views::render_app;

/// Aplicación principal
pub struct App {
    state: AppState,
    root: Option<Element>,
    map: RefCell<WebMapSurface>,
    // El handle vive lo que vive la app: si se soltara antes de resolver,
    // el fix tardío se descarta sin tocar estado
    location_request: RefCell<Option<LocationRequest>>,
}

impl App {
    /// Crear nueva aplicación con el dataset inyectado
    pub fn new() -> Result<Self, JsValue> {
        let root = get_element_by_id("app")
            .ok_or_else(|| JsValue::from_str("No #app element found"))?;

        let state = AppState::new(venue_fixture(), CONFIG.default_center());

        // Suscribirse a cambios de estado para actualizar el DOM
        state.subscribe_to_changes(move |update_type| {
            crate::rerender_app_with_type(update_type);
        });

        Ok(Self {
            state,
            root: Some(root),
            map: RefCell::new(WebMapSurface::new()),
            location_request: RefCell::new(None),
        })
    }

    /// Renderizar aplicación completa
    pub fn render(&mut self) -> Result<(), JsValue> {
        if let Some(root) = &self.root {
            // Limpiar contenido anterior
            set_inner_html(root, "");
            let app_view = render_app(&self.state)?;
            append_child(root, &app_view)?;
        }
        Ok(())
    }

    /// Arranque post-render: montar el mapa (si hay credencial) y disparar
    /// el único request de geolocalización de la sesión
    pub fn bootstrap(&self) -> Result<(), JsValue> {
        match CONFIG.maps_api_key() {
            Some(api_key) => {
                let viewport = MapViewport {
                    center: *self.state.map_center.borrow(),
                    zoom: CONFIG.map_config.default_zoom,
                };
                let mut map = self.map.borrow_mut();
                match map.init(api_key, viewport) {
                    Ok(()) => {
                        let markers = MapViewModel::prepare_markers(&self.state.visible_venues());
                        if let Err(e) = map.set_markers(&markers) {
                            log::warn!("⚠️ No se pudieron enviar los marcadores: {}", e);
                        }
                    }
                    Err(e) => log::warn!("⚠️ No se pudo montar el mapa: {}", e),
                }
            }
            None => {
                log::info!("🗺️ Sin credencial de mapas, la vista muestra el placeholder");
            }
        }

        let request = GeolocationService::request_fix(&self.state, CONFIG.geolocation_timeout_ms);
        *self.location_request.borrow_mut() = Some(request);
        Ok(())
    }

    /// Obtener referencia al estado
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Actualización incremental del DOM (solo elementos específicos)
    pub fn update_incremental(&self, update_type: IncrementalUpdate) -> Result<(), JsValue> {
        match update_type {
            IncrementalUpdate::CategoryNav => {
                update_category_nav(&self.state)?;
            }
            IncrementalUpdate::Drawer => {
                update_drawer(&self.state)?;
            }
            IncrementalUpdate::Selection => {
                update_selection(&self.state)?;
                if self.map.borrow().is_ready() {
                    let selected = self.state.selected_venue_id.borrow().clone();
                    if let Err(e) = self.map.borrow_mut().set_selected_marker(selected.as_deref()) {
                        log::warn!("⚠️ No se pudo resaltar el marcador: {}", e);
                    }
                }
            }
            IncrementalUpdate::MapMarkers => {
                if self.map.borrow().is_ready() {
                    let markers = MapViewModel::prepare_markers(&self.state.visible_venues());
                    if let Err(e) = self.map.borrow_mut().set_markers(&markers) {
                        log::warn!("⚠️ No se pudieron actualizar los marcadores: {}", e);
                    }
                }
            }
            IncrementalUpdate::UserLocation => {
                if let Some(coords) = self.state.location.borrow().coordinates() {
                    if self.map.borrow().is_ready() {
                        let mut map = self.map.borrow_mut();
                        if let Err(e) = map.set_user_location(coords) {
                            log::warn!("⚠️ No se pudo mostrar la ubicación: {}", e);
                        }
                        if let Err(e) = map.set_center(coords) {
                            log::warn!("⚠️ No se pudo recentrar el mapa: {}", e);
                        }
                    }
                }
            }
        }
        Ok(())
    }
}

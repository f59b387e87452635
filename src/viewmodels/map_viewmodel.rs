// ============================================================================
// MAP VIEWMODEL - Lógica de preparación de datos para el mapa
// ============================================================================
// SOLO lógica de preparación de datos - Sin estado
// ============================================================================

use gloo_timers::callback::Timeout;
use serde::Serialize;

use crate::utils::maps_ffi::*;
use crate::utils::{PIN_BACKGROUND, PIN_BORDER, PIN_GLYPH};
use crate::viewmodels::venue_viewmodel::VenueListing;

/// Estructura para enviar al glue JS del mapa
#[derive(Serialize, Clone, PartialEq, Debug)]
pub struct MapVenue {
    pub id: String,
    pub name: String,
    pub coords: [f64; 2], // [lat, lng]
    pub category_label: String,
    pub pin_background: String,
    pub pin_border: String,
    pub pin_glyph: String,
}

/// ViewModel del mapa - SOLO lógica de negocio
pub struct MapViewModel;

impl MapViewModel {
    /// Convertir listings a marcadores para el mapa
    pub fn prepare_markers(listings: &[VenueListing]) -> Vec<MapVenue> {
        listings
            .iter()
            .map(|listing| MapVenue {
                id: listing.venue.id.clone(),
                name: listing.venue.name.clone(),
                coords: [listing.venue.position.latitude, listing.venue.position.longitude],
                category_label: listing.category_label.to_string(),
                pin_background: PIN_BACKGROUND.to_string(),
                pin_border: PIN_BORDER.to_string(),
                pin_glyph: PIN_GLYPH.to_string(),
            })
            .collect()
    }

    /// Enviar marcadores al mapa sin destruirlo
    pub fn update_map_markers(markers: Vec<MapVenue>) {
        log::info!("🗺️ ViewModel: Enviando {} marcadores al mapa", markers.len());

        // Exponer también en window para acceso directo desde el glue JS
        if let Some(window) = web_sys::window() {
            if let Ok(js_markers) = serde_wasm_bindgen::to_value(&markers) {
                let _ = js_sys::Reflect::set(
                    &window,
                    &wasm_bindgen::JsValue::from_str("currentVenues"),
                    &js_markers,
                );
            }
        }

        if let Ok(json) = serde_json::to_string(&markers) {
            // Pequeño delay para que el widget termine de montar
            Timeout::new(100, move || {
                set_venue_markers(&json);
            })
            .forget();
        } else {
            log::error!("❌ Error serializando marcadores para el mapa");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{venue_fixture, Category};
    use crate::viewmodels::VenueViewModel;

    #[test]
    fn test_markers_mirror_listings() {
        let venues = venue_fixture();
        let listings = VenueViewModel::visible_venues(Category::Padel, &venues);
        let markers = MapViewModel::prepare_markers(&listings);

        assert_eq!(markers.len(), 2);
        assert_eq!(markers[0].id, "1");
        assert_eq!(markers[0].coords, [25.211, 55.275]);
        assert_eq!(markers[1].id, "6");
        assert!(markers.iter().all(|m| m.category_label == "Padel Court"));
        assert!(markers.iter().all(|m| m.pin_background == PIN_BACKGROUND));
    }
}

// ============================================================================
// WEB MAP SURFACE - Implementación del mapa sobre el glue JS de Google Maps
// ============================================================================

use crate::maps::traits::{MapError, MapSurface, MapViewport};
use crate::models::Coordinates;
use crate::utils::map_style::dark_neon_style;
use crate::utils::maps_ffi::*;
use crate::utils::MAP_CONTAINER_ID;
use crate::viewmodels::map_viewmodel::MapVenue;
use crate::viewmodels::MapViewModel;

/// Superficie de mapa web. El estado real del widget vive en el glue JS;
/// acá solo se guarda si ya fue montado.
pub struct WebMapSurface {
    ready: bool,
}

impl WebMapSurface {
    pub fn new() -> Self {
        Self { ready: false }
    }
}

impl Default for WebMapSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl MapSurface for WebMapSurface {
    fn init(&mut self, api_key: &str, viewport: MapViewport) -> Result<(), MapError> {
        if api_key.trim().is_empty() {
            return Err(MapError::MissingCredential);
        }

        let styles_json = serde_json::to_string(&dark_neon_style())
            .map_err(|_| MapError::SerializationFailed)?;

        log::info!(
            "🗺️ Montando mapa en #{} (centro [{}, {}], zoom {})",
            MAP_CONTAINER_ID,
            viewport.center.latitude,
            viewport.center.longitude,
            viewport.zoom
        );
        init_venue_map(
            MAP_CONTAINER_ID,
            api_key,
            viewport.center.latitude,
            viewport.center.longitude,
            viewport.zoom,
            &styles_json,
        );
        self.ready = true;
        Ok(())
    }

    fn set_markers(&mut self, markers: &[MapVenue]) -> Result<(), MapError> {
        if !self.ready {
            return Err(MapError::NotReady);
        }
        MapViewModel::update_map_markers(markers.to_vec());
        Ok(())
    }

    fn set_selected_marker(&mut self, venue_id: Option<&str>) -> Result<(), MapError> {
        if !self.ready {
            return Err(MapError::NotReady);
        }
        match venue_id {
            Some(id) => set_selected_venue_marker(id),
            None => clear_selected_venue_marker(),
        }
        Ok(())
    }

    fn set_user_location(&mut self, coordinates: Coordinates) -> Result<(), MapError> {
        if !self.ready {
            return Err(MapError::NotReady);
        }
        set_user_location_marker(coordinates.latitude, coordinates.longitude);
        Ok(())
    }

    fn set_center(&mut self, coordinates: Coordinates) -> Result<(), MapError> {
        if !self.ready {
            return Err(MapError::NotReady);
        }
        set_map_center(coordinates.latitude, coordinates.longitude);
        Ok(())
    }

    fn is_ready(&self) -> bool {
        self.ready
    }
}

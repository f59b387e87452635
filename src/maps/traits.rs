use crate::models::Coordinates;
use crate::viewmodels::map_viewmodel::MapVenue;

/// Trait común para la superficie de render del mapa. El core no asume nada
/// del render interno: solo pide marcadores en coordenadas, un callback con
/// el id asociado al interactuar y una tabla de estilos opaca.
pub trait MapSurface {
    /// Montar el mapa en su contenedor con credencial, viewport y estilos
    fn init(&mut self, api_key: &str, viewport: MapViewport) -> Result<(), MapError>;

    /// Reemplazar los marcadores de clubes visibles
    fn set_markers(&mut self, markers: &[MapVenue]) -> Result<(), MapError>;

    /// Resaltar el marcador seleccionado (None limpia el highlight)
    fn set_selected_marker(&mut self, venue_id: Option<&str>) -> Result<(), MapError>;

    /// Mostrar el marcador de ubicación del usuario (una sola vez por sesión)
    fn set_user_location(&mut self, coordinates: Coordinates) -> Result<(), MapError>;

    /// Centrar el mapa
    fn set_center(&mut self, coordinates: Coordinates) -> Result<(), MapError>;

    /// Verificar si el mapa está listo
    fn is_ready(&self) -> bool;
}

/// Viewport inicial del mapa
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapViewport {
    pub center: Coordinates,
    pub zoom: f64,
}

/// Error del mapa
#[derive(Debug, Clone, PartialEq)]
pub enum MapError {
    NotReady,
    MissingCredential,
    SerializationFailed,
    Unknown(String),
}

impl std::fmt::Display for MapError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MapError::NotReady => write!(f, "Map is not ready"),
            MapError::MissingCredential => write!(f, "Map provider credential is missing"),
            MapError::SerializationFailed => write!(f, "Could not serialize payload for the map"),
            MapError::Unknown(msg) => write!(f, "Unknown error: {}", msg),
        }
    }
}

impl std::error::Error for MapError {}

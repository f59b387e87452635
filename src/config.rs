use serde::{Deserialize, Serialize};

use crate::models::Coordinates;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub enable_logging: bool,
    pub map_config: MapConfig,
    pub geolocation_timeout_ms: u32,
    pub google_maps_api_key: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            enable_logging: true,
            map_config: MapConfig::default(),
            geolocation_timeout_ms: 8000,
            google_maps_api_key: String::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapConfig {
    pub default_center_lat: f64,
    pub default_center_lng: f64,
    pub default_zoom: f64,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            default_center_lat: 25.2048, // Dubái
            default_center_lng: 55.2708,
            default_zoom: 11.0,
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        Self {
            enable_logging: option_env!("ENABLE_LOGGING")
                .unwrap_or("true").parse().unwrap_or(true),
            map_config: MapConfig {
                default_center_lat: option_env!("DEFAULT_MAP_CENTER_LAT")
                    .unwrap_or("25.2048").parse().unwrap_or(25.2048),
                default_center_lng: option_env!("DEFAULT_MAP_CENTER_LNG")
                    .unwrap_or("55.2708").parse().unwrap_or(55.2708),
                default_zoom: option_env!("DEFAULT_MAP_ZOOM")
                    .unwrap_or("11.0").parse().unwrap_or(11.0),
            },
            geolocation_timeout_ms: option_env!("GEOLOCATION_TIMEOUT_MS")
                .unwrap_or("8000").parse().unwrap_or(8000),
            google_maps_api_key: option_env!("GOOGLE_MAPS_API_KEY")
                .unwrap_or("").to_string(),
        }
    }

    /// Centro del mapa por defecto
    pub fn default_center(&self) -> Coordinates {
        Coordinates::new(
            self.map_config.default_center_lat,
            self.map_config.default_center_lng,
        )
    }

    /// Credencial del proveedor de mapas; la cadena vacía cuenta como ausente.
    /// Sin credencial la vista degrada a un panel estático, nunca a un crash.
    pub fn maps_api_key(&self) -> Option<&str> {
        let key = self.google_maps_api_key.trim();
        if key.is_empty() {
            None
        } else {
            Some(key)
        }
    }

    /// Verifica si el modo de logging está habilitado
    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_api_key_is_none() {
        let config = AppConfig::default();
        assert_eq!(config.maps_api_key(), None);

        let blank = AppConfig {
            google_maps_api_key: "   ".to_string(),
            ..AppConfig::default()
        };
        assert_eq!(blank.maps_api_key(), None);
    }

    #[test]
    fn test_present_api_key() {
        let config = AppConfig {
            google_maps_api_key: "AIza-test".to_string(),
            ..AppConfig::default()
        };
        assert_eq!(config.maps_api_key(), Some("AIza-test"));
    }

    #[test]
    fn test_default_center() {
        let center = AppConfig::default().default_center();
        assert_eq!(center.latitude, 25.2048);
        assert_eq!(center.longitude, 55.2708);
    }
}

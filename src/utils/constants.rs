/// Id del contenedor DOM donde el glue JS monta el mapa
pub const MAP_CONTAINER_ID: &str = "map";

/// Colores de los pines de club (tema neón)
pub const PIN_BACKGROUND: &str = "#ec4899";
pub const PIN_BORDER: &str = "#f9a8d4";
pub const PIN_GLYPH: &str = "#0f172a";

/// Color del marcador de ubicación del usuario
pub const USER_PIN_BACKGROUND: &str = "#38bdf8";

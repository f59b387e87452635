// ============================================================================
// MAP STYLE - Tabla de estilos del mapa (tema dark neon)
// ============================================================================
// Lista ordenada y opaca de reglas feature/element -> stylers. El core no
// interpreta las reglas: se serializan tal cual para el widget de mapas.
// ============================================================================

use serde::Serialize;
use serde_json::{json, Value};

/// Regla de estilo en el formato del proveedor de mapas
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleRule {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feature_type: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub element_type: Option<&'static str>,
    pub stylers: Vec<Value>,
}

impl StyleRule {
    fn new(feature_type: Option<&'static str>, element_type: Option<&'static str>, stylers: Vec<Value>) -> Self {
        Self { feature_type, element_type, stylers }
    }
}

/// Tema dark neon de la vista. El orden de las reglas importa para el
/// widget, no reordenar.
pub fn dark_neon_style() -> Vec<StyleRule> {
    vec![
        StyleRule::new(None, Some("geometry"), vec![json!({"color": "#111111"})]),
        StyleRule::new(None, Some("labels.icon"), vec![json!({"visibility": "off"})]),
        StyleRule::new(None, Some("labels.text.fill"), vec![json!({"color": "#a3a3a3"})]),
        StyleRule::new(None, Some("labels.text.stroke"), vec![json!({"color": "#000000"})]),
        StyleRule::new(Some("administrative"), Some("geometry"), vec![json!({"visibility": "off"})]),
        StyleRule::new(Some("administrative.locality"), Some("labels.text.fill"), vec![json!({"color": "#e5e5e5"})]),
        StyleRule::new(Some("poi"), None, vec![json!({"visibility": "off"})]),
        StyleRule::new(Some("transit"), None, vec![json!({"visibility": "off"})]),
        StyleRule::new(Some("road"), Some("geometry"), vec![json!({"color": "#000000"})]),
        StyleRule::new(Some("road"), Some("geometry.stroke"), vec![json!({"color": "#1f2933"})]),
        StyleRule::new(Some("road"), Some("labels.text.fill"), vec![json!({"color": "#f5f5f5"})]),
        StyleRule::new(Some("road.highway"), Some("geometry"), vec![json!({"color": "#020617"})]),
        StyleRule::new(Some("water"), Some("geometry"), vec![json!({"color": "#111827"})]),
        StyleRule::new(Some("landscape"), Some("geometry"), vec![json!({"color": "#18181b"})]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_serializes_provider_keys() {
        let rules = dark_neon_style();
        let json = serde_json::to_value(&rules).unwrap();

        // Campos en camelCase y ausentes cuando son None
        let first = &json[0];
        assert!(first.get("featureType").is_none());
        assert_eq!(first["elementType"], "geometry");
        assert_eq!(first["stylers"][0]["color"], "#111111");

        let poi = &json[6];
        assert_eq!(poi["featureType"], "poi");
        assert!(poi.get("elementType").is_none());
    }

    #[test]
    fn test_style_order_preserved() {
        let rules = dark_neon_style();
        assert_eq!(rules.len(), 14);
        assert_eq!(rules[4].feature_type, Some("administrative"));
        assert_eq!(rules[13].feature_type, Some("landscape"));
    }
}

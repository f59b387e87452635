// ============================================================================
// LOCATION STATE - Máquina de estados del fix de geolocalización
// ============================================================================
// NotRequested -> Pending -> Resolved | Unavailable
// Pending se entra una sola vez al montar la vista; Resolved y Unavailable
// son terminales: no hay reintentos ni transiciones posteriores.
// ============================================================================

use crate::models::Coordinates;

/// Estado del único request de geolocalización de la sesión
#[derive(Debug, Clone, PartialEq)]
pub enum LocationFix {
    /// Todavía no se pidió la ubicación
    NotRequested,
    /// Request en vuelo, esperando callback del navegador
    Pending,
    /// Fix recibido; el centro del mapa ya fue sobrescrito
    Resolved(Coordinates),
    /// Permiso denegado, timeout o sensor no disponible (degradación silenciosa)
    Unavailable,
}

impl LocationFix {
    /// Estados terminales: una vez alcanzados no hay más transiciones
    pub fn is_terminal(&self) -> bool {
        matches!(self, LocationFix::Resolved(_) | LocationFix::Unavailable)
    }

    /// Coordenadas del fix, si lo hay
    pub fn coordinates(&self) -> Option<Coordinates> {
        match self {
            LocationFix::Resolved(coords) => Some(*coords),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_states() {
        assert!(!LocationFix::NotRequested.is_terminal());
        assert!(!LocationFix::Pending.is_terminal());
        assert!(LocationFix::Resolved(Coordinates::new(31.42, 74.26)).is_terminal());
        assert!(LocationFix::Unavailable.is_terminal());
    }

    #[test]
    fn test_coordinates_only_on_resolved() {
        let fix = LocationFix::Resolved(Coordinates::new(31.42, 74.26));
        assert_eq!(fix.coordinates(), Some(Coordinates::new(31.42, 74.26)));
        assert_eq!(LocationFix::Unavailable.coordinates(), None);
    }
}

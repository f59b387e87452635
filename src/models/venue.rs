// ============================================================================
// VENUE - Modelo de club/instalación reservable
// ============================================================================

use serde::{Deserialize, Serialize};

use crate::models::Category;

/// Par latitud/longitud
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }
}

/// Club deportivo reservable. Inmutable: proviene del fixture estático,
/// nunca se crea ni se muta en runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Venue {
    pub id: String,
    pub name: String,
    pub category: Category,
    pub position: Coordinates,
    pub address: String,
    pub rating: f64,
    pub hours: String,
    pub distance: String,
    pub phone: Option<String>,
}

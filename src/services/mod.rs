// ============================================================================
// SERVICES MODULE - SOLO comunicación con el mundo exterior
// ============================================================================

pub mod geolocation_service;

pub use geolocation_service::{GeolocationService, LocationRequest};

// Módulo de mapas: trait común + implementación web sobre el glue JS

pub mod web;

pub mod traits;

pub use traits::{MapError, MapSurface, MapViewport};

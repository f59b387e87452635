// ============================================================================
// STATE MODULE - State Management con Rc<RefCell> + notificaciones
// ============================================================================

pub mod location_state;
pub mod app_state;

pub use location_state::*;
pub use app_state::*;

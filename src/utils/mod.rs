// Utils compartidos

pub mod constants;
pub mod maps_ffi;
pub mod map_style;

pub use constants::*;
pub use maps_ffi::*;
pub use map_style::*;

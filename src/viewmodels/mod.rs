pub mod venue_viewmodel;
pub mod map_viewmodel;

pub use venue_viewmodel::VenueViewModel;
pub use map_viewmodel::MapViewModel;

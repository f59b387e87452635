pub mod category;
pub mod venue;
pub mod fixtures;

pub use category::Category;
pub use venue::{Coordinates, Venue};
pub use fixtures::venue_fixture;

pub mod app;
pub mod header;
pub mod map_layer;
pub mod venue_card;
pub mod drawer;

pub use app::render_app;
pub use drawer::{fill_drawer_root, render_drawer_root};
pub use header::{fill_category_nav, render_header};
pub use map_layer::render_map_layer;
pub use venue_card::{fill_venue_card_root, render_venue_card_root};

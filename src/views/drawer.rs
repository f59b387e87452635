// ============================================================================
// DRAWER - Botón de toggle + panel inferior con la lista de clubes
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::events::on_click;
use crate::dom::{append_child, set_inner_html, ElementBuilder};
use crate::state::AppState;
use crate::viewmodels::venue_viewmodel::VenueListing;

/// Contenedor del drawer: botón de toggle y, si está abierto, la lista
pub fn render_drawer_root(state: &AppState) -> Result<Element, JsValue> {
    let root = ElementBuilder::new("div")?
        .id("drawer-root")?
        .class("drawer-root")
        .build();
    fill_drawer_root(&root, state)?;
    Ok(root)
}

/// (Re)construir el contenido del drawer. Usado en el render inicial y en
/// las actualizaciones incrementales de Drawer y Selection.
pub fn fill_drawer_root(root: &Element, state: &AppState) -> Result<(), JsValue> {
    set_inner_html(root, "");

    let open = *state.drawer_open.borrow();

    let toggle = ElementBuilder::new("button")?
        .id("drawer-toggle")?
        .class("drawer-toggle")
        .attr("type", "button")?
        .text(if open { "Hide club list" } else { "Show club list" })
        .build();
    {
        let state_clone = state.clone();
        on_click(&toggle, move |_| {
            state_clone.toggle_drawer();
        })?;
    }
    append_child(root, &toggle)?;

    if open {
        let drawer = render_venue_list(state)?;
        append_child(root, &drawer)?;
    }

    Ok(())
}

fn render_venue_list(state: &AppState) -> Result<Element, JsValue> {
    let drawer = ElementBuilder::new("div")?
        .id("venue-drawer")?
        .class("venue-drawer")
        .build();

    let listings = state.visible_venues();
    let selected = state.selected_venue_id.borrow().clone();

    for listing in listings.iter() {
        let row = render_venue_row(state, listing, selected.as_deref())?;
        append_child(&drawer, &row)?;
    }

    Ok(drawer)
}

fn render_venue_row(
    state: &AppState,
    listing: &VenueListing,
    selected: Option<&str>,
) -> Result<Element, JsValue> {
    let venue = &listing.venue;

    let mut builder = ElementBuilder::new("button")?
        .class("venue-row")
        .attr("type", "button")?
        .attr("data-venue-id", &venue.id)?;

    if selected == Some(venue.id.as_str()) {
        builder = builder.add_class("selected")?;
    }

    let row = builder.build();

    let info = ElementBuilder::new("div")?
        .class("venue-row-info")
        .build();

    let name = ElementBuilder::new("p")?
        .class("venue-row-name")
        .text(&venue.name)
        .build();
    append_child(&info, &name)?;

    let meta = ElementBuilder::new("p")?
        .class("venue-row-meta")
        .text(&format!("{} · {}", listing.category_label, venue.distance))
        .build();
    append_child(&info, &meta)?;

    append_child(&row, &info)?;

    let rating = ElementBuilder::new("span")?
        .class("venue-row-rating")
        .text(&format!("★ {:.1}", venue.rating))
        .build();
    append_child(&row, &rating)?;

    {
        let state_clone = state.clone();
        let venue_id = venue.id.clone();
        on_click(&row, move |_| {
            state_clone.select_venue(&venue_id);
        })?;
    }

    Ok(row)
}

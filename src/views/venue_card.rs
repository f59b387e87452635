// ============================================================================
// VENUE CARD - Card de detalle del club seleccionado
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::events::on_click;
use crate::dom::{append_child, set_inner_html, ElementBuilder};
use crate::state::AppState;
use crate::viewmodels::venue_viewmodel::VenueListing;

/// Contenedor del card. Vacío cuando no hay selección.
pub fn render_venue_card_root(state: &AppState) -> Result<Element, JsValue> {
    let root = ElementBuilder::new("div")?
        .id("venue-card-root")?
        .class("venue-card-root")
        .build();
    fill_venue_card_root(&root, state)?;
    Ok(root)
}

/// (Re)construir el contenido del card según la selección actual
pub fn fill_venue_card_root(root: &Element, state: &AppState) -> Result<(), JsValue> {
    set_inner_html(root, "");
    if let Some(listing) = state.selected_listing() {
        let card = render_card(&listing)?;
        append_child(root, &card)?;
    }
    Ok(())
}

fn render_card(listing: &VenueListing) -> Result<Element, JsValue> {
    let venue = &listing.venue;

    let card = ElementBuilder::new("div")?
        .class("venue-card")
        .attr("data-venue-id", &venue.id)?
        .build();

    let category = ElementBuilder::new("p")?
        .class("venue-card-category")
        .text(listing.category_label)
        .build();
    append_child(&card, &category)?;

    let name = ElementBuilder::new("h2")?
        .class("venue-card-name")
        .text(&venue.name)
        .build();
    append_child(&card, &name)?;

    let address = ElementBuilder::new("p")?
        .class("venue-card-address")
        .text(&venue.address)
        .build();
    append_child(&card, &address)?;

    let hours = ElementBuilder::new("p")?
        .class("venue-card-hours")
        .text(&format!("Today · {}", venue.hours))
        .build();
    append_child(&card, &hours)?;

    if let Some(phone) = &venue.phone {
        let phone_row = ElementBuilder::new("p")?
            .class("venue-card-phone")
            .text(phone)
            .build();
        append_child(&card, &phone_row)?;
    }

    let footer = ElementBuilder::new("div")?
        .class("venue-card-footer")
        .build();

    let rating = ElementBuilder::new("span")?
        .class("venue-rating")
        .text(&format!("★ {:.1}", venue.rating))
        .build();
    append_child(&footer, &rating)?;

    let book = ElementBuilder::new("button")?
        .class("book-btn")
        .attr("type", "button")?
        .text("Book this club")
        .build();
    {
        // Botón no funcional en esta vista: no hay flujo de reserva
        let venue_id = venue.id.clone();
        on_click(&book, move |_| {
            log::info!("📅 Book this club: sin flujo de reserva para {}", venue_id);
        })?;
    }
    append_child(&footer, &book)?;

    append_child(&card, &footer)?;
    Ok(card)
}

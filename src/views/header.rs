// ============================================================================
// HEADER - Barra superior: logo, nav de categorías y acciones
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::events::on_click;
use crate::dom::{append_child, set_inner_html, ElementBuilder};
use crate::models::Category;
use crate::state::AppState;

/// Renderizar la barra superior completa
pub fn render_header(state: &AppState) -> Result<Element, JsValue> {
    let header = ElementBuilder::new("header")?
        .class("top-bar")
        .build();

    let logo = ElementBuilder::new("div")?
        .class("logo-text")
        .text("BUKIT")
        .build();
    append_child(&header, &logo)?;

    // Nav de categorías
    let nav = ElementBuilder::new("nav")?
        .id("category-nav")?
        .class("category-nav")
        .build();
    fill_category_nav(&nav, state)?;
    append_child(&header, &nav)?;

    // Acciones (decorativas en esta vista)
    let actions = ElementBuilder::new("div")?
        .class("top-actions")
        .build();

    let bell = ElementBuilder::new("button")?
        .class("icon-btn")
        .attr("type", "button")?
        .text("🔔")
        .build();
    on_click(&bell, move |_| {
        log::info!("🔔 Notificaciones: no implementado en esta vista");
    })?;
    append_child(&actions, &bell)?;

    let menu = ElementBuilder::new("button")?
        .class("icon-btn")
        .attr("type", "button")?
        .text("☰")
        .build();
    on_click(&menu, move |_| {
        log::info!("☰ Menú: no implementado en esta vista");
    })?;
    append_child(&actions, &menu)?;

    append_child(&header, &actions)?;
    Ok(header)
}

/// (Re)construir los botones de categoría dentro del nav. Usado en el render
/// inicial y en la actualización incremental del nav.
pub fn fill_category_nav(nav: &Element, state: &AppState) -> Result<(), JsValue> {
    set_inner_html(nav, "");
    let active = *state.active_category.borrow();

    for category in Category::ALL {
        let mut builder = ElementBuilder::new("button")?
            .class("category-btn")
            .attr("type", "button")?
            .attr("data-category", category.id())?
            .text(category.label());

        if category == active {
            builder = builder.add_class("active")?;
        }

        let button = builder.build();

        let state_clone = state.clone();
        on_click(&button, move |_| {
            state_clone.set_active_category(category.id());
        })?;

        append_child(nav, &button)?;
    }
    Ok(())
}

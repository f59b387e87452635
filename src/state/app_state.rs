// ============================================================================
// APP STATE - Estado global de la aplicación
// ============================================================================
// Invariante de campos cruzados: selected_venue_id, si está presente,
// referencia siempre un club de la categoría activa. Todo cambio de
// categoría limpia la selección.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::models::{Category, Coordinates, Venue};
use crate::state::location_state::LocationFix;
use crate::viewmodels::venue_viewmodel::{VenueListing, VenueViewModel};

/// Tipo de actualización del DOM
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum UpdateType {
    /// Actualización incremental (solo elementos específicos)
    Incremental(IncrementalUpdate),
    /// Re-render completo (fallback cuando lo incremental no alcanza)
    FullRender,
}

/// Tipo de actualización incremental específica
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum IncrementalUpdate {
    /// Clases activas de los botones de categoría del nav
    CategoryNav,
    /// Visibilidad y contenido del drawer de lista
    Drawer,
    /// Card de detalle + highlight de fila seleccionada
    Selection,
    /// Marcadores del mapa (sin destruir el mapa)
    MapMarkers,
    /// Marcador de ubicación del usuario + recentrado
    UserLocation,
}

/// Estado global de la aplicación
#[derive(Clone)]
pub struct AppState {
    /// Dataset de clubes, inyectado en construcción (solo lectura)
    pub venues: Rc<Vec<Venue>>,

    // UI State
    pub active_category: Rc<RefCell<Category>>,
    pub selected_venue_id: Rc<RefCell<Option<String>>>,
    pub drawer_open: Rc<RefCell<bool>>,

    // Map State
    pub map_center: Rc<RefCell<Coordinates>>,
    pub location: Rc<RefCell<LocationFix>>,

    // Memoized listings (cacheados para evitar re-filtrar en cada lectura)
    pub listings_memo: Rc<RefCell<Option<(Category, Rc<Vec<VenueListing>>)>>>,

    // Reactivity: callbacks para notificar cambios
    pub change_subscribers: Rc<RefCell<Vec<Rc<dyn Fn(UpdateType)>>>>,
}

impl AppState {
    /// Crear nuevo estado con el dataset y el centro por defecto inyectados
    pub fn new(venues: Vec<Venue>, default_center: Coordinates) -> Self {
        Self {
            venues: Rc::new(venues),
            active_category: Rc::new(RefCell::new(Category::Padel)),
            selected_venue_id: Rc::new(RefCell::new(None)),
            drawer_open: Rc::new(RefCell::new(false)),
            map_center: Rc::new(RefCell::new(default_center)),
            location: Rc::new(RefCell::new(LocationFix::NotRequested)),
            listings_memo: Rc::new(RefCell::new(None)),
            change_subscribers: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Suscribirse a cambios de estado
    pub fn subscribe_to_changes<F>(&self, callback: F)
    where
        F: Fn(UpdateType) + 'static,
    {
        self.change_subscribers.borrow_mut().push(Rc::new(callback));
    }

    /// Notificar a todos los subscribers con el tipo de actualización
    fn notify(&self, update_type: UpdateType) {
        for callback in self.change_subscribers.borrow().iter() {
            callback(update_type);
        }
    }

    /// Clubes visibles para la categoría activa, en orden de fixture y
    /// decorados con la etiqueta de la categoría. Memoizado por categoría.
    pub fn visible_venues(&self) -> Rc<Vec<VenueListing>> {
        let category = *self.active_category.borrow();

        if let Some((memo_cat, listings)) = self.listings_memo.borrow().as_ref() {
            if *memo_cat == category {
                return listings.clone();
            }
        }

        let listings = Rc::new(VenueViewModel::visible_venues(category, &self.venues));
        *self.listings_memo.borrow_mut() = Some((category, listings.clone()));
        listings
    }

    /// Cambiar categoría activa. Ids desconocidos se ignoran; todo cambio
    /// aceptado limpia la selección incondicionalmente.
    pub fn set_active_category(&self, category_id: &str) {
        let Some(category) = Category::parse(category_id) else {
            log::warn!("⚠️ Categoría desconocida ignorada: {}", category_id);
            return;
        };

        *self.active_category.borrow_mut() = category;
        *self.selected_venue_id.borrow_mut() = None;
        *self.listings_memo.borrow_mut() = None;

        log::info!("🏷️ Categoría activa: {}", category.label());
        self.notify(UpdateType::Incremental(IncrementalUpdate::CategoryNav));
        self.notify(UpdateType::Incremental(IncrementalUpdate::Selection));
        self.notify(UpdateType::Incremental(IncrementalUpdate::Drawer));
        self.notify(UpdateType::Incremental(IncrementalUpdate::MapMarkers));
    }

    /// Seleccionar un club por id. Solo acepta ids presentes entre los
    /// visibles: un id rancio de otra categoría nunca muestra un card ajeno.
    pub fn select_venue(&self, venue_id: &str) {
        let is_visible = self
            .visible_venues()
            .iter()
            .any(|listing| listing.venue.id == venue_id);

        if !is_visible {
            log::warn!("⚠️ select_venue ignorado, id fuera de la categoría activa: {}", venue_id);
            return;
        }

        *self.selected_venue_id.borrow_mut() = Some(venue_id.to_string());
        log::info!("📍 Club seleccionado: {}", venue_id);
        self.notify(UpdateType::Incremental(IncrementalUpdate::Selection));
    }

    /// Limpiar la selección
    pub fn clear_selection(&self) {
        *self.selected_venue_id.borrow_mut() = None;
        self.notify(UpdateType::Incremental(IncrementalUpdate::Selection));
    }

    /// Club seleccionado decorado, si hay selección
    pub fn selected_listing(&self) -> Option<VenueListing> {
        let selected = self.selected_venue_id.borrow().clone()?;
        self.visible_venues()
            .iter()
            .find(|listing| listing.venue.id == selected)
            .cloned()
    }

    /// Alternar visibilidad del drawer
    pub fn toggle_drawer(&self) {
        let open = {
            let mut drawer = self.drawer_open.borrow_mut();
            *drawer = !*drawer;
            *drawer
        };
        log::info!("🗂️ Drawer {}", if open { "abierto" } else { "cerrado" });
        self.notify(UpdateType::Incremental(IncrementalUpdate::Drawer));
    }

    /// Pasar a Pending. Devuelve true solo la primera vez: el request de
    /// geolocalización se dispara como máximo una vez por sesión.
    pub fn begin_location_request(&self) -> bool {
        let mut location = self.location.borrow_mut();
        if *location != LocationFix::NotRequested {
            return false;
        }
        *location = LocationFix::Pending;
        true
    }

    /// Aplicar el fix recibido: sobrescribe el centro del mapa de forma
    /// atómica y habilita el marcador de ubicación. Solo válido en Pending.
    pub fn apply_location_fix(&self, coords: Coordinates) {
        {
            let mut location = self.location.borrow_mut();
            if *location != LocationFix::Pending {
                log::warn!("⚠️ Fix descartado, la máquina de ubicación ya es terminal");
                return;
            }
            *location = LocationFix::Resolved(coords);
            *self.map_center.borrow_mut() = coords;
        }
        log::info!("📡 Fix aplicado: [{}, {}]", coords.latitude, coords.longitude);
        self.notify(UpdateType::Incremental(IncrementalUpdate::UserLocation));
    }

    /// Denegación/timeout/sensor no disponible: el centro por defecto se
    /// conserva y no se muestra nada al usuario.
    pub fn mark_location_unavailable(&self) {
        let mut location = self.location.borrow_mut();
        if *location != LocationFix::Pending {
            return;
        }
        *location = LocationFix::Unavailable;
        log::info!("📡 Geolocalización no disponible, se conserva el centro por defecto");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::venue_fixture;
    use std::cell::Cell;

    fn test_state() -> AppState {
        AppState::new(venue_fixture(), Coordinates::new(25.2048, 55.2708))
    }

    #[test]
    fn test_default_category_listings() {
        let state = test_state();
        let listings = state.visible_venues();
        let ids: Vec<&str> = listings.iter().map(|l| l.venue.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "6"]);
        assert!(listings.iter().all(|l| l.category_label == "Padel Court"));
    }

    #[test]
    fn test_category_change_clears_selection() {
        let state = test_state();
        state.set_active_category("snooker");
        state.select_venue("2");
        assert_eq!(state.selected_venue_id.borrow().as_deref(), Some("2"));

        state.set_active_category("cricket");
        assert!(state.selected_venue_id.borrow().is_none());
    }

    #[test]
    fn test_unknown_category_ignored() {
        let state = test_state();
        state.select_venue("1");
        state.set_active_category("bowling");
        // Ni la categoría ni la selección cambian
        assert_eq!(*state.active_category.borrow(), Category::Padel);
        assert_eq!(state.selected_venue_id.borrow().as_deref(), Some("1"));
    }

    #[test]
    fn test_select_venue_outside_category_is_noop() {
        let state = test_state();
        // "2" es snooker, la categoría activa es padel
        state.select_venue("2");
        assert!(state.selected_venue_id.borrow().is_none());

        state.select_venue("1");
        state.select_venue("999");
        assert_eq!(state.selected_venue_id.borrow().as_deref(), Some("1"));
    }

    #[test]
    fn test_selected_listing_matches_active_category() {
        let state = test_state();
        state.select_venue("6");
        let listing = state.selected_listing().unwrap();
        assert_eq!(listing.venue.name, "Marina Padel Club");
        assert_eq!(listing.category_label, "Padel Court");
    }

    #[test]
    fn test_toggle_drawer_twice_restores() {
        let state = test_state();
        let initial = *state.drawer_open.borrow();
        state.toggle_drawer();
        assert_eq!(*state.drawer_open.borrow(), !initial);
        state.toggle_drawer();
        assert_eq!(*state.drawer_open.borrow(), initial);
    }

    #[test]
    fn test_location_request_fires_at_most_once() {
        let state = test_state();
        assert!(state.begin_location_request());
        assert!(!state.begin_location_request());

        state.apply_location_fix(Coordinates::new(31.42, 74.26));
        assert!(!state.begin_location_request());
    }

    #[test]
    fn test_fix_overwrites_default_center_once() {
        let state = test_state();
        assert_eq!(*state.map_center.borrow(), Coordinates::new(25.2048, 55.2708));

        state.begin_location_request();
        state.apply_location_fix(Coordinates::new(31.42, 74.26));
        assert_eq!(*state.map_center.borrow(), Coordinates::new(31.42, 74.26));
        assert!(state.location.borrow().is_terminal());

        // Un segundo fix simulado no puede ocurrir: el estado ya es terminal
        state.apply_location_fix(Coordinates::new(0.0, 0.0));
        assert_eq!(*state.map_center.borrow(), Coordinates::new(31.42, 74.26));
    }

    #[test]
    fn test_denied_location_keeps_center() {
        let state = test_state();
        state.begin_location_request();
        state.mark_location_unavailable();
        assert_eq!(*state.location.borrow(), LocationFix::Unavailable);
        assert_eq!(*state.map_center.borrow(), Coordinates::new(25.2048, 55.2708));

        // Terminal: un fix tardío tampoco transiciona
        state.apply_location_fix(Coordinates::new(31.42, 74.26));
        assert_eq!(*state.location.borrow(), LocationFix::Unavailable);
    }

    #[test]
    fn test_subscribers_receive_update_types() {
        let state = test_state();
        let drawer_updates = Rc::new(Cell::new(0u32));

        let counter = drawer_updates.clone();
        state.subscribe_to_changes(move |update| {
            if update == UpdateType::Incremental(IncrementalUpdate::Drawer) {
                counter.set(counter.get() + 1);
            }
        });

        state.toggle_drawer();
        state.toggle_drawer();
        assert_eq!(drawer_updates.get(), 2);
    }

    #[test]
    fn test_memo_invalidated_on_category_change() {
        let state = test_state();
        let first = state.visible_venues();
        let again = state.visible_venues();
        assert!(Rc::ptr_eq(&first, &again));

        state.set_active_category("futsal");
        let futsal = state.visible_venues();
        let ids: Vec<&str> = futsal.iter().map(|l| l.venue.id.as_str()).collect();
        assert_eq!(ids, vec!["3"]);
    }
}

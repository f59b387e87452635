// ============================================================================
// VENUE VIEWMODEL - Derivación pura de clubes visibles
// ============================================================================
// SOLO lógica de preparación de datos - Sin estado
// ============================================================================

use crate::models::{Category, Venue};

/// Club decorado con la etiqueta de la categoría activa, listo para
/// presentar en lista, card y mapa
#[derive(Debug, Clone, PartialEq)]
pub struct VenueListing {
    pub venue: Venue,
    pub category_label: &'static str,
}

/// ViewModel de clubes - SOLO lógica de negocio
pub struct VenueViewModel;

impl VenueViewModel {
    /// Filtrar el dataset por categoría exacta. Conserva el orden relativo
    /// del fixture y decora cada resultado con la etiqueta de la categoría.
    /// Determinista: apto para memoizar por categoría.
    pub fn visible_venues(category: Category, venues: &[Venue]) -> Vec<VenueListing> {
        let label = category.label();
        venues
            .iter()
            .filter(|venue| venue.category == category)
            .map(|venue| VenueListing {
                venue: venue.clone(),
                category_label: label,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::venue_fixture;

    #[test]
    fn test_padel_returns_fixture_pair_in_order() {
        let venues = venue_fixture();
        let listings = VenueViewModel::visible_venues(Category::Padel, &venues);
        let ids: Vec<&str> = listings.iter().map(|l| l.venue.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "6"]);
        assert!(listings.iter().all(|l| l.category_label == "Padel Court"));
    }

    #[test]
    fn test_every_category_partitions_fixture() {
        let venues = venue_fixture();
        let mut total = 0;
        for category in Category::ALL {
            let listings = VenueViewModel::visible_venues(category, &venues);
            assert!(listings.iter().all(|l| l.venue.category == category));
            assert!(listings.iter().all(|l| l.category_label == category.label()));
            total += listings.len();
        }
        // Cada club pertenece a exactamente una categoría
        assert_eq!(total, venues.len());
    }

    #[test]
    fn test_order_preserved_within_category() {
        let venues = venue_fixture();
        for category in Category::ALL {
            let listings = VenueViewModel::visible_venues(category, &venues);
            let expected: Vec<&str> = venues
                .iter()
                .filter(|v| v.category == category)
                .map(|v| v.id.as_str())
                .collect();
            let actual: Vec<&str> = listings.iter().map(|l| l.venue.id.as_str()).collect();
            assert_eq!(actual, expected);
        }
    }

    #[test]
    fn test_empty_dataset() {
        let listings = VenueViewModel::visible_venues(Category::Padel, &[]);
        assert!(listings.is_empty());
    }
}

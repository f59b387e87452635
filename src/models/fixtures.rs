// ============================================================================
// FIXTURES - Dataset estático de clubes
// ============================================================================
// El fixture se construye una vez y se inyecta en AppState; el controlador
// nunca lee constantes globales de datos.
// ============================================================================

use crate::models::{Category, Coordinates, Venue};

/// Dataset de clubes de la vista. El orden de inserción es el orden de
/// presentación en lista y en el mapa.
pub fn venue_fixture() -> Vec<Venue> {
    vec![
        Venue {
            id: "1".to_string(),
            name: "Neon Padel Hub".to_string(),
            category: Category::Padel,
            position: Coordinates::new(25.211, 55.275),
            address: "Al Wasl Road, Dubai".to_string(),
            rating: 4.8,
            hours: "10:00 – 23:00".to_string(),
            distance: "1.2 km".to_string(),
            phone: Some("+971 4 330 1182".to_string()),
        },
        Venue {
            id: "2".to_string(),
            name: "Downtown Snooker Lounge".to_string(),
            category: Category::Snooker,
            position: Coordinates::new(25.198, 55.272),
            address: "Downtown Boulevard, Dubai".to_string(),
            rating: 4.6,
            hours: "12:00 – 02:00".to_string(),
            distance: "2.1 km".to_string(),
            phone: None,
        },
        Venue {
            id: "3".to_string(),
            name: "Skyline Futsal Arena".to_string(),
            category: Category::Futsal,
            position: Coordinates::new(25.195, 55.283),
            address: "Business Bay, Dubai".to_string(),
            rating: 4.7,
            hours: "09:00 – 01:00".to_string(),
            distance: "3.0 km".to_string(),
            phone: Some("+971 4 552 7741".to_string()),
        },
        Venue {
            id: "4".to_string(),
            name: "City Indoor Cricket Turf".to_string(),
            category: Category::Cricket,
            position: Coordinates::new(25.215, 55.263),
            address: "Sheikh Zayed Road, Dubai".to_string(),
            rating: 4.5,
            hours: "11:00 – 23:00".to_string(),
            distance: "4.4 km".to_string(),
            phone: None,
        },
        Venue {
            id: "5".to_string(),
            name: "Metro Table Tennis Club".to_string(),
            category: Category::TableTennis,
            position: Coordinates::new(25.205, 55.29),
            address: "Dubai Marina".to_string(),
            rating: 4.4,
            hours: "10:00 – 22:00".to_string(),
            distance: "5.0 km".to_string(),
            phone: None,
        },
        Venue {
            id: "6".to_string(),
            name: "Marina Padel Club".to_string(),
            category: Category::Padel,
            position: Coordinates::new(25.089, 55.147),
            address: "Marina Walk, Dubai".to_string(),
            rating: 4.3,
            hours: "08:00 – 22:00".to_string(),
            distance: "6.5 km".to_string(),
            phone: Some("+971 4 880 2216".to_string()),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_ids_unique_and_ordered() {
        let venues = venue_fixture();
        let ids: Vec<&str> = venues.iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3", "4", "5", "6"]);
    }

    #[test]
    fn test_fixture_ratings_in_range() {
        for venue in venue_fixture() {
            assert!(venue.rating >= 0.0 && venue.rating <= 5.0, "{}", venue.id);
        }
    }
}

// ============================================================================
// CATEGORY - Conjunto cerrado de categorías deportivas
// ============================================================================
// Variante etiquetada en vez de string libre: el match exhaustivo garantiza
// que toda categoría tenga id y etiqueta de presentación.
// ============================================================================

use serde::{Deserialize, Serialize};

/// Categoría de instalación deportiva (conjunto cerrado, definido al inicio)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Snooker,
    Padel,
    Cricket,
    Futsal,
    TableTennis,
}

impl Category {
    /// Todas las categorías, en el orden de los botones del nav
    pub const ALL: [Category; 5] = [
        Category::Snooker,
        Category::Padel,
        Category::Cricket,
        Category::Futsal,
        Category::TableTennis,
    ];

    /// Identificador estable (usado en atributos del DOM y en el fixture)
    pub fn id(&self) -> &'static str {
        match self {
            Category::Snooker => "snooker",
            Category::Padel => "padel",
            Category::Cricket => "cricket",
            Category::Futsal => "futsal",
            Category::TableTennis => "table-tennis",
        }
    }

    /// Etiqueta de presentación
    pub fn label(&self) -> &'static str {
        match self {
            Category::Snooker => "Snooker Clubs",
            Category::Padel => "Padel Court",
            Category::Cricket => "Indoor Cricket Turf",
            Category::Futsal => "Futsal Arena",
            Category::TableTennis => "Table Tennis",
        }
    }

    /// Parsear un id; los ids desconocidos se rechazan con None
    pub fn parse(id: &str) -> Option<Category> {
        Category::ALL.iter().copied().find(|c| c.id() == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_ids() {
        for category in Category::ALL {
            assert_eq!(Category::parse(category.id()), Some(category));
        }
    }

    #[test]
    fn test_parse_unknown_id() {
        assert_eq!(Category::parse("bowling"), None);
        assert_eq!(Category::parse(""), None);
        assert_eq!(Category::parse("PADEL"), None);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Category::Padel.label(), "Padel Court");
        assert_eq!(Category::Snooker.label(), "Snooker Clubs");
        assert_eq!(Category::TableTennis.label(), "Table Tennis");
    }
}

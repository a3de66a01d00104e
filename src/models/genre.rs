use serde::{Deserialize, Serialize};

/// Catalog identifier for a genre
pub type GenreId = u32;

/// Reserved id meaning "no genre filter"; never a real catalog genre
pub const RECOMMENDED_GENRE_ID: GenreId = 0;

const RECOMMENDED_LABEL: &str = "Recommended";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Genre {
    pub id: GenreId,
    pub name: String,
}

impl Genre {
    pub fn new(id: GenreId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// The genre list for a session, immutable once built
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenreCatalog {
    genres: Vec<Genre>,
}

impl GenreCatalog {
    /// Builds the catalog from the directory listing, dropping anything that claims the
    /// reserved id
    pub fn new(genres: Vec<Genre>) -> Self {
        let genres = genres
            .into_iter()
            .filter(|genre| genre.id != RECOMMENDED_GENRE_ID)
            .collect();
        Self { genres }
    }

    pub fn is_empty(&self) -> bool {
        self.genres.is_empty()
    }

    pub fn len(&self) -> usize {
        self.genres.len()
    }

    pub fn name_of(&self, id: GenreId) -> Option<&str> {
        self.genres
            .iter()
            .find(|genre| genre.id == id)
            .map(|genre| genre.name.as_str())
    }

    /// Selectable chips: the Recommended sentinel followed by every catalog genre
    pub fn with_recommended(&self) -> Vec<Genre> {
        std::iter::once(Genre::new(RECOMMENDED_GENRE_ID, RECOMMENDED_LABEL))
            .chain(self.genres.iter().cloned())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> GenreCatalog {
        GenreCatalog::new(vec![
            Genre::new(28, "Action"),
            Genre::new(0, "Bogus"),
            Genre::new(12, "Adventure"),
        ])
    }

    #[test]
    fn test_reserved_id_is_dropped() {
        let catalog = catalog();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.name_of(0), None);
    }

    #[test]
    fn test_name_lookup() {
        let catalog = catalog();
        assert_eq!(catalog.name_of(12), Some("Adventure"));
        assert_eq!(catalog.name_of(99), None);
    }

    #[test]
    fn test_chips_start_with_recommended() {
        let chips = catalog().with_recommended();
        assert_eq!(chips.len(), 3);
        assert_eq!(chips[0], Genre::new(0, "Recommended"));
        assert_eq!(chips[1].name, "Action");
    }
}

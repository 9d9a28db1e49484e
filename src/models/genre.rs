use serde::Serialize;

/// A TMDB genre offered in the filter dropdown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Genre {
    /// TMDB genre id; empty means "no filter"
    pub id: &'static str,
    pub name: &'static str,
}

impl Genre {
    const fn new(id: &'static str, name: &'static str) -> Self {
        Self { id, name }
    }

    pub fn is_any(&self) -> bool {
        self.id.is_empty()
    }
}

pub const GENRES: &[Genre] = &[
    Genre::new("", "Any genre"),
    Genre::new("28", "Action"),
    Genre::new("12", "Adventure"),
    Genre::new("16", "Animation"),
    Genre::new("35", "Comedy"),
    Genre::new("80", "Crime"),
    Genre::new("18", "Drama"),
    Genre::new("14", "Fantasy"),
    Genre::new("27", "Horror"),
    Genre::new("10749", "Romance"),
    Genre::new("878", "Science Fiction"),
    Genre::new("53", "Thriller"),
];

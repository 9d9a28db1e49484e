use serde::{Deserialize, Serialize};
use serde_json::Value;

pub mod genre;
pub mod search;

pub use genre::{Genre, GENRES};
pub use search::{SearchCriteria, SearchMode, SearchRequest};

const TMDB_IMAGE_BASE: &str = "https://image.tmdb.org/t/p/w500";

fn image_url(path: Option<&str>) -> Option<String> {
    path.filter(|p| !p.is_empty())
        .map(|p| format!("{}{}", TMDB_IMAGE_BASE, p))
}

fn year_of(date: Option<&str>) -> Option<&str> {
    date.and_then(|d| d.get(..4)).filter(|y| y.bytes().all(|b| b.is_ascii_digit()))
}

fn str_field<'a>(raw: &'a Value, name: &str) -> Option<&'a str> {
    raw.get(name).and_then(Value::as_str)
}

// ============================================================================
// TMDB API Types
//
// Records are kept as the JSON TMDB sent. Accessors read the few fields the
// pages need and yield `None` when a field is missing or has an odd shape.
// ============================================================================

/// Paged list envelope used by the search, discover and videos endpoints
#[derive(Debug, Clone, Deserialize)]
pub struct ResultList<T> {
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
}

/// One entry of a search or discover result list
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct MovieSummary(pub Value);

impl MovieSummary {
    pub fn id(&self) -> Option<u64> {
        self.0.get("id").and_then(Value::as_u64)
    }

    pub fn title(&self) -> Option<&str> {
        str_field(&self.0, "title")
    }

    pub fn display_title(&self) -> &str {
        self.title().unwrap_or("Untitled")
    }

    pub fn poster_url(&self) -> Option<String> {
        image_url(str_field(&self.0, "poster_path"))
    }

    pub fn release_year(&self) -> Option<&str> {
        year_of(str_field(&self.0, "release_date"))
    }
}

/// Response of the per-movie detail endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct MovieDetail(pub Value);

impl MovieDetail {
    pub fn title(&self) -> Option<&str> {
        str_field(&self.0, "title")
    }

    pub fn display_title(&self) -> &str {
        self.title().unwrap_or("Untitled")
    }

    pub fn tagline(&self) -> Option<&str> {
        str_field(&self.0, "tagline").filter(|t| !t.is_empty())
    }

    pub fn overview(&self) -> Option<&str> {
        str_field(&self.0, "overview").filter(|o| !o.is_empty())
    }

    pub fn runtime(&self) -> Option<u64> {
        self.0.get("runtime").and_then(Value::as_u64).filter(|r| *r > 0)
    }

    pub fn vote_average(&self) -> Option<f64> {
        self.0.get("vote_average").and_then(Value::as_f64)
    }

    pub fn poster_url(&self) -> Option<String> {
        image_url(str_field(&self.0, "poster_path"))
    }

    pub fn backdrop_url(&self) -> Option<String> {
        image_url(str_field(&self.0, "backdrop_path"))
    }

    pub fn release_year(&self) -> Option<&str> {
        year_of(str_field(&self.0, "release_date"))
    }

    /// Comma-separated genre names; entries without a string name are skipped
    pub fn genre_names(&self) -> String {
        self.0
            .get("genres")
            .and_then(Value::as_array)
            .map(|genres| {
                genres
                    .iter()
                    .filter_map(|g| str_field(g, "name"))
                    .collect::<Vec<_>>()
                    .join(", ")
            })
            .unwrap_or_default()
    }
}

/// Entry of the per-movie videos endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct Video(pub Value);

impl Video {
    pub fn key(&self) -> Option<&str> {
        str_field(&self.0, "key")
    }

    pub fn is_youtube_trailer(&self) -> bool {
        str_field(&self.0, "site") == Some("YouTube") && str_field(&self.0, "type") == Some("Trailer")
    }
}

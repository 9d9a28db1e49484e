use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// Raw search form values, trimmed but otherwise as submitted
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchCriteria {
    #[serde(default)]
    pub query: String,
    #[serde(default, rename = "genre")]
    pub genre_id: String,
    #[serde(default)]
    pub year: String,
}

/// Which TMDB endpoint a search goes to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMode {
    /// Free-text title search
    Title,
    /// Catalog browse by filters, most popular first
    Discover,
}

impl SearchMode {
    pub fn path(&self) -> &'static str {
        match self {
            SearchMode::Title => "/search/movie",
            SearchMode::Discover => "/discover/movie",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SearchMode::Title => "title",
            SearchMode::Discover => "discover",
        }
    }
}

/// A validated search, ready to be sent to TMDB
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub mode: SearchMode,
    pub query: Option<String>,
    pub genre_id: Option<String>,
    pub year: Option<String>,
}

impl SearchCriteria {
    pub fn new(
        query: impl Into<String>,
        genre_id: impl Into<String>,
        year: impl Into<String>,
    ) -> Self {
        Self {
            query: query.into(),
            genre_id: genre_id.into(),
            year: year.into(),
        }
        .normalized()
    }

    /// Trims the free-text fields. The genre id is left exactly as submitted.
    pub fn normalized(self) -> Self {
        Self {
            query: self.query.trim().to_string(),
            genre_id: self.genre_id,
            year: self.year.trim().to_string(),
        }
    }

    pub fn mode(&self) -> SearchMode {
        if self.query.is_empty() {
            SearchMode::Discover
        } else {
            SearchMode::Title
        }
    }

    /// Checks the inputs and picks the endpoint.
    ///
    /// Empty fields mean "not set". A non-empty year has to be all digits.
    pub fn to_request(&self) -> AppResult<SearchRequest> {
        if !self.year.is_empty() && !self.year.bytes().all(|b| b.is_ascii_digit()) {
            return Err(AppError::InvalidInput(format!(
                "Year must be a number, got \"{}\"",
                self.year
            )));
        }

        let non_empty = |value: &str| (!value.is_empty()).then(|| value.to_string());

        Ok(SearchRequest {
            mode: self.mode(),
            query: non_empty(&self.query),
            genre_id: non_empty(&self.genre_id),
            year: non_empty(&self.year),
        })
    }
}

impl SearchRequest {
    /// Query parameters for the outbound call, credential and locale included
    pub fn query_params(&self, api_key: &str, language: &str) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("api_key", api_key.to_string()),
            ("language", language.to_string()),
            ("include_adult", "false".to_string()),
        ];

        match self.mode {
            SearchMode::Title => {
                if let Some(query) = &self.query {
                    params.push(("query", query.clone()));
                }
            }
            SearchMode::Discover => params.push(("sort_by", "popularity.desc".to_string())),
        }

        if let Some(genre_id) = &self.genre_id {
            params.push(("with_genres", genre_id.clone()));
        }
        if let Some(year) = &self.year {
            params.push(("primary_release_year", year.clone()));
        }

        params
    }
}

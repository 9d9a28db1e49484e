use std::sync::Arc;

use crate::{
    config::Config,
    error::AppResult,
    services::{MovieDatabase, TmdbProvider},
};

/// Shared application state, read-only once the server is running
#[derive(Clone)]
pub struct AppState {
    /// `None` when no TMDB API key is configured
    pub movie_db: Option<Arc<dyn MovieDatabase>>,
}

impl AppState {
    pub fn new(movie_db: Option<Arc<dyn MovieDatabase>>) -> Self {
        Self { movie_db }
    }

    /// Builds the state from configuration. A missing API key is not an error here.
    pub fn from_config(config: &Config) -> AppResult<Self> {
        let movie_db = TmdbProvider::from_config(config)?
            .map(|provider| Arc::new(provider) as Arc<dyn MovieDatabase>);
        Ok(Self::new(movie_db))
    }

    pub fn movie_db(&self) -> Option<&dyn MovieDatabase> {
        self.movie_db.as_deref()
    }
}

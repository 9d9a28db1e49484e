/// Movie database abstraction
///
/// Handlers only talk to the remote catalog through this trait, so the TMDB
/// client can be swapped for a fake in tests.
use crate::{
    error::AppResult,
    models::{MovieDetail, MovieSummary, SearchRequest, Video},
};

pub mod tmdb;

pub use tmdb::TmdbProvider;

/// Trait for remote movie catalogs
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait MovieDatabase: Send + Sync {
    /// Run a title search or a filtered discovery, depending on the request mode
    async fn search_movies(&self, request: &SearchRequest) -> AppResult<Vec<MovieSummary>>;

    /// Fetch full metadata for one movie
    async fn movie_details(&self, movie_id: u64) -> AppResult<MovieDetail>;

    /// Fetch the videos attached to one movie, in the order the remote returns them
    async fn movie_videos(&self, movie_id: u64) -> AppResult<Vec<Video>>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}

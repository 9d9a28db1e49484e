use crate::{
    models::{MovieDetail, Video},
    services::providers::MovieDatabase,
};

/// Data behind the detail page. Either half may be missing.
#[derive(Debug)]
pub struct MoviePage {
    pub movie: Option<MovieDetail>,
    pub trailer_key: Option<String>,
}

/// First YouTube trailer in the order given; later matches are ignored
pub fn find_trailer(videos: &[Video]) -> Option<&Video> {
    videos.iter().find(|v| v.is_youtube_trailer())
}

/// Loads detail and trailer for one movie.
///
/// Failures are not surfaced: a failed detail call leaves `movie` empty and a
/// failed videos call leaves `trailer_key` empty. The two calls are independent.
pub async fn load_movie_page(provider: &dyn MovieDatabase, movie_id: u64) -> MoviePage {
    let movie = match provider.movie_details(movie_id).await {
        Ok(movie) => Some(movie),
        Err(e) => {
            tracing::warn!(
                movie_id,
                error = %e,
                provider = provider.name(),
                "Movie detail unavailable"
            );
            None
        }
    };

    let trailer_key = match provider.movie_videos(movie_id).await {
        Ok(videos) => find_trailer(&videos).and_then(|v| v.key().map(str::to_string)),
        Err(e) => {
            tracing::warn!(
                movie_id,
                error = %e,
                provider = provider.name(),
                "Movie videos unavailable"
            );
            None
        }
    };

    MoviePage { movie, trailer_key }
}

pub mod movie_detail;
pub mod providers;
pub mod search;

pub use movie_detail::{find_trailer, load_movie_page, MoviePage};
pub use providers::{MovieDatabase, TmdbProvider};
pub use search::{search_movies, SearchOutcome};

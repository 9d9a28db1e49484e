use crate::{
    error::AppError,
    models::{MovieSummary, SearchCriteria},
    services::providers::MovieDatabase,
};

/// What the search page renders: results, or an error next to an empty list
#[derive(Debug)]
pub struct SearchOutcome {
    pub movies: Vec<MovieSummary>,
    pub error: Option<String>,
}

impl SearchOutcome {
    fn failed(message: String) -> Self {
        Self {
            movies: Vec::new(),
            error: Some(message),
        }
    }
}

/// Runs one search or discovery against the movie database.
///
/// Never fails: a missing provider, bad input or any remote failure becomes a
/// message in the outcome. At most one outbound call is made.
pub async fn search_movies(
    provider: Option<&dyn MovieDatabase>,
    criteria: &SearchCriteria,
) -> SearchOutcome {
    let Some(provider) = provider else {
        return SearchOutcome::failed(AppError::MissingApiKey.to_string());
    };

    let request = match criteria.to_request() {
        Ok(request) => request,
        Err(AppError::InvalidInput(msg)) => return SearchOutcome::failed(msg),
        Err(e) => return SearchOutcome::failed(e.to_string()),
    };

    match provider.search_movies(&request).await {
        Ok(movies) => SearchOutcome {
            movies,
            error: None,
        },
        Err(e) => {
            tracing::warn!(
                error = %e,
                mode = request.mode.as_str(),
                provider = provider.name(),
                "Movie search failed"
            );
            SearchOutcome::failed(format!(
                "Something went wrong while talking to TMDB: {}",
                e
            ))
        }
    }
}

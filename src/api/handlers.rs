use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Extension, Form, Json,
};
use serde_json::{json, Value};

use crate::{
    error::{AppError, AppResult, MISSING_API_KEY_MESSAGE},
    middleware::request_id::RequestId,
    models::{SearchCriteria, GENRES},
    services::{load_movie_page, search_movies},
    templates::{render, DetailTemplate, IndexTemplate},
};

use super::AppState;

/// Health check endpoint
pub async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Empty search form
pub async fn index() -> AppResult<Html<String>> {
    let criteria = SearchCriteria::default();
    render(&IndexTemplate {
        movies: &[],
        genres: GENRES,
        error: None,
        criteria: &criteria,
    })
}

/// Runs a title search or a filtered discovery and renders the results
pub async fn search(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Form(criteria): Form<SearchCriteria>,
) -> AppResult<Html<String>> {
    let criteria = criteria.normalized();

    tracing::info!(
        request_id = %request_id,
        mode = criteria.mode().as_str(),
        genre = %criteria.genre_id,
        year = %criteria.year,
        "Processing movie search"
    );

    let outcome = search_movies(state.movie_db(), &criteria).await;

    render(&IndexTemplate {
        movies: &outcome.movies,
        genres: GENRES,
        error: outcome.error.as_deref(),
        criteria: &criteria,
    })
}

/// Detail page with the first YouTube trailer, if any
pub async fn movie_detail(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Path(raw_id): Path<String>,
) -> AppResult<Response> {
    let movie_id = parse_movie_id(&raw_id)?;

    let Some(movie_db) = state.movie_db() else {
        return Ok(MISSING_API_KEY_MESSAGE.into_response());
    };

    tracing::info!(request_id = %request_id, movie_id, "Loading movie detail");

    let page = load_movie_page(movie_db, movie_id).await;

    let html = render(&DetailTemplate {
        movie: page.movie.as_ref(),
        trailer_key: page.trailer_key.as_deref(),
    })?;
    Ok(html.into_response())
}

/// Only plain positive integers name a movie; anything else is treated as an unknown route
fn parse_movie_id(raw: &str) -> AppResult<u64> {
    Some(raw)
        .filter(|s| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()))
        .and_then(|s| s.parse::<u64>().ok())
        .filter(|id| *id > 0)
        .ok_or_else(|| AppError::NotFound(format!("No movie with id {}", raw)))
}

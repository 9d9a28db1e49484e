//! HTML pages rendered with askama.

use askama::Template;
use axum::response::Html;

use crate::{
    error::AppResult,
    models::{Genre, MovieDetail, MovieSummary, SearchCriteria},
};

/// Search form plus the results of the last submission
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate<'a> {
    pub movies: &'a [MovieSummary],
    pub genres: &'a [Genre],
    pub error: Option<&'a str>,
    pub criteria: &'a SearchCriteria,
}

#[derive(Template)]
#[template(path = "detail.html")]
pub struct DetailTemplate<'a> {
    pub movie: Option<&'a MovieDetail>,
    pub trailer_key: Option<&'a str>,
}

/// Renders a template into an HTML response
pub fn render<T: Template>(template: &T) -> AppResult<Html<String>> {
    Ok(Html(template.render()?))
}

/// TMDB (The Movie Database) provider
///
/// API Flow:
/// 1. Search: /search/movie (title) or /discover/movie (filters)
/// 2. Detail: /movie/{id}
/// 3. Videos: /movie/{id}/videos
///
/// The credential travels as the `api_key` query parameter on every call.
use std::time::Duration;

use reqwest::{Client as HttpClient, StatusCode};
use serde::de::DeserializeOwned;

use crate::{
    config::Config,
    error::{AppError, AppResult},
    models::{MovieDetail, MovieSummary, ResultList, SearchRequest, Video},
    services::providers::MovieDatabase,
};

/// Detail and videos bodies are only used on a plain 200
fn is_ok(status: StatusCode) -> bool {
    status == StatusCode::OK
}

#[derive(Clone)]
pub struct TmdbProvider {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
    language: String,
}

impl TmdbProvider {
    /// Creates a provider whose calls each give up after `timeout`
    pub fn new(
        api_key: String,
        api_url: String,
        language: String,
        timeout: Duration,
    ) -> AppResult<Self> {
        let http_client = HttpClient::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            api_key,
            api_url: api_url.trim_end_matches('/').to_string(),
            language,
        })
    }

    /// Builds a provider from configuration, or `None` when no API key is set
    pub fn from_config(config: &Config) -> AppResult<Option<Self>> {
        config
            .api_key()
            .map(|key| {
                Self::new(
                    key.to_string(),
                    config.tmdb_api_url.clone(),
                    config.tmdb_language.clone(),
                    config.tmdb_timeout(),
                )
            })
            .transpose()
    }

    fn base_params(&self) -> [(&'static str, &str); 2] {
        [
            ("api_key", self.api_key.as_str()),
            ("language", self.language.as_str()),
        ]
    }

    /// GET `path` and decode the body when `accepts` approves the status
    async fn get_json<T, P>(
        &self,
        path: &str,
        params: &P,
        accepts: fn(StatusCode) -> bool,
    ) -> AppResult<T>
    where
        T: DeserializeOwned,
        P: serde::Serialize + ?Sized,
    {
        let url = format!("{}{}", self.api_url, path);

        let response = self.http_client.get(&url).query(params).send().await?;

        if !accepts(response.status()) {
            let status = response.status();
            return Err(AppError::ExternalApi(format!(
                "TMDB {} returned status {}",
                path, status
            )));
        }

        Ok(response.json::<T>().await?)
    }
}

#[async_trait::async_trait]
impl MovieDatabase for TmdbProvider {
    async fn search_movies(&self, request: &SearchRequest) -> AppResult<Vec<MovieSummary>> {
        let params = request.query_params(&self.api_key, &self.language);
        let list: ResultList<MovieSummary> = self
            .get_json(request.mode.path(), &params, |status| status.is_success())
            .await?;

        tracing::info!(
            mode = request.mode.as_str(),
            results = list.results.len(),
            provider = self.name(),
            "Movie search completed"
        );

        Ok(list.results)
    }

    async fn movie_details(&self, movie_id: u64) -> AppResult<MovieDetail> {
        self.get_json(&format!("/movie/{}", movie_id), &self.base_params(), is_ok)
            .await
    }

    async fn movie_videos(&self, movie_id: u64) -> AppResult<Vec<Video>> {
        let list: ResultList<Video> = self
            .get_json(
                &format!("/movie/{}/videos", movie_id),
                &self.base_params(),
                is_ok,
            )
            .await?;
        Ok(list.results)
    }

    fn name(&self) -> &'static str {
        "tmdb"
    }
}

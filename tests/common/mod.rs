//! Local stand-in for the TMDB API, served by axum on an ephemeral port.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::{
    extract::{Path, Query, Request},
    http::StatusCode,
    middleware::{self, Next},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde_json::json;

/// Movie id for which the stub detail endpoint answers 404
pub const MISSING_DETAIL_ID: u64 = 13;

/// Movie id for which the stub detail and videos endpoints answer 203 with a valid body
pub const NON_AUTHORITATIVE_ID: u64 = 203;

/// One request the stub received
#[derive(Debug, Clone)]
pub struct Call {
    pub path: String,
    pub params: HashMap<String, String>,
}

#[derive(Clone, Default)]
pub struct Calls(Arc<Mutex<Vec<Call>>>);

impl Calls {
    pub fn all(&self) -> Vec<Call> {
        self.0.lock().unwrap().clone()
    }

    pub fn count(&self) -> usize {
        self.0.lock().unwrap().len()
    }

    fn record(&self, call: Call) {
        self.0.lock().unwrap().push(call);
    }
}

/// Serves `routes` locally and returns its base URL along with a call log
pub async fn spawn_stub(routes: Router) -> (String, Calls) {
    let calls = Calls::default();
    let recorder = calls.clone();

    let app = routes.layer(middleware::from_fn(move |request: Request, next: Next| {
        let recorder = recorder.clone();
        async move {
            let params = Query::<HashMap<String, String>>::try_from_uri(request.uri())
                .map(|Query(params)| params)
                .unwrap_or_default();
            recorder.record(Call {
                path: request.uri().path().to_string(),
                params,
            });
            next.run(request).await
        }
    }));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{}", address), calls)
}

/// A well-behaved TMDB
pub fn tmdb_stub() -> Router {
    Router::new()
        .route(
            "/search/movie",
            get(|Query(params): Query<HashMap<String, String>>| async move {
                let query = params.get("query").cloned().unwrap_or_default();
                Json(json!({
                    "page": 1,
                    "results": [
                        { "id": 101, "title": format!("{} Returns", query), "release_date": "2004-05-01" },
                        { "id": 102, "title": format!("{} Forever", query), "popularity": 12.5 }
                    ],
                    "total_pages": 1,
                    "total_results": 2
                }))
            }),
        )
        .route(
            "/discover/movie",
            get(|| async {
                Json(json!({
                    "page": 1,
                    "results": [{ "id": 201, "title": "Popular Pick", "release_date": "2021-07-09" }]
                }))
            }),
        )
        .route(
            "/movie/:id",
            get(|Path(id): Path<u64>| async move {
                if id == NON_AUTHORITATIVE_ID {
                    return (
                        StatusCode::NON_AUTHORITATIVE_INFORMATION,
                        Json(json!({ "id": id, "title": "Proxied Copy" })),
                    )
                        .into_response();
                }
                if id == MISSING_DETAIL_ID {
                    return (
                        StatusCode::NOT_FOUND,
                        Json(json!({ "status_code": 34, "status_message": "not found" })),
                    )
                        .into_response();
                }
                Json(json!({
                    "id": id,
                    "title": "The Matrix",
                    "tagline": "Welcome to the Real World.",
                    "release_date": "1999-03-30",
                    "runtime": 136,
                    "genres": [{ "id": 28, "name": "Action" }]
                }))
                .into_response()
            }),
        )
        .route(
            "/movie/:id/videos",
            get(|Path(id): Path<u64>| async move {
                if id == NON_AUTHORITATIVE_ID {
                    return (
                        StatusCode::NON_AUTHORITATIVE_INFORMATION,
                        Json(json!({
                            "results": [{ "key": "proxied", "site": "YouTube", "type": "Trailer" }]
                        })),
                    )
                        .into_response();
                }
                Json(json!({
                    "id": 603,
                    "results": [
                        { "key": "behind", "site": "YouTube", "type": "Featurette" },
                        { "key": "m8tr1x", "site": "YouTube", "type": "Trailer" },
                        { "key": "later", "site": "YouTube", "type": "Trailer" }
                    ]
                }))
                .into_response()
            }),
        )
}

/// A TMDB whose result lists mix well-formed and malformed records
pub fn ragged_stub() -> Router {
    Router::new()
        .route(
            "/discover/movie",
            get(|| async {
                Json(json!({
                    "results": [
                        { "id": 1, "title": "Good One" },
                        { "title": "No Id Here" }
                    ]
                }))
            }),
        )
        .route(
            "/movie/:id",
            get(|Path(id): Path<u64>| async move {
                Json(json!({
                    "id": id,
                    "title": "Shown Anyway",
                    "genres": [{ "id": 1, "name": null }, { "id": 18, "name": "Drama" }]
                }))
            }),
        )
        .route(
            "/movie/:id/videos",
            get(|| async {
                Json(json!({
                    "results": [
                        { "key": 42, "site": ["YouTube"], "type": null },
                        { "key": "r4gg3d", "site": "YouTube", "type": "Trailer" }
                    ]
                }))
            }),
        )
}

/// A TMDB that fails every call
pub fn failing_stub() -> Router {
    Router::new().fallback(|| async { StatusCode::SERVICE_UNAVAILABLE })
}

/// A TMDB whose search answers with a body that is not JSON
pub fn garbage_stub() -> Router {
    Router::new()
        .route("/search/movie", get(|| async { "<html>maintenance</html>" }))
        .route("/discover/movie", get(|| async { "<html>maintenance</html>" }))
}

/// A TMDB that answers too slowly
pub fn slow_stub() -> Router {
    Router::new().fallback(|| async {
        tokio::time::sleep(std::time::Duration::from_secs(3)).await;
        Json(json!({ "results": [] }))
    })
}

pub fn params_of<'a>(call: &'a Call, name: &str) -> Option<&'a str> {
    call.params.get(name).map(String::as_str)
}

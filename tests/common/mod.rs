// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use f1_explorer::config::Config;
use f1_explorer::routes::create_router;
use f1_explorer::services::{Catalog, FavoritesStore};
use f1_explorer::AppState;
use std::sync::Arc;
use tempfile::TempDir;
use tower::ServiceExt;

/// Load the real dataset shipped with the crate.
#[allow(dead_code)]
pub fn load_test_catalog() -> Catalog {
    Catalog::load_from_file("data/f1_2025.json")
        .expect("Failed to load catalog - is data/ committed?")
}

/// Create a test app backed by the real dataset and a favorites document
/// inside a fresh temp directory. Keep the `TempDir` alive for the test.
#[allow(dead_code)]
pub fn create_test_app() -> (Router, Arc<AppState>, TempDir) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let config = Config {
        favorites_path: dir.path().join("favorites.json"),
        ..Config::default()
    };

    let state = Arc::new(AppState {
        favorites: FavoritesStore::new(config.favorites_path.clone()),
        catalog: load_test_catalog(),
        config,
    });

    (create_router(state.clone()), state, dir)
}

/// GET `uri` and decode the JSON body.
#[allow(dead_code)]
pub async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    read_json(response).await
}

/// Send a JSON body with `method` to `uri` and decode the JSON response.
#[allow(dead_code)]
pub async fn send_json(
    app: Router,
    method: &str,
    uri: &str,
    body: serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    read_json(response).await
}

async fn read_json(response: axum::response::Response) -> (StatusCode, serde_json::Value) {
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .unwrap();
    // Extractor rejections are plain text; keep them readable in asserts.
    let json = serde_json::from_slice(&body).unwrap_or_else(|_| {
        serde_json::Value::String(String::from_utf8_lossy(&body).into_owned())
    });
    (status, json)
}

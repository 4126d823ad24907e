// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Search route.

use crate::models::{Constructor, Driver};
use crate::services::search::search;
use crate::AppState;
use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/search", get(get_search))
}

#[derive(Deserialize)]
struct SearchQuery {
    #[serde(default)]
    q: String,
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct SearchResponse {
    /// The query as received
    pub query: String,
    pub drivers: Vec<Driver>,
    pub constructors: Vec<Constructor>,
}

/// Search drivers and constructors. A blank query returns no results.
async fn get_search(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchQuery>,
) -> Json<SearchResponse> {
    let results = search(
        &params.q,
        state.catalog.drivers(),
        state.catalog.constructors(),
        state.catalog.aliases(),
    );

    Json(SearchResponse {
        query: params.q,
        drivers: results.drivers,
        constructors: results.constructors,
    })
}

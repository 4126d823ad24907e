// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Constructor list and constructor detail routes.

use crate::error::{AppError, Result};
use crate::models::{Constructor, Driver, FavoriteKind};
use crate::routes::with_favorites;
use crate::AppState;
use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Team routes.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/teams", get(get_teams))
        .route("/api/teams/{constructor_id}", get(get_team))
}

#[derive(Deserialize)]
struct TeamsQuery {
    season: Option<String>,
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct TeamsResponse {
    pub season: String,
    pub constructors: Vec<Constructor>,
}

/// All constructors.
async fn get_teams(
    State(state): State<Arc<AppState>>,
    Query(params): Query<TeamsQuery>,
) -> Json<TeamsResponse> {
    let season = params
        .season
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| state.config.default_season.clone());

    Json(TeamsResponse {
        season,
        constructors: state.catalog.constructors().to_vec(),
    })
}

/// Constructor detail response.
#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct TeamDetailResponse {
    pub team: Constructor,
    /// Drivers racing for this constructor, team aliases resolved
    pub drivers: Vec<Driver>,
    pub is_favorite: bool,
}

async fn get_team(
    State(state): State<Arc<AppState>>,
    Path(constructor_id): Path<String>,
) -> Result<Json<TeamDetailResponse>> {
    let team = state
        .catalog
        .constructor(&constructor_id)
        .cloned()
        .ok_or_else(|| AppError::NotFound(format!("Team {} not found", constructor_id)))?;
    let drivers = state.catalog.drivers_for_team(&team);

    let id = team.constructor_id.clone();
    let is_favorite = with_favorites(&state, move |store| {
        Ok(store.is_favorite(FavoriteKind::Constructor, &id))
    })
    .await?;

    Ok(Json(TeamDetailResponse {
        team,
        drivers,
        is_favorite,
    }))
}

// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Driver list and driver detail routes.

use crate::error::{AppError, Result};
use crate::models::{Constructor, Driver, FavoriteKind};
use crate::routes::with_favorites;
use crate::services::listing::{list_drivers, DriverListing, DriverQuery};
use crate::AppState;
use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Driver routes.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/drivers", get(get_drivers))
        .route("/api/drivers/{driver_id}", get(get_driver))
}

/// Filtered, paginated driver list.
///
/// Page parameters that do not parse fall back to defaults rather than
/// rejecting the request.
async fn get_drivers(
    State(state): State<Arc<AppState>>,
    Query(params): Query<DriverQuery>,
) -> Json<DriverListing> {
    Json(list_drivers(
        &state.catalog,
        &params,
        &state.config.default_season,
    ))
}

/// Driver detail response.
#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct DriverDetailResponse {
    pub driver: Driver,
    /// Constructor the driver races for, if it is in the catalog
    pub team: Option<Constructor>,
    pub season: String,
    pub is_favorite: bool,
}

async fn get_driver(
    State(state): State<Arc<AppState>>,
    Path(driver_id): Path<String>,
) -> Result<Json<DriverDetailResponse>> {
    let driver = state
        .catalog
        .driver(&driver_id)
        .cloned()
        .ok_or_else(|| AppError::NotFound(format!("Driver {} not found", driver_id)))?;
    let team = state.catalog.team_for_driver(&driver).cloned();

    let id = driver.driver_id.clone();
    let is_favorite = with_favorites(&state, move |store| {
        Ok(store.is_favorite(FavoriteKind::Driver, &id))
    })
    .await?;

    Ok(Json(DriverDetailResponse {
        driver,
        team,
        season: state.config.default_season.clone(),
        is_favorite,
    }))
}

// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Favorites routes.

use crate::error::{AppError, Result};
use crate::models::{Constructor, Driver, FavoriteKind, Favorites};
use crate::routes::with_favorites;
use crate::AppState;
use axum::{extract::State, routing::get, Json, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Favorites routes.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route(
        "/api/favorites",
        get(get_favorites)
            .post(add_favorite)
            .delete(remove_favorite),
    )
}

/// Favorited entities, resolved against the catalog.
#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct FavoritesResponse {
    pub drivers: Vec<Driver>,
    pub constructors: Vec<Constructor>,
}

async fn get_favorites(State(state): State<Arc<AppState>>) -> Result<Json<FavoritesResponse>> {
    let favorites = with_favorites(&state, |store| Ok(store.load()?)).await?;
    let (drivers, constructors) = state.catalog.resolve_favorites(&favorites);

    Ok(Json(FavoritesResponse {
        drivers,
        constructors,
    }))
}

/// Body for add/remove.
#[derive(Debug, Deserialize)]
pub struct FavoriteRequest {
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub id: Option<String>,
}

impl FavoriteRequest {
    /// Check for a known kind and a non-empty id.
    fn validate(self) -> Result<(FavoriteKind, String)> {
        let kind = self.kind.unwrap_or_default();
        let id = self.id.unwrap_or_default();

        if kind.is_empty() || id.is_empty() {
            return Err(AppError::BadRequest(
                "Both 'type' and 'id' are required".to_string(),
            ));
        }

        let kind = kind
            .parse::<FavoriteKind>()
            .map_err(|e| AppError::BadRequest(e.to_string()))?;
        Ok((kind, id))
    }
}

/// Add a driver or constructor to favorites. Returns the stored document.
async fn add_favorite(
    State(state): State<Arc<AppState>>,
    Json(request): Json<FavoriteRequest>,
) -> Result<Json<Favorites>> {
    let (kind, id) = request.validate()?;
    let favorites = with_favorites(&state, move |store| Ok(store.add(kind, &id)?)).await?;
    Ok(Json(favorites))
}

/// Remove a driver or constructor from favorites. Removing an id that is
/// not a favorite succeeds. Returns the stored document.
async fn remove_favorite(
    State(state): State<Arc<AppState>>,
    Json(request): Json<FavoriteRequest>,
) -> Result<Json<Favorites>> {
    let (kind, id) = request.validate()?;
    let favorites = with_favorites(&state, move |store| Ok(store.remove(kind, &id)?)).await?;
    Ok(Json(favorites))
}

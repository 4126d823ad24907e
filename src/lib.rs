// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! F1 Explorer: browse Formula-1 drivers and constructors.
//!
//! This crate provides the query engine (filtering, pagination, search)
//! over a fixed driver/constructor dataset, a file-backed favorites store,
//! and a small JSON API on top of both.

pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

use config::Config;
use services::{Catalog, FavoritesStore};

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub catalog: Catalog,
    pub favorites: FavoritesStore,
}

// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod aliases;
pub mod catalog;
pub mod favorites;
pub mod filter;
pub mod listing;
pub mod pagination;
pub mod search;

pub use aliases::TeamAliases;
pub use catalog::{Catalog, CatalogError};
pub use favorites::{FavoritesError, FavoritesStore};
pub use filter::{FilterCriteria, FilterOptions};
pub use listing::{DriverListing, DriverQuery};
pub use pagination::{Page, PageInfo, PageRequest};
pub use search::SearchResults;

// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Data models for the application.

pub mod constructor;
pub mod driver;
pub mod favorites;

pub use constructor::Constructor;
pub use driver::Driver;
pub use favorites::{FavoriteKind, Favorites};

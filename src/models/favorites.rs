// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Favorites document model.
//!
//! Persisted as a single JSON object:
//!
//! ```json
//! {
//!     "drivers": ["max_verstappen"],
//!     "constructors": ["ferrari"]
//! }
//! ```

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Favorited driver and constructor identifiers.
///
/// Each list holds an identifier at most once. Field order is fixed
/// (`drivers`, then `constructors`) so serialization is byte-stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Favorites {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub drivers: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub constructors: Vec<String>,
}

/// A missing or `null` list is an empty list.
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

impl Favorites {
    /// Identifiers of the given kind.
    pub fn ids(&self, kind: FavoriteKind) -> &[String] {
        match kind {
            FavoriteKind::Driver => &self.drivers,
            FavoriteKind::Constructor => &self.constructors,
        }
    }

    fn ids_mut(&mut self, kind: FavoriteKind) -> &mut Vec<String> {
        match kind {
            FavoriteKind::Driver => &mut self.drivers,
            FavoriteKind::Constructor => &mut self.constructors,
        }
    }

    pub fn contains(&self, kind: FavoriteKind, id: &str) -> bool {
        self.ids(kind).iter().any(|existing| existing == id)
    }

    /// Append `id` unless already present. Returns `true` if the set changed.
    pub fn insert(&mut self, kind: FavoriteKind, id: &str) -> bool {
        if self.contains(kind, id) {
            return false;
        }
        self.ids_mut(kind).push(id.to_string());
        true
    }

    /// Drop repeated ids, keeping the first occurrence of each. Returns
    /// `true` if anything was removed.
    pub fn dedup(&mut self) -> bool {
        let before = self.drivers.len() + self.constructors.len();
        for ids in [&mut self.drivers, &mut self.constructors] {
            let mut seen = HashSet::new();
            ids.retain(|id| seen.insert(id.clone()));
        }
        self.drivers.len() + self.constructors.len() != before
    }

    /// Drop every occurrence of `id`. Returns `true` if the set changed.
    pub fn remove(&mut self, kind: FavoriteKind, id: &str) -> bool {
        let ids = self.ids_mut(kind);
        let before = ids.len();
        ids.retain(|existing| existing != id);
        ids.len() != before
    }
}

/// Which favorites list an identifier belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FavoriteKind {
    Driver,
    Constructor,
}

impl FavoriteKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FavoriteKind::Driver => "driver",
            FavoriteKind::Constructor => "constructor",
        }
    }
}

impl fmt::Display for FavoriteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FavoriteKind {
    type Err = UnknownFavoriteKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "driver" => Ok(FavoriteKind::Driver),
            "constructor" => Ok(FavoriteKind::Constructor),
            other => Err(UnknownFavoriteKind(other.to_string())),
        }
    }
}

/// Returned when parsing a kind other than "driver" or "constructor".
#[derive(Debug, thiserror::Error)]
#[error("Unknown favorite type: {0:?} (expected \"driver\" or \"constructor\")")]
pub struct UnknownFavoriteKind(pub String);

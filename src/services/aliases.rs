// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Team name alias resolution.
//!
//! Drivers carry a free-form team display name that does not always match
//! the constructor's display name ("Haas" vs "Haas F1 Team"). Every place
//! that associates a driver with a constructor goes through this table.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Maps a driver-side team name to the constructor display name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TeamAliases(BTreeMap<String, String>);

impl TeamAliases {
    pub fn new<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self(
            pairs
                .into_iter()
                .map(|(alias, canonical)| (alias.into(), canonical.into()))
                .collect(),
        )
    }

    /// Resolve a team name to its canonical constructor name.
    /// Names without an alias are already canonical.
    pub fn canonical<'a>(&'a self, team: &'a str) -> &'a str {
        self.0.get(team).map(String::as_str).unwrap_or(team)
    }

    /// Whether a driver's team refers to the named constructor.
    pub fn same_team(&self, driver_team: &str, constructor_name: &str) -> bool {
        driver_team == constructor_name
            || self.canonical(driver_team) == self.canonical(constructor_name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Constructor (team) model.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// A Formula-1 constructor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "camelCase")]
pub struct Constructor {
    /// Unique identifier (e.g., "red_bull")
    pub constructor_id: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub image: String,
    /// Display name (e.g., "Red Bull Racing")
    pub name: String,
    pub nationality: String,
    /// Hex colour used for team accents
    #[serde(default)]
    pub team_color: String,
}

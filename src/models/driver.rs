// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Driver model.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// A Formula-1 driver as shipped in the dataset file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "camelCase")]
pub struct Driver {
    /// Unique identifier (e.g., "max_verstappen")
    pub driver_id: String,
    /// Permanent car number; empty for drivers without one
    #[serde(default)]
    pub permanent_number: String,
    /// Three-letter timing code (e.g., "VER")
    pub code: String,
    #[serde(default)]
    pub image: String,
    pub given_name: String,
    pub family_name: String,
    /// ISO 8601 date
    pub date_of_birth: String,
    pub nationality: String,
    /// Team display name. Not normalized: may be an alias of the
    /// constructor name (see `TeamAliases`).
    pub team: String,
    /// Category tag (e.g., "Race Driver", "Reserve Driver")
    pub driver_type: String,
}

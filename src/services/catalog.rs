// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Driver and constructor dataset, loaded once at startup.

use crate::models::{Constructor, Driver, Favorites};
use crate::services::aliases::TeamAliases;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// On-disk layout of the dataset file.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CatalogFile {
    #[serde(default)]
    season: Option<String>,
    #[serde(default)]
    team_aliases: TeamAliases,
    #[serde(default)]
    drivers: Vec<Driver>,
    #[serde(default)]
    constructors: Vec<Constructor>,
}

/// Immutable view of all drivers and constructors for a season.
#[derive(Debug, Default, Clone)]
pub struct Catalog {
    season: Option<String>,
    drivers: Vec<Driver>,
    constructors: Vec<Constructor>,
    aliases: TeamAliases,
}

impl Catalog {
    /// Load the dataset from a JSON file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let json_data =
            fs::read_to_string(path.as_ref()).map_err(|e| CatalogError::IoError(e.to_string()))?;
        Self::load_from_json(&json_data)
    }

    /// Load the dataset from a JSON string.
    pub fn load_from_json(json_data: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile =
            serde_json::from_str(json_data).map_err(|e| CatalogError::ParseError(e.to_string()))?;

        let catalog = Self::new(file.drivers, file.constructors, file.team_aliases);
        catalog.check_unique_ids()?;

        tracing::info!(
            drivers = catalog.drivers.len(),
            constructors = catalog.constructors.len(),
            aliases = catalog.aliases.len(),
            "Loaded catalog"
        );
        Ok(Self {
            season: file.season,
            ..catalog
        })
    }

    /// Build a catalog from in-memory collections.
    pub fn new(drivers: Vec<Driver>, constructors: Vec<Constructor>, aliases: TeamAliases) -> Self {
        Self {
            season: None,
            drivers,
            constructors,
            aliases,
        }
    }

    fn check_unique_ids(&self) -> Result<(), CatalogError> {
        let mut seen = std::collections::HashSet::new();
        for driver in &self.drivers {
            if !seen.insert(driver.driver_id.as_str()) {
                return Err(CatalogError::DuplicateId(driver.driver_id.clone()));
            }
        }
        seen.clear();
        for constructor in &self.constructors {
            if !seen.insert(constructor.constructor_id.as_str()) {
                return Err(CatalogError::DuplicateId(constructor.constructor_id.clone()));
            }
        }
        Ok(())
    }

    /// Season declared by the dataset file, if any.
    pub fn season(&self) -> Option<&str> {
        self.season.as_deref()
    }

    pub fn drivers(&self) -> &[Driver] {
        &self.drivers
    }

    pub fn constructors(&self) -> &[Constructor] {
        &self.constructors
    }

    pub fn aliases(&self) -> &TeamAliases {
        &self.aliases
    }

    pub fn driver(&self, driver_id: &str) -> Option<&Driver> {
        self.drivers.iter().find(|d| d.driver_id == driver_id)
    }

    pub fn constructor(&self, constructor_id: &str) -> Option<&Constructor> {
        self.constructors
            .iter()
            .find(|c| c.constructor_id == constructor_id)
    }

    /// The constructor a driver races for, resolving team aliases.
    pub fn team_for_driver(&self, driver: &Driver) -> Option<&Constructor> {
        self.constructors
            .iter()
            .find(|c| self.aliases.same_team(&driver.team, &c.name))
    }

    /// All drivers associated with a constructor, in dataset order.
    pub fn drivers_for_team(&self, constructor: &Constructor) -> Vec<Driver> {
        self.drivers
            .iter()
            .filter(|d| self.aliases.same_team(&d.team, &constructor.name))
            .cloned()
            .collect()
    }

    /// Resolve favorited identifiers into entities, keeping favorites order.
    /// Identifiers that are not in the catalog are skipped.
    pub fn resolve_favorites(&self, favorites: &Favorites) -> (Vec<Driver>, Vec<Constructor>) {
        let driver_by_id: HashMap<&str, &Driver> = self
            .drivers
            .iter()
            .map(|d| (d.driver_id.as_str(), d))
            .collect();
        let constructor_by_id: HashMap<&str, &Constructor> = self
            .constructors
            .iter()
            .map(|c| (c.constructor_id.as_str(), c))
            .collect();

        let drivers = favorites
            .drivers
            .iter()
            .filter_map(|id| driver_by_id.get(id.as_str()).map(|d| (*d).clone()))
            .collect();
        let constructors = favorites
            .constructors
            .iter()
            .filter_map(|id| constructor_by_id.get(id.as_str()).map(|c| (*c).clone()))
            .collect();

        (drivers, constructors)
    }
}

/// Errors from catalog loading.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Failed to read file: {0}")]
    IoError(String),

    #[error("Failed to parse dataset: {0}")]
    ParseError(String),

    #[error("Duplicate identifier in dataset: {0}")]
    DuplicateId(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    const SMALL: &str = r#"{
        "teamAliases": {"Haas": "Haas F1 Team"},
        "constructors": [
            {"constructorId": "haas", "name": "Haas F1 Team", "nationality": "American"},
            {"constructorId": "ferrari", "name": "Ferrari", "nationality": "Italian"}
        ],
        "drivers": [
            {"driverId": "ocon", "permanentNumber": "31", "code": "OCO", "givenName": "Esteban",
             "familyName": "Ocon", "dateOfBirth": "1996-09-17", "nationality": "French",
             "team": "Haas", "driverType": "Race Driver"},
            {"driverId": "leclerc", "permanentNumber": "16", "code": "LEC", "givenName": "Charles",
             "familyName": "Leclerc", "dateOfBirth": "1997-10-16", "nationality": "Monegasque",
             "team": "Ferrari", "driverType": "Race Driver"}
        ]
    }"#;

    #[test]
    fn test_load_from_json() {
        let catalog = Catalog::load_from_json(SMALL).unwrap();
        assert_eq!(catalog.drivers().len(), 2);
        assert_eq!(catalog.constructors().len(), 2);
        assert_eq!(catalog.season(), None);
    }

    #[test]
    fn test_team_for_driver_uses_aliases() {
        let catalog = Catalog::load_from_json(SMALL).unwrap();
        let ocon = catalog.driver("ocon").unwrap();
        assert_eq!(catalog.team_for_driver(ocon).unwrap().constructor_id, "haas");

        let haas = catalog.constructor("haas").unwrap();
        let drivers = catalog.drivers_for_team(haas);
        assert_eq!(drivers.len(), 1);
        assert_eq!(drivers[0].driver_id, "ocon");
    }

    #[test]
    fn test_resolve_favorites_skips_unknown() {
        let catalog = Catalog::load_from_json(SMALL).unwrap();
        let favorites = Favorites {
            drivers: vec!["leclerc".into(), "ghost".into(), "ocon".into()],
            constructors: vec!["ferrari".into(), "brawn".into()],
        };
        let (drivers, constructors) = catalog.resolve_favorites(&favorites);
        let ids: Vec<&str> = drivers.iter().map(|d| d.driver_id.as_str()).collect();
        assert_eq!(ids, vec!["leclerc", "ocon"]);
        assert_eq!(constructors.len(), 1);
        assert_eq!(constructors[0].constructor_id, "ferrari");
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let json = r#"{"constructors": [
            {"constructorId": "x", "name": "X", "nationality": "A"},
            {"constructorId": "x", "name": "Y", "nationality": "B"}
        ]}"#;
        assert!(matches!(
            Catalog::load_from_json(json),
            Err(CatalogError::DuplicateId(id)) if id == "x"
        ));
    }

    #[test]
    fn test_invalid_json_is_parse_error() {
        assert!(matches!(
            Catalog::load_from_json("not json"),
            Err(CatalogError::ParseError(_))
        ));
    }
}

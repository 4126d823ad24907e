// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Free-text search across drivers and constructors.
//!
//! A constructor hit also pulls in the drivers racing for it, so searching
//! "ferrari" returns the team and both of its drivers.

use crate::models::{Constructor, Driver};
use crate::services::aliases::TeamAliases;
use serde::Serialize;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Matching drivers and constructors, each in dataset order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct SearchResults {
    pub drivers: Vec<Driver>,
    pub constructors: Vec<Constructor>,
}

impl SearchResults {
    pub fn is_empty(&self) -> bool {
        self.drivers.is_empty() && self.constructors.is_empty()
    }
}

/// Case-insensitive substring search.
///
/// Constructors match on name or nationality. Drivers match on given name,
/// family name, code or nationality, on a literal substring of their
/// permanent number, or by racing for a matched constructor.
pub fn search(
    query: &str,
    drivers: &[Driver],
    constructors: &[Constructor],
    aliases: &TeamAliases,
) -> SearchResults {
    let trimmed = query.trim();
    let needle = trimmed.to_lowercase();
    if needle.is_empty() {
        return SearchResults::default();
    }

    let matched_constructors: Vec<Constructor> = constructors
        .iter()
        .filter(|c| contains_ci(&c.name, &needle) || contains_ci(&c.nationality, &needle))
        .cloned()
        .collect();

    let matched_drivers: Vec<Driver> = drivers
        .iter()
        .filter(|d| {
            driver_matches(d, trimmed, &needle)
                || matched_constructors
                    .iter()
                    .any(|c| aliases.same_team(&d.team, &c.name))
        })
        .cloned()
        .collect();

    tracing::debug!(
        query = %trimmed,
        drivers = matched_drivers.len(),
        constructors = matched_constructors.len(),
        "Search complete"
    );

    SearchResults {
        drivers: matched_drivers,
        constructors: matched_constructors,
    }
}

fn driver_matches(driver: &Driver, raw: &str, needle: &str) -> bool {
    contains_ci(&driver.given_name, needle)
        || contains_ci(&driver.family_name, needle)
        || contains_ci(&driver.code, needle)
        || contains_ci(&driver.nationality, needle)
        // Numbers are digits only, so case folding is irrelevant here.
        || driver.permanent_number.contains(raw)
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn driver(id: &str, given: &str, family: &str, number: &str, team: &str) -> Driver {
        Driver {
            driver_id: id.to_string(),
            permanent_number: number.to_string(),
            code: family.chars().take(3).collect::<String>().to_uppercase(),
            image: String::new(),
            given_name: given.to_string(),
            family_name: family.to_string(),
            date_of_birth: "2000-01-01".to_string(),
            nationality: "Testish".to_string(),
            team: team.to_string(),
            driver_type: "Race Driver".to_string(),
        }
    }

    fn constructor(id: &str, name: &str, nationality: &str) -> Constructor {
        Constructor {
            constructor_id: id.to_string(),
            icon: String::new(),
            image: String::new(),
            name: name.to_string(),
            nationality: nationality.to_string(),
            team_color: String::new(),
        }
    }

    fn fixture() -> (Vec<Driver>, Vec<Constructor>, TeamAliases) {
        let drivers = vec![
            driver("max_verstappen", "Max", "Verstappen", "1", "Red Bull"),
            driver("leclerc", "Charles", "Leclerc", "16", "Ferrari"),
            driver("hamilton", "Lewis", "Hamilton", "44", "Ferrari"),
            driver("ocon", "Esteban", "Ocon", "31", "Haas"),
        ];
        let constructors = vec![
            constructor("ferrari", "Ferrari", "Italian"),
            constructor("red_bull", "Red Bull Racing", "Austrian"),
            constructor("haas", "Haas F1 Team", "American"),
        ];
        let aliases =
            TeamAliases::new([("Haas", "Haas F1 Team"), ("Red Bull", "Red Bull Racing")]);
        (drivers, constructors, aliases)
    }

    fn driver_ids(results: &SearchResults) -> Vec<&str> {
        results.drivers.iter().map(|d| d.driver_id.as_str()).collect()
    }

    #[test]
    fn test_blank_query_returns_nothing() {
        let (drivers, constructors, aliases) = fixture();
        assert!(search("", &drivers, &constructors, &aliases).is_empty());
        assert!(search("   \t", &drivers, &constructors, &aliases).is_empty());
    }

    #[test]
    fn test_family_name_substring() {
        let (drivers, constructors, aliases) = fixture();
        let results = search("ver", &drivers, &constructors, &aliases);
        assert_eq!(driver_ids(&results), vec!["max_verstappen"]);
        assert!(results.constructors.is_empty());
    }

    #[test]
    fn test_constructor_match_pulls_in_drivers() {
        let (drivers, constructors, aliases) = fixture();
        let results = search("ferrari", &drivers, &constructors, &aliases);
        assert_eq!(results.constructors.len(), 1);
        assert_eq!(driver_ids(&results), vec!["leclerc", "hamilton"]);
    }

    #[test]
    fn test_constructor_match_resolves_aliases() {
        let (drivers, constructors, aliases) = fixture();
        let results = search("american", &drivers, &constructors, &aliases);
        assert_eq!(results.constructors[0].constructor_id, "haas");
        assert_eq!(driver_ids(&results), vec!["ocon"]);
    }

    #[test]
    fn test_no_duplicate_when_both_paths_match() {
        let (drivers, constructors, aliases) = fixture();
        // Verstappen and Leclerc match on their own names and via their teams.
        let results = search("r", &drivers, &constructors, &aliases);
        assert_eq!(
            driver_ids(&results),
            vec!["max_verstappen", "leclerc", "hamilton", "ocon"]
        );
    }

    #[test]
    fn test_permanent_number() {
        let (drivers, constructors, aliases) = fixture();
        let results = search(" 4 ", &drivers, &constructors, &aliases);
        assert_eq!(driver_ids(&results), vec!["hamilton"]);
    }

    #[test]
    fn test_case_insensitive_query() {
        let (drivers, constructors, aliases) = fixture();
        assert_eq!(
            search("FERRARI", &drivers, &constructors, &aliases),
            search("ferrari", &drivers, &constructors, &aliases)
        );
    }
}

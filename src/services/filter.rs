// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Equality filters over the driver list and the option sets that feed them.

use crate::models::Driver;
use serde::Serialize;
use std::collections::BTreeSet;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Optional equality predicates. `None` means "no constraint".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub team: Option<String>,
    pub nationality: Option<String>,
    pub driver_type: Option<String>,
}

impl FilterCriteria {
    /// Build criteria from raw query values, treating empty strings as absent.
    pub fn from_params(
        team: Option<&str>,
        nationality: Option<&str>,
        driver_type: Option<&str>,
    ) -> Self {
        Self {
            team: non_empty(team),
            nationality: non_empty(nationality),
            driver_type: non_empty(driver_type),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.team.is_none() && self.nationality.is_none() && self.driver_type.is_none()
    }

    /// Whether a driver satisfies every present predicate.
    pub fn matches(&self, driver: &Driver) -> bool {
        field_matches(self.team.as_deref(), &driver.team)
            && field_matches(self.nationality.as_deref(), &driver.nationality)
            && field_matches(self.driver_type.as_deref(), &driver.driver_type)
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(str::to_string)
}

fn field_matches(wanted: Option<&str>, actual: &str) -> bool {
    match wanted {
        Some(w) => w == actual,
        None => true,
    }
}

/// Drivers matching `criteria`, in their original order.
pub fn filter_drivers(drivers: &[Driver], criteria: &FilterCriteria) -> Vec<Driver> {
    drivers
        .iter()
        .filter(|d| criteria.matches(d))
        .cloned()
        .collect()
}

/// Distinct, non-empty values available for each filter, sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct FilterOptions {
    pub teams: Vec<String>,
    pub nationalities: Vec<String>,
    pub driver_types: Vec<String>,
}

/// Collect the filter option sets from a driver list.
pub fn filter_options(drivers: &[Driver]) -> FilterOptions {
    FilterOptions {
        teams: distinct(drivers, |d| &d.team),
        nationalities: distinct(drivers, |d| &d.nationality),
        driver_types: distinct(drivers, |d| &d.driver_type),
    }
}

fn distinct<F>(drivers: &[Driver], field: F) -> Vec<String>
where
    F: Fn(&Driver) -> &String,
{
    drivers
        .iter()
        .map(field)
        .filter(|v| !v.is_empty())
        .cloned()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn driver(id: &str, team: &str, nationality: &str, driver_type: &str) -> Driver {
        Driver {
            driver_id: id.to_string(),
            permanent_number: String::new(),
            code: id.to_uppercase(),
            image: String::new(),
            given_name: id.to_string(),
            family_name: id.to_string(),
            date_of_birth: "2000-01-01".to_string(),
            nationality: nationality.to_string(),
            team: team.to_string(),
            driver_type: driver_type.to_string(),
        }
    }

    fn sample() -> Vec<Driver> {
        vec![
            driver("a", "Ferrari", "British", "Race Driver"),
            driver("b", "McLaren", "British", "Race Driver"),
            driver("c", "Ferrari", "Chinese", "Reserve Driver"),
            driver("d", "", "", ""),
        ]
    }

    fn ids(drivers: &[Driver]) -> Vec<&str> {
        drivers.iter().map(|d| d.driver_id.as_str()).collect()
    }

    #[test]
    fn test_empty_criteria_keeps_everything() {
        let drivers = sample();
        let criteria = FilterCriteria::from_params(Some(""), None, Some(""));
        assert!(criteria.is_empty());
        assert_eq!(ids(&filter_drivers(&drivers, &criteria)), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_single_predicate() {
        let drivers = sample();
        let criteria = FilterCriteria::from_params(Some("Ferrari"), None, None);
        assert_eq!(ids(&filter_drivers(&drivers, &criteria)), vec!["a", "c"]);
    }

    #[test]
    fn test_all_predicates_must_match() {
        let drivers = sample();
        let criteria =
            FilterCriteria::from_params(Some("Ferrari"), Some("British"), Some("Race Driver"));
        assert_eq!(ids(&filter_drivers(&drivers, &criteria)), vec!["a"]);

        let criteria = FilterCriteria::from_params(Some("McLaren"), Some("Chinese"), None);
        assert!(filter_drivers(&drivers, &criteria).is_empty());
    }

    #[test]
    fn test_match_is_exact() {
        let drivers = sample();
        let criteria = FilterCriteria::from_params(Some("ferrari"), None, None);
        assert!(filter_drivers(&drivers, &criteria).is_empty());
    }

    #[test]
    fn test_empty_input() {
        let criteria = FilterCriteria::from_params(Some("Ferrari"), None, None);
        assert!(filter_drivers(&[], &criteria).is_empty());
        assert_eq!(filter_options(&[]), FilterOptions::default());
    }

    #[test]
    fn test_options_are_distinct_sorted_and_non_empty() {
        let options = filter_options(&sample());
        assert_eq!(options.teams, vec!["Ferrari", "McLaren"]);
        assert_eq!(options.nationalities, vec!["British", "Chinese"]);
        assert_eq!(options.driver_types, vec!["Race Driver", "Reserve Driver"]);
    }
}

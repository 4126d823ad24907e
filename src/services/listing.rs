// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Driver list page: filters, filter options and pagination in one result.

use crate::models::Driver;
use crate::services::catalog::Catalog;
use crate::services::filter::{filter_drivers, filter_options, FilterCriteria, FilterOptions};
use crate::services::pagination::{paginate, PageInfo, PageRequest};
use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Raw driver list parameters as they arrive in the query string.
///
/// Every field is optional; absent and empty are equivalent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DriverQuery {
    pub season: Option<String>,
    pub team: Option<String>,
    pub nationality: Option<String>,
    #[serde(rename = "driverType")]
    pub driver_type: Option<String>,
    pub page: Option<String>,
    #[serde(rename = "perPage")]
    pub per_page: Option<String>,
}

impl DriverQuery {
    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria::from_params(
            self.team.as_deref(),
            self.nationality.as_deref(),
            self.driver_type.as_deref(),
        )
    }

    pub fn page_request(&self) -> PageRequest {
        PageRequest::from_params(self.page.as_deref(), self.per_page.as_deref())
    }
}

/// Filter values echoed back so the caller can re-render the selection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct AppliedFilters {
    pub team: String,
    pub nationality: String,
    pub driver_type: String,
}

/// Driver list response.
#[derive(Debug, Clone, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct DriverListing {
    pub season: String,
    /// Current page of filtered drivers
    pub drivers: Vec<Driver>,
    /// Every driver, unfiltered (for cross-referencing)
    pub all_drivers: Vec<Driver>,
    /// Options derived from the unfiltered list
    pub options: FilterOptions,
    pub pagination: PageInfo,
    pub filters: AppliedFilters,
}

/// Filter, then paginate, the catalog's drivers.
pub fn list_drivers(catalog: &Catalog, query: &DriverQuery, default_season: &str) -> DriverListing {
    let all_drivers = catalog.drivers();
    let criteria = query.criteria();
    let filtered = filter_drivers(all_drivers, &criteria);
    let page = paginate(&filtered, query.page_request());

    let season = query
        .season
        .as_deref()
        .filter(|s| !s.is_empty())
        .unwrap_or(default_season)
        .to_string();

    tracing::debug!(
        season = %season,
        team = ?criteria.team,
        nationality = ?criteria.nationality,
        driver_type = ?criteria.driver_type,
        matched = page.info.total_items,
        page = page.info.current_page,
        "Listing drivers"
    );

    DriverListing {
        season,
        drivers: page.items,
        all_drivers: all_drivers.to_vec(),
        options: filter_options(all_drivers),
        pagination: page.info,
        filters: AppliedFilters {
            team: criteria.team.unwrap_or_default(),
            nationality: criteria.nationality.unwrap_or_default(),
            driver_type: criteria.driver_type.unwrap_or_default(),
        },
    }
}

// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Gym domain model shown on cards and the detail view.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Display value for a gym with no name.
pub const NO_NAME: &str = "Unknown Facility";
/// Display value for a gym with no address.
pub const NO_ADDRESS: &str = "No Address";
/// Display value for a gym with no phone number.
pub const NO_PHONE: &str = "No Phone";
/// Display value for a gym with no listed activities.
pub const NO_ACTIVITIES: &str = "N/A";
/// Display value for a gym with no named location.
pub const NO_LOCATION: &str = "No Location";
/// Display value for a gym with no status.
pub const NO_STATUS: &str = "No Status";

/// A gym from the open-data catalog, normalized for display.
///
/// Every text field holds a displayable value; missing source data has
/// already been replaced with a placeholder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Gym {
    /// Server record ID, or a generated UUID when the record had none
    pub id: String,
    pub name: String,
    pub address: String,
    pub phone: String,
    /// Activity or facility type (e.g. "Basketball")
    pub activities: String,
    /// Site name shown on the detail view
    pub location_name: String,
    /// Open/closed status as published
    pub status: String,
    /// Link to the published schedule, if any
    pub schedule_url: Option<String>,
    pub location: Option<GeoPoint>,
}

/// WGS84 coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Raw open-data records as returned by the Cary "open-gym" dataset.
//!
//! The dataset has been republished under several schemas, so a record is
//! decoded from a loose JSON object and each field is looked up under every
//! key it has been seen under. Nothing here is validated.

use serde::Deserialize;
use serde_json::{Map, Value};

const NAME_KEYS: &[&str] = &[
    "name",
    "name_of_facility",
    "facility_title",
    "facility_name",
    "gym_name",
];
const ADDRESS_KEYS: &[&str] = &["address", "physical_address", "address11"];
const PHONE_KEYS: &[&str] = &["phone", "phone_number"];
const ACTIVITY_KEYS: &[&str] = &["activities", "activity", "type", "facility_type"];
const LOCATION_NAME_KEYS: &[&str] = &["location_name", "location"];
const STATUS_KEYS: &[&str] = &["status"];
const SCHEDULE_KEYS: &[&str] = &["schedule_url", "schedule", "url", "website"];
const GEO_KEYS: &[&str] = &["geopoint", "geo_point_2d", "geo_point"];
const ID_KEYS: &[&str] = &["recordid", "id"];

/// Top-level response of the records endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct GymsEnvelope {
    /// Total matching records on the server (not just this page)
    #[serde(default)]
    pub total_count: Option<u64>,
    pub results: Vec<GymRecord>,
}

/// One flat record from the dataset. Every field may be absent.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "Map<String, Value>")]
pub struct GymRecord {
    pub id: Option<String>,
    pub name: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub activities: Option<String>,
    /// Named site the gym is in (e.g. a park or community center)
    pub location_name: Option<String>,
    pub status: Option<String>,
    pub schedule_url: Option<String>,
    pub geo_point: Option<RawGeoPoint>,
}

/// Coordinates as published (`{"lat": .., "lon": ..}`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawGeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl From<Map<String, Value>> for GymRecord {
    fn from(fields: Map<String, Value>) -> Self {
        Self {
            id: first_text(&fields, ID_KEYS),
            name: first_text(&fields, NAME_KEYS),
            address: first_text(&fields, ADDRESS_KEYS),
            phone: first_text(&fields, PHONE_KEYS),
            activities: first_text(&fields, ACTIVITY_KEYS),
            location_name: first_text(&fields, LOCATION_NAME_KEYS),
            status: first_text(&fields, STATUS_KEYS),
            schedule_url: first_text(&fields, SCHEDULE_KEYS),
            geo_point: GEO_KEYS
                .iter()
                .find_map(|key| fields.get(*key).and_then(geo_point)),
        }
    }
}

/// First key holding a scalar value, rendered as text.
fn first_text(fields: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| match fields.get(*key)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    })
}

fn geo_point(value: &Value) -> Option<RawGeoPoint> {
    let lat = value.get("lat")?.as_f64()?;
    let lon = value.get("lon")?.as_f64()?;
    Some(RawGeoPoint { lat, lon })
}

// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Conversion from raw open-data records to `Gym` domain entities.

use crate::models::gym::{
    NO_ACTIVITIES, NO_ADDRESS, NO_LOCATION, NO_NAME, NO_PHONE, NO_STATUS,
};
use crate::models::record::RawGeoPoint;
use crate::models::{GeoPoint, Gym, GymRecord};

/// Map one record, substituting placeholders for absent fields.
///
/// The only source of non-determinism is the generated ID for records that
/// carry none.
pub fn to_gym(record: GymRecord) -> Gym {
    Gym {
        id: present(record.id).unwrap_or_else(|| uuid::Uuid::new_v4().to_string()),
        name: or_placeholder(record.name, NO_NAME),
        address: or_placeholder(record.address, NO_ADDRESS),
        phone: or_placeholder(record.phone, NO_PHONE),
        activities: or_placeholder(record.activities, NO_ACTIVITIES),
        location_name: or_placeholder(record.location_name, NO_LOCATION),
        status: or_placeholder(record.status, NO_STATUS),
        schedule_url: present(record.schedule_url),
        location: record.geo_point.map(|RawGeoPoint { lat, lon }| GeoPoint { lat, lon }),
    }
}

/// Map a page of records, preserving order.
pub fn to_gyms(records: Vec<GymRecord>) -> Vec<Gym> {
    records.into_iter().map(to_gym).collect()
}

/// Trimmed value, or `None` if missing or blank.
fn present(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn or_placeholder(value: Option<String>, placeholder: &str) -> String {
    present(value).unwrap_or_else(|| placeholder.to_string())
}

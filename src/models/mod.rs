// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod gym;
pub mod record;

pub use gym::{GeoPoint, Gym};
pub use record::{GymRecord, GymsEnvelope};

// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Open Gym: browse Town of Cary open gyms as a swipeable card stack.
//!
//! This crate fetches the "open-gym" dataset from the Cary open-data
//! catalog, normalizes it into `Gym` entities and serves the fetch state and
//! candidate stack to a card-swiping frontend.

pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;

use config::Config;
use services::GymSession;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub session: GymSession,
}

impl AppState {
    /// Build the session from configuration.
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let session = GymSession::from_config(&config)?;
        Ok(Self { config, session })
    }
}

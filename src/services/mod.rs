// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod fetch;
pub mod mapper;
pub mod open_data;
pub mod session;
pub mod swipe;

pub use fetch::{FetchState, GymFetcher};
pub use open_data::OpenDataClient;
pub use session::GymSession;
pub use swipe::{CandidateStack, DragTracker, SwipeDirection, SwipeOutcome, SwipeThreshold};

// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Gym browsing API consumed by the card-stack UI.

use crate::error::{AppError, Result};
use crate::models::Gym;
use crate::services::{FetchState, SwipeDirection, SwipeOutcome};
use crate::AppState;
use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Upper bound on IDs accepted in paths and bodies.
const MAX_GYM_ID_LEN: usize = 128;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/gyms", get(get_gyms))
        .route("/api/gyms/refresh", post(refresh_gyms))
        .route("/api/gyms/swipe", post(swipe_gym))
        .route("/api/gyms/release", post(release_drag))
        .route("/api/gyms/{id}", get(get_gym).delete(remove_gym))
}

// ─── Snapshot ────────────────────────────────────────────────

/// Status of the last fetch. The fetched page is not repeated here: the
/// candidates are the only list the UI renders.
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum FetchStatus {
    Idle,
    Loading,
    /// `count` is the size of the fetched page, before any swipes
    Success { count: usize },
    Error { message: String },
}

impl From<FetchState> for FetchStatus {
    fn from(state: FetchState) -> Self {
        match state {
            FetchState::Idle => FetchStatus::Idle,
            FetchState::Loading => FetchStatus::Loading,
            FetchState::Success { gyms } => FetchStatus::Success { count: gyms.len() },
            FetchState::Error { message } => FetchStatus::Error { message },
        }
    }
}

/// Fetch status and remaining candidates, top first.
#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct GymsResponse {
    pub fetch: FetchStatus,
    pub candidates: Vec<Gym>,
}

fn snapshot(state: &AppState) -> GymsResponse {
    GymsResponse {
        fetch: state.session.fetch_state().into(),
        candidates: state.session.candidates(),
    }
}

async fn get_gyms(State(state): State<Arc<AppState>>) -> Json<GymsResponse> {
    Json(snapshot(&state))
}

/// Re-fetch from the open-data API. Responds once the fetch has resolved;
/// a failed fetch is reported in `fetch`, not as an HTTP error.
async fn refresh_gyms(State(state): State<Arc<AppState>>) -> Json<GymsResponse> {
    tracing::info!("Refreshing gyms");
    state.session.refresh().await;
    Json(snapshot(&state))
}

// ─── Swiping ─────────────────────────────────────────────────

#[derive(Deserialize)]
struct SwipeRequest {
    direction: SwipeDirection,
    /// Gym to swipe; the top card when omitted
    gym_id: Option<String>,
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct SwipeResponse {
    pub gym: Gym,
    pub direction: SwipeDirection,
    /// Transient "Liked ..." / "Passed on ..." text
    pub message: String,
    pub remaining: usize,
}

impl From<SwipeOutcome> for SwipeResponse {
    fn from(outcome: SwipeOutcome) -> Self {
        Self {
            gym: outcome.gym,
            direction: outcome.direction,
            message: outcome.message,
            remaining: outcome.remaining,
        }
    }
}

async fn swipe_gym(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SwipeRequest>,
) -> Result<Json<SwipeResponse>> {
    if let Some(id) = &req.gym_id {
        validate_gym_id(id)?;
    }

    let outcome = state
        .session
        .swipe(req.gym_id.as_deref(), req.direction)
        .ok_or_else(|| match &req.gym_id {
            Some(id) => AppError::NotFound(format!("Gym {} is not a candidate", id)),
            None => AppError::NotFound("No gyms left to swipe".to_string()),
        })?;

    Ok(Json(outcome.into()))
}

#[derive(Deserialize)]
struct ReleaseRequest {
    /// Horizontal drag offset at release (positive = right)
    displacement_x: f32,
    screen_width: f32,
}

#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ReleaseResponse {
    /// Present if the drag crossed the threshold and a card was removed
    pub swiped: Option<SwipeResponse>,
    /// Offset the card should animate back to
    pub offset_x: f32,
    pub threshold: f32,
}

/// End of a drag gesture on the top card.
async fn release_drag(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ReleaseRequest>,
) -> Result<Json<ReleaseResponse>> {
    if !req.screen_width.is_finite() || req.screen_width <= 0.0 {
        return Err(AppError::BadRequest(
            "screen_width must be a positive number".to_string(),
        ));
    }
    if !req.displacement_x.is_finite() {
        return Err(AppError::BadRequest(
            "displacement_x must be a finite number".to_string(),
        ));
    }

    let swiped = state
        .session
        .release_drag(req.displacement_x, req.screen_width)
        .map(SwipeResponse::from);

    Ok(Json(ReleaseResponse {
        swiped,
        offset_x: 0.0,
        threshold: state.session.threshold().limit(req.screen_width),
    }))
}

// ─── Detail / removal ────────────────────────────────────────

async fn get_gym(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Gym>> {
    validate_gym_id(&id)?;
    state
        .session
        .gym(&id)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Gym {} not found", id)))
}

async fn remove_gym(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Gym>> {
    validate_gym_id(&id)?;
    let gym = state
        .session
        .remove(&id)
        .ok_or_else(|| AppError::NotFound(format!("Gym {} not found", id)))?;
    tracing::debug!(gym_id = %gym.id, "Gym removed");
    Ok(Json(gym))
}

fn validate_gym_id(id: &str) -> Result<()> {
    if id.is_empty() || id.len() > MAX_GYM_ID_LEN {
        return Err(AppError::BadRequest(format!(
            "Gym id must be 1 to {} characters",
            MAX_GYM_ID_LEN
        )));
    }
    Ok(())
}

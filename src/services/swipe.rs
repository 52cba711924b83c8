// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Swipe handling for the gym card stack.
//!
//! Geometry (drag offset, threshold, rotation, fade) is kept apart from the
//! stack that actually removes gyms, so the decision can be tested without a
//! UI.

use crate::models::Gym;
use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Smallest and largest accepted threshold, as a fraction of screen width.
pub const MIN_THRESHOLD_FRACTION: f32 = 0.25;
pub const MAX_THRESHOLD_FRACTION: f32 = 0.5;

/// Horizontal offset per degree of card tilt.
const ROTATION_DIVISOR: f32 = 60.0;
const MAX_ROTATION_DEGREES: f32 = 15.0;
/// Opacity of a card dragged a full screen width.
const MIN_ALPHA: f32 = 0.5;

/// Which way a card left the stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum SwipeDirection {
    /// Pass
    Left,
    /// Like
    Right,
}

impl SwipeDirection {
    /// Transient message shown after the swipe.
    pub fn message(self, gym_name: &str) -> String {
        match self {
            SwipeDirection::Right => format!("Liked {}", gym_name),
            SwipeDirection::Left => format!("Passed on {}", gym_name),
        }
    }
}

/// Displacement a card must exceed, relative to the screen width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeThreshold {
    fraction: f32,
}

impl Default for SwipeThreshold {
    fn default() -> Self {
        Self {
            fraction: MIN_THRESHOLD_FRACTION,
        }
    }
}

impl SwipeThreshold {
    /// Fraction is clamped to `[0.25, 0.5]`; NaN falls back to the default.
    pub fn new(fraction: f32) -> Self {
        if fraction.is_nan() {
            return Self::default();
        }
        Self {
            fraction: fraction.clamp(MIN_THRESHOLD_FRACTION, MAX_THRESHOLD_FRACTION),
        }
    }

    pub fn fraction(&self) -> f32 {
        self.fraction
    }

    /// Absolute displacement limit for a screen of the given width.
    pub fn limit(&self, screen_width: f32) -> f32 {
        screen_width * self.fraction
    }

    /// Direction of the swipe, or `None` if the card should snap back.
    pub fn decide(&self, displacement_x: f32, screen_width: f32) -> Option<SwipeDirection> {
        let limit = self.limit(screen_width);
        if displacement_x > limit {
            Some(SwipeDirection::Right)
        } else if displacement_x < -limit {
            Some(SwipeDirection::Left)
        } else {
            None
        }
    }
}

/// Running drag offset of the top card.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DragTracker {
    offset_x: f32,
    offset_y: f32,
}

impl DragTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn offset(&self) -> (f32, f32) {
        (self.offset_x, self.offset_y)
    }

    /// Accumulate one drag event.
    pub fn drag(&mut self, dx: f32, dy: f32) {
        self.offset_x += dx;
        self.offset_y += dy;
    }

    /// Card tilt in degrees, proportional to horizontal offset.
    pub fn rotation_degrees(&self) -> f32 {
        (self.offset_x / ROTATION_DIVISOR).clamp(-MAX_ROTATION_DEGREES, MAX_ROTATION_DEGREES)
    }

    /// Card opacity: 1.0 at rest, fading to 0.5 at a full screen width.
    pub fn alpha(&self, screen_width: f32) -> f32 {
        if screen_width <= 0.0 {
            return 1.0;
        }
        let progress = (self.offset_x.abs() / screen_width).min(1.0);
        1.0 - progress * (1.0 - MIN_ALPHA)
    }

    /// End the drag. Returns the swipe direction if the threshold was
    /// crossed. The offset always returns to zero.
    pub fn release(
        &mut self,
        threshold: SwipeThreshold,
        screen_width: f32,
    ) -> Option<SwipeDirection> {
        let decision = threshold.decide(self.offset_x, screen_width);
        *self = Self::default();
        decision
    }
}

/// Result of a swipe that removed a gym.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SwipeOutcome {
    pub gym: Gym,
    pub direction: SwipeDirection,
    pub message: String,
    /// Stack size right after this removal
    pub remaining: usize,
}

/// Gyms still available to swipe on. Index 0 is the top card.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CandidateStack {
    gyms: Vec<Gym>,
}

impl CandidateStack {
    pub fn new(gyms: Vec<Gym>) -> Self {
        Self { gyms }
    }

    pub fn top(&self) -> Option<&Gym> {
        self.gyms.first()
    }

    pub fn len(&self) -> usize {
        self.gyms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.gyms.is_empty()
    }

    pub fn as_slice(&self) -> &[Gym] {
        &self.gyms
    }

    pub fn get(&self, id: &str) -> Option<&Gym> {
        self.gyms.iter().find(|g| g.id == id)
    }

    /// Remove the top card.
    pub fn swipe(&mut self, direction: SwipeDirection) -> Option<SwipeOutcome> {
        if self.gyms.is_empty() {
            return None;
        }
        let gym = self.gyms.remove(0);
        Some(self.outcome(gym, direction))
    }

    /// Remove a specific card as a swipe.
    pub fn swipe_gym(&mut self, id: &str, direction: SwipeDirection) -> Option<SwipeOutcome> {
        let gym = self.remove(id)?;
        Some(self.outcome(gym, direction))
    }

    /// Remove a gym by identity, wherever it is in the stack.
    pub fn remove(&mut self, id: &str) -> Option<Gym> {
        let index = self.gyms.iter().position(|g| g.id == id)?;
        Some(self.gyms.remove(index))
    }

    /// Replace the whole stack with a fresh fetch result.
    pub fn replace(&mut self, gyms: Vec<Gym>) {
        self.gyms = gyms;
    }

    fn outcome(&self, gym: Gym, direction: SwipeDirection) -> SwipeOutcome {
        let message = direction.message(&gym.name);
        SwipeOutcome {
            gym,
            direction,
            message,
            remaining: self.gyms.len(),
        }
    }
}

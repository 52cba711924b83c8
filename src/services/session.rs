// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! A gym browsing session: the fetch state plus the swipeable stack.
//!
//! The fetcher is the only writer of the fetch state; swipe/remove calls are
//! the only writers of the candidate stack, apart from a successful refresh
//! which replaces it wholesale.

use crate::config::Config;
use crate::models::Gym;
use crate::services::fetch::{FetchState, GymFetcher};
use crate::services::open_data::OpenDataClient;
use crate::services::swipe::{
    CandidateStack, DragTracker, SwipeDirection, SwipeOutcome, SwipeThreshold,
};
use tokio::sync::watch;

pub struct GymSession {
    fetcher: GymFetcher,
    candidates: watch::Sender<CandidateStack>,
    threshold: SwipeThreshold,
}

impl GymSession {
    pub fn new(client: OpenDataClient, threshold: SwipeThreshold) -> Self {
        let (candidates, _) = watch::channel(CandidateStack::default());
        Self {
            fetcher: GymFetcher::new(client),
            candidates,
            threshold,
        }
    }

    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        Ok(Self::new(
            OpenDataClient::from_config(config)?,
            SwipeThreshold::new(config.swipe_threshold_fraction),
        ))
    }

    pub fn threshold(&self) -> SwipeThreshold {
        self.threshold
    }

    pub fn fetch_state(&self) -> FetchState {
        self.fetcher.state()
    }

    pub fn subscribe_fetch(&self) -> watch::Receiver<FetchState> {
        self.fetcher.subscribe()
    }

    /// Current candidates, top first.
    pub fn candidates(&self) -> Vec<Gym> {
        self.candidates.borrow().as_slice().to_vec()
    }

    pub fn subscribe_candidates(&self) -> watch::Receiver<CandidateStack> {
        self.candidates.subscribe()
    }

    /// Look up a candidate for the detail view.
    pub fn gym(&self, id: &str) -> Option<Gym> {
        self.candidates.borrow().get(id).cloned()
    }

    /// Fetch again. On success the candidate stack is replaced; on error it
    /// is left as it was. The stack is replaced before `Success` reaches
    /// fetch subscribers.
    pub async fn refresh(&self) -> FetchState {
        self.fetcher
            .fetch_then(|state| {
                if let FetchState::Success { gyms } = state {
                    tracing::info!(count = gyms.len(), "Replacing candidate stack");
                    self.candidates
                        .send_replace(CandidateStack::new(gyms.clone()));
                }
            })
            .await
    }

    /// Swipe the given gym, or the top card when `gym_id` is `None`.
    pub fn swipe(&self, gym_id: Option<&str>, direction: SwipeDirection) -> Option<SwipeOutcome> {
        let mut outcome = None;
        self.candidates.send_if_modified(|stack| {
            outcome = match gym_id {
                Some(id) => stack.swipe_gym(id, direction),
                None => stack.swipe(direction),
            };
            outcome.is_some()
        });

        if let Some(o) = &outcome {
            tracing::debug!(gym_id = %o.gym.id, direction = ?o.direction, "Gym swiped");
        }
        outcome
    }

    /// Finish a drag of the top card. Swipes it if the displacement crossed
    /// the threshold; otherwise the card snaps back and nothing changes.
    pub fn release_drag(&self, displacement_x: f32, screen_width: f32) -> Option<SwipeOutcome> {
        let mut drag = DragTracker::new();
        drag.drag(displacement_x, 0.0);
        let direction = drag.release(self.threshold, screen_width)?;
        self.swipe(None, direction)
    }

    /// Remove a gym by identity without recording a direction.
    pub fn remove(&self, id: &str) -> Option<Gym> {
        let mut removed = None;
        self.candidates.send_if_modified(|stack| {
            removed = stack.remove(id);
            removed.is_some()
        });
        removed
    }
}

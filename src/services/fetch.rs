// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Fetch orchestration: wraps the open-data call in an observable
//! idle/loading/success/error state.

use crate::models::Gym;
use crate::services::mapper;
use crate::services::open_data::OpenDataClient;
use serde::Serialize;
use tokio::sync::{watch, Mutex};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Observable state of the gym fetch. Exactly one variant is active.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum FetchState {
    /// No fetch has been started yet.
    Idle,
    Loading,
    Success { gyms: Vec<Gym> },
    Error { message: String },
}

impl FetchState {
    /// True for `Success` and `Error`.
    pub fn is_terminal(&self) -> bool {
        matches!(self, FetchState::Success { .. } | FetchState::Error { .. })
    }
}

/// Runs the remote fetch and publishes its state.
///
/// One writer, many readers: consumers call [`GymFetcher::subscribe`] and
/// re-render on change.
pub struct GymFetcher {
    client: OpenDataClient,
    state: watch::Sender<FetchState>,
    /// Held for the duration of a fetch so calls never interleave.
    in_flight: Mutex<()>,
}

impl GymFetcher {
    pub fn new(client: OpenDataClient) -> Self {
        let (state, _) = watch::channel(FetchState::Idle);
        Self {
            client,
            state,
            in_flight: Mutex::new(()),
        }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> FetchState {
        self.state.borrow().clone()
    }

    /// Receiver notified on every state change.
    pub fn subscribe(&self) -> watch::Receiver<FetchState> {
        self.state.subscribe()
    }

    /// Publish `Loading`, fetch and map the first page, then publish and
    /// return exactly one terminal state.
    ///
    /// Failures are not retried; the caller decides whether to fetch again.
    pub async fn fetch(&self) -> FetchState {
        self.fetch_then(|_| ()).await
    }

    /// Like [`GymFetcher::fetch`], but runs `before_publish` on the terminal
    /// state while the fetch lock is still held and before subscribers see
    /// it. State derived from the result is therefore in place by the time
    /// anyone is notified.
    pub async fn fetch_then<F>(&self, before_publish: F) -> FetchState
    where
        F: FnOnce(&FetchState),
    {
        let _guard = self.in_flight.lock().await;

        self.state.send_replace(FetchState::Loading);

        let terminal = match self.client.fetch_gyms().await {
            Ok(envelope) => FetchState::Success {
                gyms: mapper::to_gyms(envelope.results),
            },
            Err(err) => {
                tracing::warn!(error = %err, "Gym fetch failed");
                FetchState::Error {
                    message: err.user_message(),
                }
            }
        };

        before_publish(&terminal);
        self.state.send_replace(terminal.clone());
        terminal
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FetchError;
    use std::time::Duration;

    fn fetcher(base_url: &str) -> GymFetcher {
        GymFetcher::new(OpenDataClient::new(base_url, 20, Duration::from_secs(2)).unwrap())
    }

    #[test]
    fn test_starts_idle() {
        let fetcher = fetcher("http://127.0.0.1:9");
        assert_eq!(fetcher.state(), FetchState::Idle);
        assert!(!fetcher.state().is_terminal());
    }

    #[tokio::test]
    async fn test_unreachable_server_is_connectivity_error() {
        // Bind then drop to get a port with nothing listening.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let fetcher = fetcher(&format!("http://{}", addr));
        let mut rx = fetcher.subscribe();

        let terminal = fetcher.fetch().await;
        assert_eq!(
            terminal,
            FetchState::Error {
                message: FetchError::CONNECTIVITY_MESSAGE.to_string()
            }
        );
        assert_eq!(fetcher.state(), terminal);
        assert!(rx.has_changed().unwrap());
        assert_eq!(*rx.borrow_and_update(), terminal);
    }

    #[tokio::test]
    async fn test_hook_runs_before_terminal_is_published() {
        let fetcher = fetcher("http://127.0.0.1:9");
        let rx = fetcher.subscribe();

        let terminal = fetcher
            .fetch_then(|state| {
                assert!(state.is_terminal());
                // Subscribers still see the in-progress state.
                assert_eq!(*rx.borrow(), FetchState::Loading);
            })
            .await;

        assert_eq!(*rx.borrow(), terminal);
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_value(FetchState::Error {
            message: "boom".to_string(),
        })
        .unwrap();
        assert_eq!(json, serde_json::json!({"status": "error", "message": "boom"}));

        let json = serde_json::to_value(FetchState::Loading).unwrap();
        assert_eq!(json, serde_json::json!({"status": "loading"}));

        let json = serde_json::to_value(FetchState::Success { gyms: vec![] }).unwrap();
        assert_eq!(json, serde_json::json!({"status": "success", "gyms": []}));
    }
}

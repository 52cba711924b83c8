// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Candidate stack change notification.

use axum::http::StatusCode;
use open_gym::services::{GymSession, OpenDataClient, SwipeDirection, SwipeThreshold};
use std::time::Duration;

mod common;

async fn loaded_session() -> GymSession {
    let server = common::spawn_open_data(StatusCode::OK, common::sample_body()).await;
    let session = GymSession::new(
        OpenDataClient::new(&server.base_url, 20, Duration::from_secs(2)).unwrap(),
        SwipeThreshold::new(0.5),
    );
    session.refresh().await;
    session
}

#[tokio::test]
async fn test_snap_back_does_not_notify() {
    let session = loaded_session().await;
    let mut rx = session.subscribe_candidates();
    rx.borrow_and_update();

    // 150 < 400 * 0.5
    assert!(session.release_drag(150.0, 400.0).is_none());
    assert!(!rx.has_changed().unwrap());
    assert_eq!(session.candidates().len(), 4);
}

#[tokio::test]
async fn test_swipe_notifies_once_per_removal() {
    let session = loaded_session().await;
    let mut rx = session.subscribe_candidates();
    rx.borrow_and_update();

    let outcome = session.release_drag(250.0, 400.0).unwrap();
    assert_eq!(outcome.direction, SwipeDirection::Right);
    assert!(rx.has_changed().unwrap());
    assert_eq!(rx.borrow_and_update().len(), 3);

    assert!(session.remove("does-not-exist").is_none());
    assert!(!rx.has_changed().unwrap());

    assert!(session.remove("c02d55e913").is_some());
    assert!(rx.has_changed().unwrap());
    assert_eq!(rx.borrow_and_update().len(), 2);
}

#[tokio::test]
async fn test_drain_stack() {
    let session = loaded_session().await;

    for _ in 0..4 {
        assert!(session.swipe(None, SwipeDirection::Left).is_some());
    }
    assert!(session.candidates().is_empty());
    assert!(session.swipe(None, SwipeDirection::Left).is_none());
    assert!(session.gym("8f1c2a7e0d").is_none());
}

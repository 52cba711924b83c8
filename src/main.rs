// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Open Gym API Server
//!
//! Serves the Cary open-gym list and swipe stack to the frontend.

use anyhow::Context;
use open_gym::{config::Config, services::FetchState, AppState};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();

    // Load configuration from environment
    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!(
        port = config.port,
        base_url = %config.base_url,
        page_size = config.page_size,
        "Starting Open Gym API"
    );

    let state = Arc::new(
        AppState::new(config.clone()).context("Failed to build application state")?,
    );

    // Load the first page up front, like the screen does when it opens.
    // A failure is published as the fetch state; the frontend can refresh.
    if config.fetch_on_startup {
        let initial = state.session.refresh().await;
        tracing::info!(
            candidates = state.session.candidates().len(),
            ok = matches!(initial, FetchState::Success { .. }),
            "Initial gym fetch finished"
        );
    }

    let app = open_gym::routes::create_router(state);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("open_gym=debug,info"));

    tracing_subscriber::registry().with(filter).with(format).init();
}

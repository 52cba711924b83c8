// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::{
    extract::{RawQuery, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::get,
    Router,
};
use open_gym::config::Config;
use open_gym::routes::create_router;
use open_gym::AppState;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::Semaphore;

/// Sample page of the open-gym dataset.
#[allow(dead_code)]
pub fn sample_body() -> String {
    std::fs::read_to_string("data/open_gym_sample.json")
        .expect("Failed to read data/open_gym_sample.json")
}

/// Local stand-in for the open-data catalog.
#[allow(dead_code)]
pub struct FakeOpenData {
    pub base_url: String,
    hits: Arc<AtomicUsize>,
    last_query: Arc<Mutex<Option<String>>>,
    gate: Option<Arc<Semaphore>>,
}

#[allow(dead_code)]
impl FakeOpenData {
    /// Number of record requests served (or being served).
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    pub fn last_query(&self) -> Option<String> {
        self.last_query.lock().unwrap().clone()
    }

    /// Let one held request complete (gated servers only).
    pub fn release_one(&self) {
        if let Some(gate) = &self.gate {
            gate.add_permits(1);
        }
    }
}

#[derive(Clone)]
struct FakeState {
    status: StatusCode,
    body: String,
    hits: Arc<AtomicUsize>,
    last_query: Arc<Mutex<Option<String>>>,
    gate: Option<Arc<Semaphore>>,
}

async fn records(State(state): State<FakeState>, RawQuery(query): RawQuery) -> impl IntoResponse {
    state.hits.fetch_add(1, Ordering::SeqCst);
    *state.last_query.lock().unwrap() = query;

    if let Some(gate) = &state.gate {
        gate.acquire().await.unwrap().forget();
    }

    (
        state.status,
        [(header::CONTENT_TYPE, "application/json")],
        state.body.clone(),
    )
}

async fn spawn(status: StatusCode, body: String, gated: bool) -> FakeOpenData {
    let hits = Arc::new(AtomicUsize::new(0));
    let last_query = Arc::new(Mutex::new(None));
    let gate = gated.then(|| Arc::new(Semaphore::new(0)));

    let app = Router::new()
        .route("/catalog/datasets/open-gym/records", get(records))
        .with_state(FakeState {
            status,
            body,
            hits: hits.clone(),
            last_query: last_query.clone(),
            gate: gate.clone(),
        });

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    FakeOpenData {
        base_url: format!("http://{}", addr),
        hits,
        last_query,
        gate,
    }
}

/// Serve `body` with the given status for every records request.
#[allow(dead_code)]
pub async fn spawn_open_data(status: StatusCode, body: impl Into<String>) -> FakeOpenData {
    spawn(status, body.into(), false).await
}

/// Like `spawn_open_data`, but each request waits for `release_one()`.
#[allow(dead_code)]
pub async fn spawn_gated_open_data(body: impl Into<String>) -> FakeOpenData {
    spawn(StatusCode::OK, body.into(), true).await
}

/// Base URL with nothing listening behind it.
#[allow(dead_code)]
pub async fn unreachable_base_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

/// Raw TCP server that reads each request, writes `reply` (if any) and
/// closes the connection.
#[allow(dead_code)]
async fn spawn_raw(reply: Option<&'static [u8]>) -> String {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            let mut buf = [0u8; 4096];
            let _ = socket.read(&mut buf).await;
            if let Some(bytes) = reply {
                let _ = socket.write_all(bytes).await;
                let _ = socket.flush().await;
            }
            drop(socket);
        }
    });
    format!("http://{}", addr)
}

/// Base URL whose server accepts the connection, reads the request and hangs
/// up without answering.
#[allow(dead_code)]
pub async fn spawn_hang_up_server() -> String {
    spawn_raw(None).await
}

/// Base URL whose server announces a 1000-byte JSON body, sends the first
/// few bytes of it and closes the connection.
#[allow(dead_code)]
pub async fn spawn_truncated_body_server() -> String {
    spawn_raw(Some(
        &b"HTTP/1.1 200 OK\r\n\
           Content-Type: application/json\r\n\
           Content-Length: 1000\r\n\
           \r\n\
           {\"results\":["[..],
    ))
    .await
}

/// Config pointing at the given open-data base URL.
#[allow(dead_code)]
pub fn test_config(base_url: &str) -> Config {
    Config {
        base_url: base_url.to_string(),
        ..Config::test_default()
    }
}

/// Create a test app against the given open-data base URL.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub fn create_test_app(base_url: &str) -> (axum::Router, Arc<AppState>) {
    let state = Arc::new(AppState::new(test_config(base_url)).unwrap());
    (create_router(state.clone()), state)
}

/// Read a JSON response body.
#[allow(dead_code)]
pub async fn json_body(response: axum::response::Response) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

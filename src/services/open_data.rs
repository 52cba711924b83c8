// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Client for the Town of Cary open-data catalog.
//!
//! Issues a single unauthenticated GET for the first page of the
//! "open-gym" dataset. No retry, no pagination.

use crate::config::Config;
use crate::error::FetchError;
use crate::models::GymsEnvelope;
use anyhow::Context;
use std::time::Duration;

/// Path of the records endpoint below the API root.
const RECORDS_PATH: &str = "catalog/datasets/open-gym/records";

/// Open-data API client.
#[derive(Clone)]
pub struct OpenDataClient {
    http: reqwest::Client,
    base_url: String,
    page_size: u32,
}

impl OpenDataClient {
    /// Create a client for the given API root.
    pub fn new(base_url: &str, page_size: u32, timeout: Duration) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("failed building open-data HTTP client")?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            page_size,
        })
    }

    /// Create a client from application configuration.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        Self::new(&config.base_url, config.page_size, config.request_timeout)
    }

    /// Full URL of the records endpoint (without query string).
    pub fn records_url(&self) -> String {
        format!("{}/{}", self.base_url, RECORDS_PATH)
    }

    /// Fetch the first page of gym records.
    pub async fn fetch_gyms(&self) -> Result<GymsEnvelope, FetchError> {
        let url = self.records_url();
        tracing::debug!(url = %url, limit = self.page_size, "Fetching open-gym records");

        let response = self
            .http
            .get(&url)
            .query(&[("limit", self.page_size)])
            .send()
            .await?;

        let envelope: GymsEnvelope = Self::check_response_json(response).await?;
        tracing::info!(
            count = envelope.results.len(),
            total = envelope.total_count,
            "Fetched open-gym records"
        );
        Ok(envelope)
    }

    /// Check response status and parse the JSON body.
    async fn check_response_json<T: for<'de> serde::Deserialize<'de>>(
        response: reqwest::Response,
    ) -> Result<T, FetchError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), body = %body, "Open data API returned an error");
            return Err(FetchError::Unexpected(format!("HTTP {}", status)));
        }

        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes)
            .map_err(|e| FetchError::Unexpected(format!("JSON parse error: {}", e)))
    }
}

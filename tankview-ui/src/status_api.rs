/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 *
 * Unless you explicitly state otherwise, any contribution intentionally
 * submitted for inclusion in the work by you, as defined in the Apache-2.0
 * license, shall be dual licensed as above, without any additional terms or
 * conditions.
 */

//! Client for the simulation's status endpoint.

use futures::future::{select, Either};
use gloo_timers::future::TimeoutFuture;
use reqwest::Client;
use tankview_types::StatusSample;
use thiserror::Error;

/// Errors returned by [`StatusClient::fetch_status`].
#[derive(Debug, Error)]
pub enum StatusError {
    /// A network or transport error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The endpoint answered with a non-success status.
    #[error("Server error ({status}): {body}")]
    Server { status: u16, body: String },

    /// The body was not a valid status payload.
    #[error("Malformed status response: {0}")]
    Decode(String),

    /// No answer within the configured request timeout.
    #[error("Status request timed out after {0} ms")]
    Timeout(u32),
}

#[derive(Debug, Clone)]
pub struct StatusClient {
    url: String,
    timeout_ms: Option<u32>,
    http: Client,
}

impl StatusClient {
    /// `url` must be absolute. Without `timeout_ms` a request may wait
    /// forever.
    pub fn new(url: &str, timeout_ms: Option<u32>) -> Self {
        Self {
            url: url.to_string(),
            timeout_ms,
            http: Client::new(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Calls `GET <statusUrl>`.
    pub async fn fetch_status(&self) -> Result<StatusSample, StatusError> {
        let Some(timeout_ms) = self.timeout_ms else {
            return self.request().await;
        };
        let request = Box::pin(self.request());
        let deadline = Box::pin(TimeoutFuture::new(timeout_ms));
        match select(request, deadline).await {
            Either::Left((result, _)) => result,
            Either::Right(((), _)) => Err(StatusError::Timeout(timeout_ms)),
        }
    }

    async fn request(&self) -> Result<StatusSample, StatusError> {
        let response = self.http.get(&self.url).send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        decode_status(status, &body)
    }
}

/// Map an HTTP status and body to a sample or an error.
pub(crate) fn decode_status(status: u16, body: &str) -> Result<StatusSample, StatusError> {
    match status {
        200..=299 => serde_json::from_str(body).map_err(|e| StatusError::Decode(e.to_string())),
        _ => Err(StatusError::Server {
            status,
            body: body.to_string(),
        }),
    }
}

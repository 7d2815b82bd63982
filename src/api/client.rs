use std::time::Duration;

use reqwest::blocking::{Client, Response};
use serde::de::DeserializeOwned;

use super::error::ApiError;
use super::models::{Poll, PollQuery, RegisterRequest, RegistrationResult};
use crate::{trace_request, trace_response};

/// Blocking client for the Polly API.
///
/// Every call is independent: one request, one response, no retries.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    client: Client,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            client: Client::new(),
        }
    }

    /// Client with an explicit per-request timeout instead of the transport default.
    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            base_url: base_url.to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // Paths are appended as-is; a trailing slash on base_url is not normalized.
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Register a new user. A 400 response means the username is taken
    /// (see [`ApiError::is_duplicate_username`]).
    pub fn register_user(
        &self,
        username: &str,
        password: &str,
    ) -> Result<RegistrationResult, ApiError> {
        let url = self.url("/register");
        trace_request!("POST", url);

        let response = self
            .client
            .post(&url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .json(&RegisterRequest { username, password })
            .send()
            .map_err(|e| {
                tracing::warn!(target: "api", "POST {} failed: {}", url, e);
                ApiError::Transport(e)
            })?;

        decode(&url, response)
    }

    /// Fetch one page of polls, in the order the server returns them.
    pub fn get_polls(&self, query: PollQuery) -> Result<Vec<Poll>, ApiError> {
        let url = self.url("/polls");
        trace_request!("GET", url);

        let response = self
            .client
            .get(&url)
            .query(&[("skip", query.skip), ("limit", query.limit)])
            .send()
            .map_err(|e| {
                tracing::warn!(target: "api", "GET {} failed: {}", url, e);
                ApiError::Transport(e)
            })?;

        let polls: Vec<Poll> = decode(&url, response)?;
        tracing::debug!(target: "api", "Received {} polls", polls.len());
        Ok(polls)
    }
}

fn decode<T: DeserializeOwned>(url: &str, response: Response) -> Result<T, ApiError> {
    let status = response.status();
    trace_response!(status, url);

    let body = response.text()?;
    if !status.is_success() {
        tracing::warn!(target: "api", "{} returned {}: {}", url, status, body);
        return Err(ApiError::Http {
            status: status.as_u16(),
            body,
        });
    }

    match serde_json::from_str(&body) {
        Ok(value) => Ok(value),
        Err(source) => {
            tracing::warn!(target: "api", "Unexpected body from {}: {}", url, source);
            Err(ApiError::Decode { source, body })
        }
    }
}

/// Register `username` against the API rooted at `base_url`.
pub fn register_user(
    base_url: &str,
    username: &str,
    password: &str,
) -> Result<RegistrationResult, ApiError> {
    ApiClient::new(base_url).register_user(username, password)
}

/// Fetch polls from the API rooted at `base_url`. The server-side defaults
/// are `skip = 0` and `limit = 10` (see [`PollQuery::default`]).
pub fn get_polls(base_url: &str, skip: i64, limit: i64) -> Result<Vec<Poll>, ApiError> {
    ApiClient::new(base_url).get_polls(PollQuery::new(skip, limit))
}

use chrono::{DateTime, FixedOffset, NaiveDateTime};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Body of `POST /register`.
#[derive(Debug, Serialize)]
pub struct RegisterRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

/// Body returned by a successful registration.
///
/// The server guarantees `id` and `username`; anything else it sends is
/// kept in `extra` so the caller sees the body unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegistrationResult {
    pub id: i64,
    pub username: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PollOption {
    pub id: i64,
    pub text: String,
    pub poll_id: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Poll {
    pub id: i64,
    pub question: String,
    pub created_at: String,
    pub owner_id: i64,
    pub options: Vec<PollOption>,
}

impl Poll {
    /// Parse `created_at` as RFC 3339, falling back to an ISO-8601 timestamp
    /// without offset (interpreted as UTC). Returns `None` for anything else.
    pub fn created_at_parsed(&self) -> Option<DateTime<FixedOffset>> {
        if let Ok(dt) = DateTime::parse_from_rfc3339(&self.created_at) {
            return Some(dt);
        }
        NaiveDateTime::parse_from_str(&self.created_at, "%Y-%m-%dT%H:%M:%S%.f")
            .ok()
            .map(|naive| naive.and_utc().fixed_offset())
    }
}

/// Pagination arguments for `GET /polls`.
///
/// Values are forwarded verbatim; clamping is left to the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PollQuery {
    pub skip: i64,
    pub limit: i64,
}

impl PollQuery {
    pub fn new(skip: i64, limit: i64) -> Self {
        Self { skip, limit }
    }
}

impl Default for PollQuery {
    fn default() -> Self {
        Self { skip: 0, limit: 10 }
    }
}

use thiserror::Error;

/// Failure modes of a single API call.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server answered with a non-success status.
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// No response was obtained (DNS failure, connection refused, timeout,
    /// invalid URL) or the response body could not be read.
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with success but the body did not match the
    /// expected shape.
    #[error("Invalid response body: {source}")]
    Decode {
        #[source]
        source: serde_json::Error,
        body: String,
    },
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_http(&self) -> bool {
        matches!(self, Self::Http { .. })
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode { .. })
    }

    /// Registration answers 400 when the username is taken.
    pub fn is_duplicate_username(&self) -> bool {
        self.status() == Some(400)
    }
}

//! Single-shot snapshot retrieval from the analysis service.

use crate::snapshot::NewsSnapshot;
use serde_json::Value;
use std::fmt;
use std::time::Duration;

pub const NEWS_PATH: &str = "/api/news";
const TIMEOUT: Duration = Duration::from_secs(30);

/// How a fetch failed. Every kind collapses to one display string at the
/// app boundary; nothing upstream branches on it.
#[derive(Debug)]
pub enum FetchError {
    /// Transport failure: DNS, refused connection, timeout, or an HTTP
    /// error status without a readable error body.
    Network(String),
    /// The service answered with an explicit `{"error": ...}` payload.
    Service(String),
    /// A body that is neither a snapshot nor an error envelope.
    Malformed(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Network(msg) => write!(f, "network error: {msg}"),
            FetchError::Service(msg) => write!(f, "{msg}"),
            FetchError::Malformed(msg) => write!(f, "unexpected response: {msg}"),
        }
    }
}

pub struct SnapshotClient {
    base_url: String,
}

impl SnapshotClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn endpoint(&self) -> String {
        format!("{}{}", self.base_url, NEWS_PATH)
    }

    /// Exactly one request per call, and the app issues exactly one call
    /// per session. No retry, no backoff, no abort.
    pub fn fetch(&self) -> Result<NewsSnapshot, FetchError> {
        let agent = ureq::AgentBuilder::new().timeout(TIMEOUT).build();
        match agent.get(&self.endpoint()).call() {
            Ok(response) => {
                let body: Value = response
                    .into_json()
                    .map_err(|e| FetchError::Malformed(e.to_string()))?;
                decode(body)
            }
            Err(ureq::Error::Status(code, response)) => {
                // The service sends its error envelope on non-2xx too.
                match response.into_json::<Value>() {
                    Ok(body) if body.get("error").is_some() => decode(body),
                    _ => Err(FetchError::Network(format!("service returned HTTP {code}"))),
                }
            }
            Err(e) => Err(FetchError::Network(e.to_string())),
        }
    }
}

/// Map a decoded payload to a snapshot or an error. Split out of `fetch`
/// so payload handling is testable without a server.
pub fn decode(body: Value) -> Result<NewsSnapshot, FetchError> {
    if let Some(err) = body.get("error") {
        let msg = err
            .as_str()
            .map(str::to_string)
            .unwrap_or_else(|| err.to_string());
        return Err(FetchError::Service(msg));
    }
    serde_json::from_value(body).map_err(|e| FetchError::Malformed(e.to_string()))
}

//! Data acquisition from the remote indicator API.

use std::time::Duration;

use crate::model::{Envelope, FinancialRecord};

/// Fixed endpoint serving the indicator dataset.
pub const DEFAULT_ENDPOINT: &str = "https://financialinclusion.onrender.com/api/v1/data";

/// The dataset is a handful of records; anything slower than this is a dead
/// server, not a slow one.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Error types that can occur while loading the dataset.
///
/// All variants collapse into the same handling at the provider boundary:
/// logged, swallowed, prior state untouched.
#[derive(Debug, Clone)]
pub enum FetchError {
    /// Transport-level failure (DNS, TLS, connect, timeout).
    Http(String),
    /// Non-2xx response status.
    Status(u16),
    /// Response body did not match the envelope shape.
    Decode(String),
    /// I/O error while reading a local dataset file.
    Io(String),
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchError::Http(msg) => write!(f, "HTTP error: {}", msg),
            FetchError::Status(code) => write!(f, "unexpected status: {}", code),
            FetchError::Decode(msg) => write!(f, "decode error: {}", msg),
            FetchError::Io(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl std::error::Error for FetchError {}

/// Fetches the indicator dataset over HTTP.
///
/// One blocking GET per call, decoded as the `{ "data": [...] }` envelope.
/// No retries and no caching; the caller decides when to fetch.
pub struct ApiCollector {
    client: reqwest::blocking::Client,
    endpoint: String,
}

impl ApiCollector {
    /// Creates a collector pointed at [`DEFAULT_ENDPOINT`].
    pub fn new() -> Self {
        Self::with_endpoint(DEFAULT_ENDPOINT)
    }

    /// Creates a collector pointed at a specific endpoint.
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// The endpoint this collector reads from.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Issues one GET and decodes the envelope.
    pub fn fetch(&self) -> Result<Vec<FinancialRecord>, FetchError> {
        let response = self
            .client
            .get(&self.endpoint)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .map_err(|e| FetchError::Http(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let envelope: Envelope = response
            .json()
            .map_err(|e| FetchError::Decode(e.to_string()))?;

        Ok(envelope.data)
    }
}

impl Default for ApiCollector {
    fn default() -> Self {
        Self::new()
    }
}

//! Error taxonomy for ingestion and the advice pipeline
//!
//! Validation failures are recovered at the import boundary and shown
//! inline; advice failures surface as a labeled failure payload and never
//! tear down the session.

use thiserror::Error;

/// Failure to accept an untrusted result document
#[derive(Debug, Error)]
pub enum ValidationError {
    /// Input was not parseable JSON at all
    #[error("invalid JSON: {0}")]
    MalformedJson(String),

    /// Parsed, but does not look like an audit result document
    #[error("unexpected shape: {0}")]
    UnexpectedShape(String),
}

/// Upstream advice-provider failure
#[derive(Debug, Clone, Error)]
pub enum ProviderError {
    #[error("authentication failed: {0}")]
    Authentication(String),

    #[error("provider rate limited: {message}")]
    RateLimited {
        retry_after: Option<u64>,
        message: String,
    },

    #[error("network error: {0}")]
    Network(String),

    #[error("request timed out after {seconds}s")]
    Timeout { seconds: u64 },

    #[error("service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("invalid response: {0}")]
    InvalidResponse(String),

    #[error("provider misconfigured: {0}")]
    Configuration(String),
}

impl From<reqwest::Error> for ProviderError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ProviderError::Timeout { seconds: 0 }
        } else if err.is_connect() {
            ProviderError::Network(format!("connection failed: {}", err))
        } else {
            ProviderError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ProviderError {
    fn from(err: serde_json::Error) -> Self {
        ProviderError::InvalidResponse(format!("JSON parse error: {}", err))
    }
}

/// Failure in the advice pipeline, one variant per exit point
#[derive(Debug, Error)]
pub enum AdviceError {
    /// Result has no violations; the advice pipeline must not run
    #[error("no violations to analyze")]
    EmptyInput,

    /// Advice service credential is not configured
    #[error("advice service not configured: {0}")]
    Config(String),

    /// Caller exhausted its quota for the active window
    #[error("rate limit exceeded, try again in {retry_after}s")]
    RateLimited { retry_after: u64 },

    /// The upstream call did not complete successfully
    #[error("advice service failed: {0}")]
    Upstream(#[from] ProviderError),

    /// No structured block could be extracted from the upstream response
    #[error("could not parse advice response: {0}")]
    ResponseShape(String),

    /// Structured block parsed but required sections are absent
    #[error("advice response missing required fields: {}", missing.join(", "))]
    Incomplete { missing: Vec<String> },
}

impl AdviceError {
    /// Stable machine-readable code for API payloads and logs
    pub fn code(&self) -> &'static str {
        match self {
            AdviceError::EmptyInput => "empty_input",
            AdviceError::Config(_) => "config_error",
            AdviceError::RateLimited { .. } => "rate_limited",
            AdviceError::Upstream(_) => "upstream_error",
            AdviceError::ResponseShape(_) => "response_shape_error",
            AdviceError::Incomplete { .. } => "incomplete_response",
        }
    }
}

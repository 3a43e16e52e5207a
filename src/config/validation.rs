//! Configuration validation

use thiserror::Error;

use super::Config;

/// A configuration value that fails its invariant
#[derive(Debug, Error)]
#[error("{section}: {message}")]
pub struct ValidationError {
    pub section: &'static str,
    pub message: String,
}

impl ValidationError {
    pub fn new(section: &'static str, message: impl Into<String>) -> Self {
        Self {
            section,
            message: message.into(),
        }
    }
}

/// Implemented by configuration sections that carry invariants beyond what
/// deserialization can express
pub trait Validate {
    fn validate(&self) -> Result<(), ValidationError>;
}

impl Validate for Config {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.server.host.is_empty() {
            return Err(ValidationError::new("server", "host must not be empty"));
        }
        if self.server.request_timeout_seconds == 0 {
            return Err(ValidationError::new(
                "server",
                "request_timeout_seconds must be > 0",
            ));
        }
        if self.advice_limit.max_requests == 0 {
            return Err(ValidationError::new(
                "advice_limit",
                "max_requests must be > 0",
            ));
        }
        if self.advice_limit.window_seconds == 0 {
            return Err(ValidationError::new(
                "advice_limit",
                "window_seconds must be > 0",
            ));
        }
        if self.llm.timeout_seconds == 0 {
            return Err(ValidationError::new("llm", "timeout_seconds must be > 0"));
        }
        if !(0.0..=2.0).contains(&self.llm.temperature) {
            return Err(ValidationError::new(
                "llm",
                "temperature must be between 0.0 and 2.0",
            ));
        }
        Ok(())
    }
}

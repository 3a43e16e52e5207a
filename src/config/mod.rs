//! Configuration management
//!
//! Strongly-typed configuration layered from `config/default.toml`, an
//! optional `config/{ENV}.toml`, `config/local.toml`, and `AXESS__*`
//! environment variables (double-underscore separators), highest last.

pub mod validation;

pub use validation::{Validate, ValidationError};

use serde::{Deserialize, Serialize};

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub advice_limit: AdviceRateLimitConfig,
    pub llm: LlmConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// CORS allowlist; a single `"*"` mirrors the request origin
    pub allowed_origins: Vec<String>,
    pub request_timeout_seconds: u64,
    /// Serve Swagger UI at /docs
    pub enable_docs: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            allowed_origins: vec!["*".to_string()],
            request_timeout_seconds: 180,
            enable_docs: true,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default tracing filter directive, overridable via RUST_LOG
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Fixed-window quota for the advice endpoint, per client key.
///
/// Best-effort abuse mitigation for a free AI feature, not a billing
/// control; the defaults allow 10 requests per hour.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AdviceRateLimitConfig {
    pub enabled: bool,
    /// Maximum requests per window per key
    pub max_requests: u32,
    /// Window duration in seconds
    pub window_seconds: u64,
    /// How often the background task purges expired windows
    pub cleanup_interval_seconds: u64,
}

impl Default for AdviceRateLimitConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_requests: 10,
            window_seconds: 3600,
            cleanup_interval_seconds: 3600,
        }
    }
}

/// Advice provider (LLM) configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    /// Credential for the advice service; absent means the advice feature
    /// is disabled and the gateway reports a configuration error
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
    pub temperature: f64,
    pub max_tokens: u32,
    /// Transport timeout for the upstream call
    pub timeout_seconds: u64,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: "https://api.openai.com/v1".to_string(),
            model: "gpt-4o-mini".to_string(),
            temperature: 0.3,
            max_tokens: 1500,
            timeout_seconds: 120,
        }
    }
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigLoadError> {
        let mut builder = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false));

        if let Ok(env) = std::env::var("ENV") {
            builder = builder
                .add_source(config::File::with_name(&format!("config/{}", env)).required(false));
        }

        builder = builder
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(config::Environment::with_prefix("AXESS").separator("__"));

        let mut config: Config = builder.build()?.try_deserialize()?;

        // Common convention: bare OPENAI_API_KEY wins over file config
        if let Ok(api_key) = std::env::var("OPENAI_API_KEY") {
            if !api_key.is_empty() {
                config.llm.api_key = Some(api_key);
            }
        }

        config.validate()?;

        Ok(config)
    }
}

/// Error type for configuration loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigLoadError {
    #[error("configuration file error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("configuration validation error: {0}")]
    Validation(#[from] ValidationError),
}

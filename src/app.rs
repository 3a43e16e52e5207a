//! Application wiring

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::application::AdviceService;
use crate::config::Config;
use crate::infrastructure::providers::OpenAiProvider;
use crate::infrastructure::rate_limiter::FixedWindowLimiter;
use crate::presentation::{create_router, AppState};

/// A fully wired application: the router plus its background tasks
pub struct AppHandle {
    pub router: Router,
    cleanup: Option<JoinHandle<()>>,
}

impl Drop for AppHandle {
    fn drop(&mut self) {
        if let Some(handle) = self.cleanup.take() {
            handle.abort();
        }
    }
}

/// Assemble the service graph from configuration.
///
/// Must run inside a Tokio runtime; spawns the rate-limit window
/// cleanup task when quota enforcement is enabled.
pub fn create_app(config: Config) -> AppHandle {
    let limiter = if config.advice_limit.enabled {
        Arc::new(FixedWindowLimiter::from_config(&config.advice_limit))
    } else {
        // Quota disabled: effectively unlimited, same code path
        Arc::new(FixedWindowLimiter::new(
            u32::MAX,
            Duration::from_secs(config.advice_limit.window_seconds),
        ))
    };

    let provider = Arc::new(OpenAiProvider::new(config.llm.clone()));
    if !config.advice_limit.enabled {
        info!("Advice rate limiting disabled");
    }

    let advice_service = Arc::new(AdviceService::new(
        provider,
        limiter.clone(),
        config.llm.clone(),
    ));

    let cleanup = if config.advice_limit.enabled {
        let interval = Duration::from_secs(config.advice_limit.cleanup_interval_seconds);
        let limiter = limiter.clone();
        Some(tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.tick().await;
            loop {
                ticker.tick().await;
                let removed = limiter.purge_expired().await;
                debug!(removed, "Rate-limit window cleanup pass");
            }
        }))
    } else {
        None
    };

    let state = AppState {
        advice_service,
        advice_limit: config.advice_limit.clone(),
    };

    AppHandle {
        router: create_router(state, &config.server),
        cleanup,
    }
}

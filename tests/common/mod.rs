//! Shared test fixtures
#![allow(dead_code)]

use std::sync::Arc;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use axess::application::AdviceService;
use axess::config::LlmConfig;
use axess::domain::{AdviceRequest, ProviderError, ViolationDigest};
use axess::infrastructure::providers::{AdviceProvider, CompletionRequest, CompletionResponse};
use axess::infrastructure::rate_limiter::FixedWindowLimiter;

pub const COMPLETE_ADVICE_JSON: &str = r#"{
    "topFixes": [
        {"rank": 1, "description": "Add alt text to all informative images"},
        {"rank": 2, "description": "Raise body text contrast to 4.5:1"}
    ],
    "nextSteps": [
        {"order": 1, "description": "Add axe checks to CI"},
        {"order": 2, "description": "Audit the remaining templates"}
    ],
    "priorityActions": {
        "high": "Fix missing alt text",
        "medium": "Fix contrast issues",
        "low": "Add landmark regions"
    },
    "estimatedEffort": "Medium"
}"#;

/// Scripted advice provider. Returns a fixed completion (or error) and
/// records every request it receives.
pub struct MockAdviceProvider {
    pub configured: bool,
    result: Mutex<Result<String, ProviderError>>,
    pub requests: Mutex<Vec<CompletionRequest>>,
}

impl MockAdviceProvider {
    pub fn returning(content: &str) -> Self {
        Self {
            configured: true,
            result: Mutex::new(Ok(content.to_string())),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(error: ProviderError) -> Self {
        Self {
            configured: true,
            result: Mutex::new(Err(error)),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn unconfigured() -> Self {
        Self {
            configured: false,
            result: Mutex::new(Err(ProviderError::Configuration(
                "no credential".to_string(),
            ))),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl AdviceProvider for MockAdviceProvider {
    fn id(&self) -> &'static str {
        "mock"
    }

    fn is_configured(&self) -> bool {
        self.configured
    }

    async fn complete(
        &self,
        request: CompletionRequest,
    ) -> Result<CompletionResponse, ProviderError> {
        self.requests.lock().unwrap().push(request);
        self.result
            .lock()
            .unwrap()
            .clone()
            .map(|content| CompletionResponse {
                id: "cmpl-test".to_string(),
                model: "mock-model".to_string(),
                content,
            })
    }
}

pub fn sample_request() -> AdviceRequest {
    AdviceRequest {
        url: "https://example.com".to_string(),
        total_violations: 1,
        violations: vec![ViolationDigest {
            id: "image-alt".to_string(),
            impact: "critical".to_string(),
            description: "Images must have alternate text".to_string(),
            help: "Images must have an alt attribute".to_string(),
            tags: vec!["wcag2a".to_string(), "wcag111".to_string()],
            node_count: 1,
            nodes: vec![],
        }],
    }
}

pub fn service_with(
    provider: Arc<MockAdviceProvider>,
    max_requests: u32,
    window: Duration,
) -> AdviceService {
    let limiter = Arc::new(FixedWindowLimiter::new(max_requests, window));
    AdviceService::new(provider, limiter, LlmConfig::default())
}

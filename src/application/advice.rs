//! The advice pipeline: rate-limited dispatch to the advice provider with
//! schema validation of the response
//!
//! Per call the stages run strictly in order:
//! Received -> RateChecked -> Dispatched -> Validated -> Completed,
//! with early exit to a typed [`AdviceError`] from any stage. One quota
//! unit is spent per attempt that reaches RateChecked, whether or not the
//! upstream call later succeeds; failed calls are not free, which keeps
//! retry storms bounded. There is no automatic retry anywhere — the
//! caller's visible "Re-analyze" action is the retry mechanism, so
//! transient upstream failures never trigger duplicate billed calls.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::config::LlmConfig;
use crate::domain::{AdviceError, AdviceOutcome, AdviceRequest, AdviceResponse};
use crate::infrastructure::prompts::{PromptBuilder, ADVICE_INSTRUCTIONS};
use crate::infrastructure::providers::{AdviceProvider, CompletionRequest};
use crate::infrastructure::rate_limiter::{QuotaDecision, QuotaLimiter};
use crate::infrastructure::response_parser::ResponseParser;

pub struct AdviceService {
    provider: Arc<dyn AdviceProvider>,
    limiter: Arc<dyn QuotaLimiter>,
    config: LlmConfig,
}

impl AdviceService {
    pub fn new(
        provider: Arc<dyn AdviceProvider>,
        limiter: Arc<dyn QuotaLimiter>,
        config: LlmConfig,
    ) -> Self {
        Self {
            provider,
            limiter,
            config,
        }
    }

    /// Run the full pipeline for one advice request.
    pub async fn request_advice(
        &self,
        payload: &AdviceRequest,
        client_key: &str,
    ) -> Result<AdviceOutcome, AdviceError> {
        // Received: a misconfigured service must not burn quota
        if !self.provider.is_configured() {
            return Err(AdviceError::Config(
                "advice service credential not configured".to_string(),
            ));
        }
        if payload.violations.is_empty() {
            return Err(AdviceError::EmptyInput);
        }

        // RateChecked
        match self.limiter.check_and_consume(client_key).await {
            QuotaDecision::Allowed { remaining } => {
                debug!(client_key, remaining, "Advice quota consumed");
            }
            QuotaDecision::Denied { retry_after } => {
                warn!(client_key, retry_after, "Advice request rate limited");
                return Err(AdviceError::RateLimited { retry_after });
            }
        }

        // Dispatched: exactly one upstream call
        let request = CompletionRequest::new()
            .with_system(ADVICE_INSTRUCTIONS)
            .with_user(PromptBuilder::build_advice_input(payload))
            .with_model(self.config.model.clone())
            .with_temperature(self.config.temperature)
            .with_max_tokens(self.config.max_tokens);

        let response = self.provider.complete(request).await?;

        // Validated
        let advice = Self::parse_advice(&response.content)?;

        // Completed
        let remaining_requests = self.limiter.remaining(client_key).await;
        info!(
            client_key,
            violations = payload.total_violations,
            remaining_requests,
            "Advice request completed"
        );

        Ok(AdviceOutcome {
            advice,
            remaining_requests,
        })
    }

    /// Two-stage decode: extract a structured block, then check the four
    /// required sections are all present before deserializing.
    fn parse_advice(content: &str) -> Result<AdviceResponse, AdviceError> {
        let value: serde_json::Value = ResponseParser::parse_json(content)
            .map_err(|e| AdviceError::ResponseShape(e.to_string()))?;

        let missing: Vec<String> = AdviceResponse::REQUIRED_FIELDS
            .iter()
            .filter(|field| value.get(**field).map_or(true, |v| v.is_null()))
            .map(|field| field.to_string())
            .collect();

        if !missing.is_empty() {
            return Err(AdviceError::Incomplete { missing });
        }

        serde_json::from_value(value).map_err(|e| AdviceError::ResponseShape(e.to_string()))
    }
}

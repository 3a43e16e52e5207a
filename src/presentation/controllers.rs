//! Request handlers

use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use tracing::{error, info, warn};

use crate::application::AdviceService;
use crate::config::AdviceRateLimitConfig;
use crate::domain::{AdviceError, AdviceRequest};
use crate::presentation::models::{AdviceApiResponse, ErrorResponse, HealthResponse};

/// Shared application state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub advice_service: Arc<AdviceService>,
    pub advice_limit: AdviceRateLimitConfig,
}

/// Derive a per-client quota key from proxy headers.
///
/// First hop of `x-forwarded-for`, then `x-real-ip`, then a shared
/// `unknown` bucket when neither header is present.
pub(crate) fn client_key(headers: &HeaderMap) -> String {
    if let Some(forwarded) = headers.get("x-forwarded-for") {
        if let Ok(value) = forwarded.to_str() {
            if let Some(first) = value.split(',').next() {
                let first = first.trim();
                if !first.is_empty() {
                    return format!("ip:{}", first);
                }
            }
        }
    }
    if let Some(real_ip) = headers.get("x-real-ip") {
        if let Ok(value) = real_ip.to_str() {
            let value = value.trim();
            if !value.is_empty() {
                return format!("ip:{}", value);
            }
        }
    }
    "ip:unknown".to_string()
}

fn error_response(status: StatusCode, code: &str, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: message.into(),
            code: code.to_string(),
        }),
    )
        .into_response()
}

/// Generate remediation advice for a set of violations
#[utoipa::path(
    post,
    path = "/api/v1/advice",
    tag = "advice",
    request_body = AdviceRequest,
    responses(
        (status = 200, description = "Remediation advice", body = AdviceApiResponse),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 429, description = "Rate limit exceeded", body = ErrorResponse),
        (status = 500, description = "Advice service error", body = ErrorResponse)
    )
)]
pub async fn request_advice(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<AdviceRequest>,
) -> Response {
    if payload.violations.is_empty() {
        return error_response(
            StatusCode::BAD_REQUEST,
            "empty_input",
            "No violations to analyze",
        );
    }

    let key = client_key(&headers);

    match state.advice_service.request_advice(&payload, &key).await {
        Ok(outcome) => {
            info!(
                url = %payload.url,
                violations = payload.violations.len(),
                remaining = outcome.remaining_requests,
                "advice generated"
            );
            let mut response = (
                StatusCode::OK,
                Json(AdviceApiResponse {
                    response: outcome.advice,
                    remaining_requests: outcome.remaining_requests,
                }),
            )
                .into_response();
            let headers = response.headers_mut();
            if let Ok(value) = state.advice_limit.max_requests.to_string().parse() {
                headers.insert("x-ratelimit-limit", value);
            }
            if let Ok(value) = outcome.remaining_requests.to_string().parse() {
                headers.insert("x-ratelimit-remaining", value);
            }
            response
        }
        Err(AdviceError::EmptyInput) => error_response(
            StatusCode::BAD_REQUEST,
            "empty_input",
            "No violations to analyze",
        ),
        Err(AdviceError::RateLimited { retry_after }) => {
            warn!(key = %key, retry_after, "advice quota exhausted");
            let mut response = error_response(
                StatusCode::TOO_MANY_REQUESTS,
                "rate_limited",
                "Rate limit exceeded. Please try again later.",
            );
            if let Ok(value) = retry_after.to_string().parse() {
                response.headers_mut().insert(header::RETRY_AFTER, value);
            }
            response
        }
        Err(err @ AdviceError::Config(_)) => {
            error!(error = %err, "advice service misconfigured");
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                err.code(),
                "Advice service is not configured",
            )
        }
        Err(err) => {
            error!(error = %err, "advice request failed");
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                err.code(),
                "Failed to generate advice",
            )
        }
    }
}

/// Liveness probe
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses((status = 200, description = "Service is healthy", body = HealthResponse))
)]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

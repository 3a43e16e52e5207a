//! Router assembly

use std::time::Duration;

use axum::http::{header, HeaderValue, Method};
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::ServerConfig;
use crate::domain::{
    AdviceRequest, AdviceResponse, OrderedStep, PriorityActions, RankedFix, ViolationDigest,
};
use crate::presentation::controllers::{self, AppState};
use crate::presentation::models::{AdviceApiResponse, ErrorResponse, HealthResponse};

#[derive(OpenApi)]
#[openapi(
    paths(controllers::request_advice, controllers::health),
    components(schemas(
        AdviceRequest,
        ViolationDigest,
        AdviceResponse,
        RankedFix,
        OrderedStep,
        PriorityActions,
        AdviceApiResponse,
        ErrorResponse,
        HealthResponse
    )),
    tags(
        (name = "advice", description = "Accessibility remediation advice"),
        (name = "health", description = "Service health")
    ),
    info(
        title = "Axess API",
        description = "Accessibility audit advice gateway"
    )
)]
pub struct ApiDoc;

fn cors_layer(config: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter(|origin| origin.as_str() != "*")
        .filter_map(|origin| origin.parse().ok())
        .collect();

    let allow_origin = if config.allowed_origins.iter().any(|o| o == "*") {
        AllowOrigin::mirror_request()
    } else {
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
}

/// Build the application router with all routes and middleware
pub fn create_router(state: AppState, server: &ServerConfig) -> Router {
    let mut router = Router::new()
        .route("/health", get(controllers::health))
        .route("/api/v1/advice", post(controllers::request_advice));

    if server.enable_docs {
        router = router
            .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));
    }

    router
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(server))
        .layer(TimeoutLayer::new(Duration::from_secs(
            server.request_timeout_seconds,
        )))
        .with_state(state)
}

//! Middleware stack for the API server
//!
//! Provides request IDs, tracing, timeouts, CORS, compression and rate limiting.

use axum::{
    body::Body,
    http::{header, HeaderName, HeaderValue, Method, Request, StatusCode},
    Router,
};
use pitch_common::{AppError, CorsConfig, RateLimitConfig};
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceBuilder;
use tower_governor::{
    governor::GovernorConfigBuilder, key_extractor::GlobalKeyExtractor, GovernorLayer,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use crate::state::AppState;

/// Header name for request ID
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Requests running longer than this answer 503
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Request ID, tracing and timeout layers shared by every route
pub fn apply_middleware(router: Router<AppState>) -> Router<AppState> {
    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);

    // ServiceBuilder runs top to bottom: the ID is set before the span reads it
    router.layer(
        ServiceBuilder::new()
            .layer(SetRequestIdLayer::new(request_id.clone(), MakeRequestUuid))
            .layer(PropagateRequestIdLayer::new(request_id))
            .layer(
                TraceLayer::new_for_http()
                    .make_span_with(|request: &Request<Body>| {
                        let request_id = request
                            .headers()
                            .get(REQUEST_ID_HEADER)
                            .and_then(|v| v.to_str().ok())
                            .unwrap_or("unknown");

                        tracing::info_span!(
                            "http_request",
                            method = %request.method(),
                            uri = %request.uri(),
                            request_id = %request_id,
                        )
                    })
                    .on_request(DefaultOnRequest::new().level(Level::INFO))
                    .on_response(DefaultOnResponse::new().level(Level::INFO)),
            )
            .layer(TimeoutLayer::with_status_code(
                StatusCode::SERVICE_UNAVAILABLE,
                REQUEST_TIMEOUT,
            )),
    )
}

/// Full stack for the `/api` routes: CORS, gzip and a global rate limit on top
/// of [`apply_middleware`]
pub fn apply_middleware_with_config(
    router: Router<AppState>,
    rate_limit_config: &RateLimitConfig,
    cors_config: &CorsConfig,
    is_production: bool,
) -> Result<Router<AppState>, AppError> {
    // GlobalKeyExtractor shares one bucket across all clients
    let governor_conf = GovernorConfigBuilder::default()
        .per_millisecond(replenish_interval_ms(rate_limit_config.requests_per_second))
        .burst_size(rate_limit_config.burst)
        .key_extractor(GlobalKeyExtractor)
        .finish()
        .ok_or_else(|| {
            AppError::Config("rate limit needs a non-zero rate and burst size".to_string())
        })?;

    // Layers added later wrap earlier ones: the governor sees requests first
    let router = router
        .layer(CompressionLayer::new())
        .layer(create_cors_layer(cors_config, is_production));

    Ok(apply_middleware(router).layer(GovernorLayer {
        config: Arc::new(governor_conf),
    }))
}

/// One quota cell comes back every interval; a zero rate yields a zero
/// interval, which the governor builder rejects
fn replenish_interval_ms(requests_per_second: u32) -> u64 {
    match requests_per_second {
        0 => 0,
        rps => (1000 / u64::from(rps)).max(1),
    }
}

/// CORS with credentials, so origins are always explicit
pub fn create_cors_layer(config: &CorsConfig, is_production: bool) -> CorsLayer {
    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);
    let base_layer = CorsLayer::new()
        .allow_credentials(true)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::AUTHORIZATION,
            header::CONTENT_TYPE,
            header::ACCEPT,
            request_id.clone(),
        ])
        .expose_headers([request_id, header::CONTENT_DISPOSITION]);

    if !config.allowed_origins.is_empty() {
        let origins: Vec<HeaderValue> = config
            .allowed_origins
            .iter()
            .filter_map(|origin| {
                origin.parse::<HeaderValue>().ok().or_else(|| {
                    tracing::warn!("Invalid CORS origin: {}", origin);
                    None
                })
            })
            .collect();

        tracing::info!("CORS: Allowing {} configured origins", origins.len());
        base_layer.allow_origin(AllowOrigin::list(origins))
    } else if is_production {
        tracing::warn!(
            "CORS: No allowed origins configured in production mode. \
             Requests from browsers will be blocked."
        );
        base_layer.allow_origin(AllowOrigin::list(Vec::<HeaderValue>::new()))
    } else {
        tracing::warn!(
            "CORS: Mirroring the request origin (development mode). \
             Configure CORS_ALLOWED_ORIGINS for production."
        );
        base_layer.allow_origin(AllowOrigin::mirror_request())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_burst_is_config_error() {
        let rate_limit = RateLimitConfig {
            requests_per_second: 10,
            burst: 0,
        };
        let cors = CorsConfig {
            allowed_origins: Vec::new(),
        };

        let result = apply_middleware_with_config(Router::new(), &rate_limit, &cors, false);
        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn test_replenish_interval() {
        assert_eq!(replenish_interval_ms(0), 0);
        assert_eq!(replenish_interval_ms(10), 100);
        assert_eq!(replenish_interval_ms(5000), 1);
    }

    #[test]
    fn test_cors_layer_builds_for_every_mode() {
        let configured = CorsConfig {
            allowed_origins: vec!["http://localhost:3000".to_string(), "bad\norigin".to_string()],
        };
        let empty = CorsConfig {
            allowed_origins: Vec::new(),
        };

        let _ = create_cors_layer(&configured, true);
        let _ = create_cors_layer(&empty, true);
        let _ = create_cors_layer(&empty, false);
    }
}

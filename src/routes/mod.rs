//! Router assembly.

mod api;
mod common;

pub use api::{edge_routes, pricing_routes};
pub use common::common_routes;

use crate::config::HttpConfig;
use crate::error::ConfigError;
use crate::state::AppState;
use axum::http::{header, HeaderValue, Method};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

/// Full application router with tracing, body limit and (when configured) CORS.
pub fn app(state: AppState, http: &HttpConfig) -> Result<Router, ConfigError> {
    let mut router = Router::new()
        .merge(common_routes(state.clone()))
        .merge(edge_routes(state.clone()))
        .nest("/api/v1", pricing_routes(state))
        .layer(RequestBodyLimitLayer::new(http.body_limit_bytes))
        .layer(TraceLayer::new_for_http());
    if let Some(origin) = &http.cors_origin {
        let origin = HeaderValue::from_str(origin).map_err(|e| ConfigError::Invalid {
            key: "CORS_ORIGIN",
            message: e.to_string(),
        })?;
        router = router.layer(
            CorsLayer::new()
                .allow_origin(origin)
                .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                .allow_headers([header::CONTENT_TYPE]),
        );
    }
    Ok(router)
}

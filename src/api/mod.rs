use std::sync::Arc;

use axum::{
    http::{header, HeaderValue, Method, StatusCode},
    Json, Router,
};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};
use tracing::warn;

use self::rest::router as rest_router;

pub mod graphql;
pub mod rest;

use crate::infrastructure::config::{AppConfig, Config};

pub fn build_router(config: Arc<Config>) -> Router {
    let router = Router::new()
        .merge(graphql::router(&config.graphql))
        .nest("/api", rest_router())
        .fallback(not_found)
        .layer(TraceLayer::new_for_http());

    if let Some(cors) = cors_layer(&config.app) {
        router.layer(cors)
    } else {
        router
    }
}

pub async fn not_found() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({"error": "not_found"})),
    )
}

fn cors_layer(config: &AppConfig) -> Option<CorsLayer> {
    let origins: Vec<HeaderValue> = config
        .cors_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(%origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    if origins.is_empty() {
        return None;
    }

    Some(
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods([Method::GET, Method::POST])
            .allow_headers([header::CONTENT_TYPE]),
    )
}

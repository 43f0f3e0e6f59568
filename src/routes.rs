use std::sync::Arc;

use axum::{
    http::{HeaderValue, Uri},
    routing::{any, get},
    Router,
};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::config::{sanitize_verify_paths, AppConfig};
use crate::error::ApiError;
use crate::handlers;

/// Shared with handlers so they describe the routes actually mounted.
pub type AppState = Arc<AppConfig>;

pub fn app(config: &AppConfig) -> Router {
    let mut config = config.clone();
    config.legacy.verify_paths = sanitize_verify_paths(config.legacy.verify_paths);

    Router::new()
        .merge(public_routes(&config))
        .merge(legacy_routes(&config))
        .fallback(not_found)
        // Global middleware
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(config))
}

fn public_routes(config: &AppConfig) -> Router<AppState> {
    let routes = Router::new()
        .route("/", get(handlers::root).fallback(method_not_allowed))
        .route("/health", get(handlers::health).fallback(method_not_allowed));

    match cors_layer(config) {
        Some(cors) => routes.layer(cors),
        None => routes,
    }
}

/// Retired verification routes. Kept out of the CORS layer so the preflight
/// response carries exactly the headers the handler sets.
fn legacy_routes(config: &AppConfig) -> Router<AppState> {
    config
        .legacy
        .verify_paths
        .iter()
        .fold(Router::new(), |router, path| {
            router.route(path, any(handlers::verify_deprecated))
        })
}

fn cors_layer(config: &AppConfig) -> Option<CorsLayer> {
    if !config.security.enable_cors {
        return None;
    }

    if config.security.cors_origins.iter().any(|o| o == "*") {
        return Some(CorsLayer::permissive());
    }

    let origins: Vec<HeaderValue> = config
        .security
        .cors_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin {:?}", origin);
                None
            }
        })
        .collect();

    Some(CorsLayer::new().allow_origin(AllowOrigin::list(origins)))
}

async fn not_found(uri: Uri) -> ApiError {
    ApiError::not_found(format!("No route for {}", uri.path()))
}

async fn method_not_allowed() -> ApiError {
    ApiError::method_not_allowed("Method not allowed")
}

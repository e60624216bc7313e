//! Fitness-tracking backend: logged exercise activities and daily wellness
//! check-ins, stored in SQLite and served as JSON to the dashboard.

use std::sync::Arc;

use axum::{
    http::{header, HeaderValue, Method},
    routing::get,
    Router,
};
use sqlx::SqlitePool;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;

use config::Config;

/// Shared request context, built once at startup and handed to every
/// handler through axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(db: SqlitePool, config: Config) -> Self {
        Self {
            db,
            config: Arc::new(config),
        }
    }
}

pub fn router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route(
            "/api/activities",
            get(handlers::activities::list_activities).post(handlers::activities::create_activity),
        )
        .route(
            "/api/wellness",
            get(handlers::wellness::list_wellness).post(handlers::wellness::upsert_wellness),
        );

    let public_routes = Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/readyz", get(handlers::health::readyz));

    let cors = cors_layer(&state.config);

    Router::new()
        .merge(public_routes)
        .merge(api_routes)
        .fallback(handlers::not_found)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Restricts CORS to the configured origins. Allows any origin when none are
/// configured or when one of them is `*`; tower-http rejects `*` inside an
/// origin list.
pub fn cors_layer(config: &Config) -> CorsLayer {
    if config.cors_origins.is_empty() || config.cors_origins.iter().any(|o| o == "*") {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = config
        .cors_origins
        .iter()
        .filter_map(|o| match o.parse::<HeaderValue>() {
            Ok(hv) => Some(hv),
            Err(_) => {
                tracing::warn!(origin = %o, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
}

pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fittrack_api=debug,tower_http=debug".into()),
        )
        .json()
        .init();
}

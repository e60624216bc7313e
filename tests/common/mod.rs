#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::SqlitePool;
use tempfile::TempDir;
use tower::ServiceExt;

use fittrack_api::{config::Config, db, router, AppState};

/// Router over a fresh, migrated in-memory database.
pub async fn test_app() -> (Router, SqlitePool) {
    let pool = db::create_pool("sqlite::memory:", 1)
        .await
        .expect("in-memory pool");
    db::run_migrations(&pool).await.expect("migrations");
    let app = router(AppState::new(pool.clone(), Config::default()));
    (app, pool)
}

/// Router over a migrated SQLite file with several pooled connections, so
/// requests really run side by side. Keep the `TempDir` alive for the test.
pub async fn file_app(max_connections: u32) -> (Router, SqlitePool, TempDir) {
    let dir = tempfile::tempdir().expect("temp dir");
    let url = format!("sqlite://{}", dir.path().join("fitness.db").display());
    let pool = db::create_pool(&url, max_connections)
        .await
        .expect("file pool");
    db::run_migrations(&pool).await.expect("migrations");
    let app = router(AppState::new(pool.clone(), Config::default()));
    (app, pool, dir)
}

/// Router over a database whose schema was never migrated.
pub async fn unmigrated_app() -> Router {
    let pool = db::create_pool("sqlite::memory:", 1)
        .await
        .expect("in-memory pool");
    router(AppState::new(pool, Config::default()))
}

pub fn app_with_config(pool: SqlitePool, config: Config) -> Router {
    router(AppState::new(pool, config))
}

pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

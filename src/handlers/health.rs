use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use sqlx::Connection;

use crate::db;
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ReadyzResponse {
    pub status: &'static str,
    pub checks: ReadyzChecks,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub pending_migrations: Vec<i64>,
}

#[derive(Debug, Serialize)]
pub struct ReadyzChecks {
    pub database: bool,
    pub migrations: bool,
}

/// GET /health: the process is up.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        service: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// GET /readyz: the database answers and its schema is fully migrated, so
/// the activity and wellness queries can run.
pub async fn readyz(State(state): State<AppState>) -> (StatusCode, Json<ReadyzResponse>) {
    let database = match state.db.acquire().await {
        Ok(mut conn) => conn.ping().await.is_ok(),
        Err(e) => {
            tracing::warn!(error = %e, "Readiness: cannot acquire a database connection");
            false
        }
    };

    let pending_migrations = if database {
        match db::migrate::pending_migrations(&state.db).await {
            Ok(pending) => pending,
            Err(e) => {
                tracing::warn!(error = %e, "Readiness: cannot read migration history");
                db::migrate::embedded_versions()
            }
        }
    } else {
        Vec::new()
    };
    let migrations = database && pending_migrations.is_empty();

    let status = if migrations {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (
        status,
        Json(ReadyzResponse {
            status: if migrations { "ready" } else { "not_ready" },
            checks: ReadyzChecks {
                database,
                migrations,
            },
            pending_migrations,
        }),
    )
}

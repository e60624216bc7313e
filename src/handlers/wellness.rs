use axum::{extract::State, http::StatusCode, Json};
use axum_extra::extract::WithRejection;
use chrono::Utc;
use serde_json::{json, Value};

use crate::db;
use crate::db::wellness::RECENT_WELLNESS_WINDOW;
use crate::error::{AppError, AppResult};
use crate::models::wellness::{UpsertWellnessRequest, WellnessEntry, WellnessReading};
use crate::AppState;

pub async fn list_wellness(State(state): State<AppState>) -> AppResult<Json<Vec<WellnessEntry>>> {
    let entries = db::wellness::list_recent_wellness(&state.db, RECENT_WELLNESS_WINDOW).await?;
    Ok(Json(entries))
}

/// Records today's check-in, replacing any earlier one from the same day.
/// Answers 201 on both paths; the dashboard only checks for success.
pub async fn upsert_wellness(
    State(state): State<AppState>,
    WithRejection(Json(body), _): WithRejection<Json<UpsertWellnessRequest>, AppError>,
) -> AppResult<(StatusCode, Json<Value>)> {
    let reading = WellnessReading::try_from(body)?;
    let today = Utc::now().date_naive();

    let entry = db::wellness::upsert_wellness(&state.db, today, reading).await?;

    tracing::info!(
        id = entry.id,
        date = %entry.date,
        energy_level = entry.energy_level,
        mood_score = entry.mood_score,
        "Wellness check-in saved"
    );

    Ok((StatusCode::CREATED, Json(json!({ "status": "success" }))))
}

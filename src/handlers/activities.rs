use axum::{extract::State, http::StatusCode, Json};
use axum_extra::extract::WithRejection;
use chrono::Utc;

use crate::db;
use crate::error::{AppError, AppResult};
use crate::models::activity::{Activity, CreateActivityRequest, NewActivity};
use crate::AppState;

pub async fn list_activities(State(state): State<AppState>) -> AppResult<Json<Vec<Activity>>> {
    let activities = db::activities::list_activities(&state.db).await?;
    Ok(Json(activities))
}

pub async fn create_activity(
    State(state): State<AppState>,
    WithRejection(Json(body), _): WithRejection<Json<CreateActivityRequest>, AppError>,
) -> AppResult<(StatusCode, Json<Activity>)> {
    let new = NewActivity::try_from(body)?;

    let activity = db::activities::insert_activity(&state.db, &new, Utc::now()).await?;

    tracing::info!(
        id = activity.id,
        activity_type = %activity.activity_type,
        duration = activity.duration,
        "Activity logged"
    );

    Ok((StatusCode::CREATED, Json(activity)))
}

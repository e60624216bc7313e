use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use crate::models::activity::{Activity, NewActivity, TIMESTAMP_STORAGE_FORMAT};

/// Stores a new activity stamped with `recorded_at` and returns the full row.
pub async fn insert_activity(
    db: &SqlitePool,
    new: &NewActivity,
    recorded_at: DateTime<Utc>,
) -> Result<Activity, sqlx::Error> {
    sqlx::query_as::<_, Activity>(
        r#"
        INSERT INTO activities (type, duration, intensity, notes, timestamp)
        VALUES (?1, ?2, ?3, ?4, ?5)
        RETURNING id, type, duration, intensity, COALESCE(notes, '') AS notes, timestamp
        "#,
    )
    .bind(&new.activity_type)
    .bind(new.duration)
    .bind(&new.intensity)
    .bind(&new.notes)
    .bind(
        recorded_at
            .naive_utc()
            .format(TIMESTAMP_STORAGE_FORMAT)
            .to_string(),
    )
    .fetch_one(db)
    .await
}

/// Every activity, newest first. Rows left over from databases created
/// before `notes` became `NOT NULL` read back with empty notes.
pub async fn list_activities(db: &SqlitePool) -> Result<Vec<Activity>, sqlx::Error> {
    sqlx::query_as::<_, Activity>(
        r#"
        SELECT id, type, duration, intensity, COALESCE(notes, '') AS notes, timestamp
        FROM activities
        ORDER BY timestamp DESC, id DESC
        "#,
    )
    .fetch_all(db)
    .await
}

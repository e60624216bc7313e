use chrono::NaiveDate;
use sqlx::SqlitePool;

use crate::models::wellness::{WellnessEntry, WellnessReading};

/// How many days `GET /api/wellness` returns.
pub const RECENT_WELLNESS_WINDOW: i64 = 7;

pub async fn find_wellness_by_date(
    db: &SqlitePool,
    date: NaiveDate,
) -> Result<Option<WellnessEntry>, sqlx::Error> {
    sqlx::query_as::<_, WellnessEntry>(
        "SELECT id, energy_level, sleep_hours, mood_score, date FROM wellness WHERE date = ?1",
    )
    .bind(date)
    .fetch_optional(db)
    .await
}

/// Writes the reading for `date`, overwriting the measured fields if that
/// day already has an entry. One statement, so concurrent posts for the
/// same day cannot produce two rows.
pub async fn upsert_wellness(
    db: &SqlitePool,
    date: NaiveDate,
    reading: WellnessReading,
) -> Result<WellnessEntry, sqlx::Error> {
    sqlx::query_as::<_, WellnessEntry>(
        r#"
        INSERT INTO wellness (energy_level, sleep_hours, mood_score, date)
        VALUES (?1, ?2, ?3, ?4)
        ON CONFLICT (date) DO UPDATE SET
            energy_level = excluded.energy_level,
            sleep_hours = excluded.sleep_hours,
            mood_score = excluded.mood_score
        RETURNING id, energy_level, sleep_hours, mood_score, date
        "#,
    )
    .bind(reading.energy_level)
    .bind(reading.sleep_hours)
    .bind(reading.mood_score)
    .bind(date)
    .fetch_one(db)
    .await
}

/// The `limit` most recent entries, oldest first.
pub async fn list_recent_wellness(
    db: &SqlitePool,
    limit: i64,
) -> Result<Vec<WellnessEntry>, sqlx::Error> {
    let mut entries = sqlx::query_as::<_, WellnessEntry>(
        r#"
        SELECT id, energy_level, sleep_hours, mood_score, date
        FROM wellness
        ORDER BY date DESC
        LIMIT ?1
        "#,
    )
    .bind(limit)
    .fetch_all(db)
    .await?;

    entries.reverse();
    Ok(entries)
}

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::error::AppError;

/// One daily check-in. Scores are meant to be 1-10 but are stored as sent.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct WellnessEntry {
    pub id: i64,
    pub energy_level: i32,
    pub sleep_hours: f64,
    pub mood_score: i32,
    pub date: NaiveDate,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpsertWellnessRequest {
    #[validate(required(message = "energy_level is required"))]
    pub energy_level: Option<i32>,
    #[validate(required(message = "sleep_hours is required"))]
    pub sleep_hours: Option<f64>,
    #[validate(required(message = "mood_score is required"))]
    pub mood_score: Option<i32>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WellnessReading {
    pub energy_level: i32,
    pub sleep_hours: f64,
    pub mood_score: i32,
}

impl TryFrom<UpsertWellnessRequest> for WellnessReading {
    type Error = AppError;

    fn try_from(req: UpsertWellnessRequest) -> Result<Self, Self::Error> {
        req.validate()?;
        match (req.energy_level, req.sleep_hours, req.mood_score) {
            (Some(energy_level), Some(sleep_hours), Some(mood_score)) => Ok(Self {
                energy_level,
                sleep_hours,
                mood_score,
            }),
            _ => Err(AppError::BadRequest(
                "energy_level, sleep_hours and mood_score are required".into(),
            )),
        }
    }
}

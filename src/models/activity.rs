use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize, Serializer};
use sqlx::FromRow;
use validator::Validate;

use crate::error::AppError;

/// Storage format for `activities.timestamp`. Fixed width, so that text
/// ordering in SQLite matches chronological ordering.
pub const TIMESTAMP_STORAGE_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Format exposed to the dashboard.
pub const TIMESTAMP_DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M";

/// A logged exercise session. Timestamps are UTC.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Activity {
    pub id: i64,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub activity_type: String,
    /// Minutes.
    pub duration: i32,
    pub intensity: String,
    pub notes: String,
    #[serde(serialize_with = "serialize_to_minute")]
    pub timestamp: NaiveDateTime,
}

fn serialize_to_minute<S>(ts: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(&ts.format(TIMESTAMP_DISPLAY_FORMAT))
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateActivityRequest {
    #[serde(rename = "type")]
    #[validate(required(message = "type is required"))]
    pub activity_type: Option<String>,
    #[validate(required(message = "duration is required"))]
    pub duration: Option<i32>,
    #[validate(required(message = "intensity is required"))]
    pub intensity: Option<String>,
    pub notes: Option<String>,
}

/// A validated activity ready to be stored.
#[derive(Debug, Clone, PartialEq)]
pub struct NewActivity {
    pub activity_type: String,
    pub duration: i32,
    pub intensity: String,
    pub notes: String,
}

impl TryFrom<CreateActivityRequest> for NewActivity {
    type Error = AppError;

    fn try_from(req: CreateActivityRequest) -> Result<Self, Self::Error> {
        req.validate()?;
        match (req.activity_type, req.duration, req.intensity) {
            (Some(activity_type), Some(duration), Some(intensity)) => Ok(Self {
                activity_type,
                duration,
                intensity,
                notes: req.notes.unwrap_or_default(),
            }),
            _ => Err(AppError::BadRequest(
                "type, duration and intensity are required".into(),
            )),
        }
    }
}

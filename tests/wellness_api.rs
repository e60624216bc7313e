mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use chrono::{Duration, Utc};
use serde_json::json;
use tokio::sync::Barrier;

use common::{file_app, get, post_json, test_app};
use fittrack_api::db;
use fittrack_api::models::wellness::WellnessReading;

#[tokio::test]
async fn test_first_post_creates_todays_entry() {
    let (app, pool) = test_app().await;

    let (status, body) = post_json(
        &app,
        "/api/wellness",
        json!({ "energy_level": 7, "sleep_hours": 6.5, "mood_score": 8 }),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, json!({ "status": "success" }));

    let today = Utc::now().date_naive();
    let entry = db::wellness::find_wellness_by_date(&pool, today)
        .await
        .unwrap()
        .expect("entry for today");
    assert_eq!(entry.energy_level, 7);
    assert_eq!(entry.sleep_hours, 6.5);
    assert_eq!(entry.mood_score, 8);
}

#[tokio::test]
async fn test_second_post_same_day_wins() {
    let (app, _) = test_app().await;

    post_json(
        &app,
        "/api/wellness",
        json!({ "energy_level": 7, "sleep_hours": 6.5, "mood_score": 8 }),
    )
    .await;
    let (status, _) = post_json(
        &app,
        "/api/wellness",
        json!({ "energy_level": 9, "sleep_hours": 7.0, "mood_score": 9 }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = get(&app, "/api/wellness").await;
    assert_eq!(status, StatusCode::OK);
    let list = body.as_array().unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["energy_level"], 9);
    assert_eq!(list[0]["sleep_hours"], 7.0);
    assert_eq!(list[0]["mood_score"], 9);
    assert_eq!(
        list[0]["date"],
        Utc::now().date_naive().format("%Y-%m-%d").to_string()
    );
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_same_day_posts_leave_one_row() {
    let (app, pool, _dir) = file_app(4).await;
    let start = Arc::new(Barrier::new(16));

    let posts: Vec<_> = (1..=16)
        .map(|i| {
            let app = app.clone();
            let start = start.clone();
            tokio::spawn(async move {
                start.wait().await;
                post_json(
                    &app,
                    "/api/wellness",
                    json!({ "energy_level": i, "sleep_hours": 7.5, "mood_score": i }),
                )
                .await
            })
        })
        .collect();
    for handle in posts {
        let (status, _) = handle.await.unwrap();
        assert_eq!(status, StatusCode::CREATED);
    }

    let rows = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM wellness")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(rows, 1);

    let (_, body) = get(&app, "/api/wellness").await;
    let list = body.as_array().unwrap();
    assert_eq!(list.len(), 1);
    let energy = list[0]["energy_level"].as_i64().unwrap();
    assert!((1..=16).contains(&energy));
    assert_eq!(list[0]["mood_score"], energy);
}

#[tokio::test]
async fn test_list_is_last_seven_days_oldest_first() {
    let (app, pool) = test_app().await;
    let today = Utc::now().date_naive();

    for days_ago in 0..10 {
        let reading = WellnessReading {
            energy_level: 10 - days_ago as i32,
            sleep_hours: 8.0,
            mood_score: 6,
        };
        db::wellness::upsert_wellness(&pool, today - Duration::days(days_ago), reading)
            .await
            .unwrap();
    }

    let (status, body) = get(&app, "/api/wellness").await;
    assert_eq!(status, StatusCode::OK);
    let dates: Vec<String> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["date"].as_str().unwrap().to_string())
        .collect();
    let expected: Vec<String> = (0..7)
        .rev()
        .map(|d| (today - Duration::days(d)).format("%Y-%m-%d").to_string())
        .collect();
    assert_eq!(dates, expected);
}

#[tokio::test]
async fn test_missing_fields_are_a_client_error() {
    let (app, pool) = test_app().await;

    let (status, body) = post_json(&app, "/api/wellness", json!({ "energy_level": 5 })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"]["message"],
        "mood_score is required; sleep_hours is required"
    );
    let recent = db::wellness::list_recent_wellness(&pool, 7).await.unwrap();
    assert!(recent.is_empty());
}

pub mod activities;
pub mod migrate;
pub mod pool;
pub mod wellness;

pub use migrate::run_migrations;
pub use pool::create_pool;

#[cfg(test)]
pub(crate) async fn test_pool() -> sqlx::SqlitePool {
    let pool = create_pool("sqlite::memory:", 1)
        .await
        .expect("in-memory pool");
    run_migrations(&pool).await.expect("migrations");
    pool
}

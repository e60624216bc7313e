use sqlx::migrate::{MigrateError, Migrator};
use sqlx::SqlitePool;

static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Applies any pending schema migrations. Safe to call repeatedly.
pub async fn run_migrations(db: &SqlitePool) -> Result<(), MigrateError> {
    MIGRATOR.run(db).await?;
    tracing::info!(
        migrations = MIGRATOR.iter().count(),
        "Database migrations applied"
    );
    Ok(())
}

/// Versions of every migration compiled into the binary.
pub fn embedded_versions() -> Vec<i64> {
    MIGRATOR.iter().map(|m| m.version).collect()
}

/// Embedded migrations not yet recorded as applied in `db`. A database that
/// was never migrated reports all of them.
pub async fn pending_migrations(db: &SqlitePool) -> Result<Vec<i64>, sqlx::Error> {
    let tracked = sqlx::query_scalar::<_, i64>(
        "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = '_sqlx_migrations'",
    )
    .fetch_one(db)
    .await?
        > 0;

    let applied: Vec<i64> = if tracked {
        sqlx::query_scalar::<_, i64>("SELECT version FROM _sqlx_migrations WHERE success = 1")
            .fetch_all(db)
            .await?
    } else {
        Vec::new()
    };

    Ok(embedded_versions()
        .into_iter()
        .filter(|v| !applied.contains(v))
        .collect())
}

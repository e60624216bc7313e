use anyhow::{bail, Context};
use sqlx::SqlitePool;

use fittrack_api::{config::Config, db, router, AppState};

enum Command {
    Serve,
    Migrate,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fittrack_api::init_tracing();

    let command = match std::env::args().nth(1).as_deref() {
        None | Some("serve") => Command::Serve,
        Some("migrate") => Command::Migrate,
        Some(other) => bail!("Unknown command {other:?}; expected `serve` or `migrate`"),
    };

    let config = Config::from_env()?;

    let db = db::create_pool(&config.database_url, config.db_max_connections)
        .await
        .with_context(|| format!("Failed to open database {}", config.database_url))?;

    db::run_migrations(&db)
        .await
        .context("Failed to run database migrations")?;

    match command {
        Command::Migrate => Ok(()),
        Command::Serve => serve(db, config).await,
    }
}

async fn serve(db: SqlitePool, config: Config) -> anyhow::Result<()> {
    let addr = config.listen_addr();
    let app = router(AppState::new(db, config));

    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    axum::serve(listener, app).await?;

    Ok(())
}

use std::env;

use anyhow::Context;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub db_max_connections: u32,
    pub host: String,
    pub port: u16,

    /// Origins allowed by CORS. Empty, or containing `*`, means any origin.
    pub cors_origins: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: "sqlite://fitness.db".into(),
            db_max_connections: 5,
            host: "0.0.0.0".into(),
            port: 5000,
            cors_origins: Vec::new(),
        }
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup, falling back to the
    /// defaults for anything unset or blank.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let db_max_connections = match get("DB_MAX_CONNECTIONS") {
            Some(v) => v
                .trim()
                .parse()
                .with_context(|| format!("DB_MAX_CONNECTIONS must be a number, got {v:?}"))?,
            None => defaults.db_max_connections,
        };
        let port = match get("PORT") {
            Some(v) => v
                .trim()
                .parse()
                .with_context(|| format!("PORT must be a number, got {v:?}"))?,
            None => defaults.port,
        };

        let mut cors_origins: Vec<String> = get("FRONTEND_URL").into_iter().collect();
        if let Some(extra) = get("CORS_EXTRA_ORIGINS") {
            cors_origins.extend(
                extra
                    .split(',')
                    .map(|o| o.trim().to_string())
                    .filter(|o| !o.is_empty()),
            );
        }

        Ok(Self {
            database_url: get("DATABASE_URL").unwrap_or(defaults.database_url),
            db_max_connections,
            host: get("HOST").unwrap_or(defaults.host),
            port,
            cors_origins,
        })
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

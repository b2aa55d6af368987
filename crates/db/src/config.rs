use std::str::FromStr;
use std::time::Duration;

use sqlx::postgres::{PgConnectOptions, PgSslMode};

/// Connection-pool policy, loaded once at startup.
#[derive(Debug, Clone)]
pub struct DbConfig {
    /// PostgreSQL connection string.
    pub url: String,
    /// Upper bound on pooled connections (default: `20`).
    pub max_connections: u32,
    /// How long a request waits for a free connection (default: 10s).
    pub acquire_timeout: Duration,
    /// Idle connections are closed after this long (default: 30s).
    pub idle_timeout: Duration,
    /// Server-side `statement_timeout` for every connection (default: 30s).
    pub statement_timeout: Duration,
    /// Overrides any `sslmode` in the URL when set.
    pub ssl_mode: Option<PgSslMode>,
}

impl DbConfig {
    /// A config for `url` with the default pool policy.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_connections: 20,
            acquire_timeout: Duration::from_secs(10),
            idle_timeout: Duration::from_secs(30),
            statement_timeout: Duration::from_secs(30),
            ssl_mode: None,
        }
    }

    /// Load the pool policy from environment variables.
    ///
    /// | Env Var                     | Default   |
    /// |-----------------------------|-----------|
    /// | `DATABASE_URL`              | required  |
    /// | `DB_MAX_CONNECTIONS`        | `20`      |
    /// | `DB_ACQUIRE_TIMEOUT_SECS`   | `10`      |
    /// | `DB_IDLE_TIMEOUT_SECS`      | `30`      |
    /// | `DB_STATEMENT_TIMEOUT_SECS` | `30`      |
    /// | `DATABASE_SSL_MODE`         | from URL  |
    ///
    /// Panics on missing or malformed values so misconfiguration fails at startup.
    pub fn from_env() -> Self {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
        let defaults = Self::new(url);

        let max_connections: u32 = env_or("DB_MAX_CONNECTIONS", defaults.max_connections);
        let acquire_timeout =
            env_or("DB_ACQUIRE_TIMEOUT_SECS", defaults.acquire_timeout.as_secs());
        let idle_timeout = env_or("DB_IDLE_TIMEOUT_SECS", defaults.idle_timeout.as_secs());
        let statement_timeout =
            env_or("DB_STATEMENT_TIMEOUT_SECS", defaults.statement_timeout.as_secs());

        let ssl_mode = std::env::var("DATABASE_SSL_MODE").ok().map(|mode| {
            PgSslMode::from_str(&mode)
                .unwrap_or_else(|e| panic!("Invalid DATABASE_SSL_MODE '{mode}': {e}"))
        });

        Self {
            max_connections,
            acquire_timeout: Duration::from_secs(acquire_timeout),
            idle_timeout: Duration::from_secs(idle_timeout),
            statement_timeout: Duration::from_secs(statement_timeout),
            ssl_mode,
            ..defaults
        }
    }

    /// Connection options derived from the URL plus this policy.
    pub fn connect_options(&self) -> Result<PgConnectOptions, sqlx::Error> {
        let mut options = PgConnectOptions::from_str(&self.url)?.options([(
            "statement_timeout",
            self.statement_timeout.as_millis().to_string(),
        )]);
        if let Some(mode) = self.ssl_mode {
            options = options.ssl_mode(mode);
        }
        Ok(options)
    }
}

fn env_or<T>(key: &str, default: T) -> T
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .parse()
            .unwrap_or_else(|e| panic!("{key} must be a valid number, got '{raw}': {e}")),
        Err(_) => default,
    }
}

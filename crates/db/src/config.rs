//! Connection settings for the store.

use std::fmt;

use movie_rentals_core::error::CoreError;
use sqlx::postgres::PgConnectOptions;

/// Connection settings loaded from environment variables.
///
/// | Env Var                   | Default         |
/// |---------------------------|-----------------|
/// | `DB_HOST`                 | `localhost`     |
/// | `DB_PORT`                 | `5432`          |
/// | `DB_USER`                 | `postgres`      |
/// | `DB_PASSWORD`             | unset           |
/// | `DB_NAME`                 | `movie_rentals` |
/// | `DB_MAX_CONNECTIONS`      | `5`             |
/// | `DB_ACQUIRE_TIMEOUT_SECS` | `30`            |
///
/// When `DATABASE_URL` is set it takes precedence over the five connection
/// fields; the pool settings still apply.
#[derive(Clone, PartialEq, Eq)]
pub struct DbConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: Option<String>,
    pub database: String,
    pub url: Option<String>,
    pub max_connections: u32,
    pub acquire_timeout_secs: u64,
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            host: "localhost".into(),
            port: 5432,
            user: "postgres".into(),
            password: None,
            database: "movie_rentals".into(),
            url: None,
            max_connections: 5,
            acquire_timeout_secs: 30,
        }
    }
}

impl DbConfig {
    /// Load settings from the process environment.
    pub fn from_env() -> Result<Self, CoreError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load settings through `lookup`, which maps a variable name to its value.
    ///
    /// Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, CoreError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        Ok(Self {
            host: get("DB_HOST").unwrap_or(defaults.host),
            port: parse_or("DB_PORT", get("DB_PORT"), defaults.port)?,
            user: get("DB_USER").unwrap_or(defaults.user),
            password: get("DB_PASSWORD"),
            database: get("DB_NAME").unwrap_or(defaults.database),
            url: get("DATABASE_URL"),
            max_connections: parse_or(
                "DB_MAX_CONNECTIONS",
                get("DB_MAX_CONNECTIONS"),
                defaults.max_connections,
            )?,
            acquire_timeout_secs: parse_or(
                "DB_ACQUIRE_TIMEOUT_SECS",
                get("DB_ACQUIRE_TIMEOUT_SECS"),
                defaults.acquire_timeout_secs,
            )?,
        })
    }

    /// Build sqlx connect options from these settings.
    pub fn connect_options(&self) -> Result<PgConnectOptions, CoreError> {
        if let Some(url) = &self.url {
            return url
                .parse::<PgConnectOptions>()
                .map_err(|e| CoreError::Config(format!("DATABASE_URL is not a valid URL: {e}")));
        }

        let options = PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .database(&self.database);

        Ok(match &self.password {
            Some(password) => options.password(password),
            None => options,
        })
    }
}

fn parse_or<T: std::str::FromStr>(
    key: &'static str,
    value: Option<String>,
    default: T,
) -> Result<T, CoreError> {
    match value {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| CoreError::Config(format!("{key} has an invalid value: {raw:?}"))),
    }
}

// Hand-written so the password and URL never reach the logs.
impl fmt::Debug for DbConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DbConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &self.password.as_ref().map(|_| "***"))
            .field("database", &self.database)
            .field("url", &self.url.as_ref().map(|_| "***"))
            .field("max_connections", &self.max_connections)
            .field("acquire_timeout_secs", &self.acquire_timeout_secs)
            .finish()
    }
}

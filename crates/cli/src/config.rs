//! Application configuration loaded from environment variables.

use std::str::FromStr;

use movie_rentals_core::error::CoreError;
use movie_rentals_db::DbConfig;

/// Output format for log lines written to stderr.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "pretty" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            other => Err(CoreError::Config(format!(
                "LOG_FORMAT must be `text` or `json`, got {other:?}"
            ))),
        }
    }
}

/// Everything the binary needs before it touches the store.
///
/// | Env Var                | Default |
/// |------------------------|---------|
/// | `LOG_FORMAT`           | `text`  |
/// | `MOVIE_RENTALS_STRICT` | `false` |
///
/// Connection settings come from [`DbConfig`].
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub db: DbConfig,
    pub log_format: LogFormat,
    /// Strict mode from the environment. `--strict` can also enable it.
    pub strict: bool,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, CoreError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, CoreError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let log_format = match lookup("LOG_FORMAT").filter(|v| !v.trim().is_empty()) {
            Some(raw) => raw.parse()?,
            None => LogFormat::default(),
        };

        let strict = match lookup("MOVIE_RENTALS_STRICT").filter(|v| !v.trim().is_empty()) {
            Some(raw) => parse_bool("MOVIE_RENTALS_STRICT", &raw)?,
            None => false,
        };

        Ok(Self {
            db: DbConfig::from_lookup(&lookup)?,
            log_format,
            strict,
        })
    }
}

fn parse_bool(key: &'static str, raw: &str) -> Result<bool, CoreError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(CoreError::Config(format!(
            "{key} must be a boolean, got {raw:?}"
        ))),
    }
}

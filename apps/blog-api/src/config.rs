//! Application configuration loaded from environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use blog_infra::DatabaseConfig;

use crate::telemetry::TelemetryConfig;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// `None` selects the in-memory store.
    pub database: Option<DatabaseConfig>,
    /// Apply pending migrations before serving.
    pub auto_migrate: bool,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let database = env::var("DATABASE_URL").ok().map(|url| DatabaseConfig {
            url,
            max_connections: parse_env("DB_MAX_CONNECTIONS", 20),
            min_connections: parse_env("DB_MIN_CONNECTIONS", 2),
            connect_timeout: Duration::from_secs(parse_env("DB_CONNECT_TIMEOUT_SECS", 10)),
            sqlx_logging: flag_env("DB_SQL_LOGGING", false),
        });

        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: parse_env("PORT", 8080),
            database,
            auto_migrate: flag_env("DB_AUTO_MIGRATE", false),
            telemetry: TelemetryConfig::from_env(),
        }
    }
}

/// Parse `key`, falling back to `default` when unset or malformed.
fn parse_env<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

/// `true`/`1` and `false`/`0` (any case); anything else is `default`.
fn flag_env(key: &str, default: bool) -> bool {
    match env::var(key).map(|v| v.to_lowercase()) {
        Ok(v) if v == "true" || v == "1" => true,
        Ok(v) if v == "false" || v == "0" => false,
        _ => default,
    }
}

use std::path::PathBuf;
use std::str::FromStr;

use axum::http::HeaderValue;
use drawer_core::image_intake::DEFAULT_MAX_BYTES;

/// Errors raised while reading configuration from the environment.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must be a valid {expected}, got {value:?}")]
    InvalidNumber {
        var: &'static str,
        expected: &'static str,
        value: String,
    },

    #[error("Invalid CORS origin {0:?}")]
    InvalidOrigin(String),
}

/// Origins allowed to make cross-origin requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsOrigins {
    /// `*`: any origin. The request origin is mirrored back so credentials
    /// remain usable.
    Any,
    /// Explicit allow-list.
    List(Vec<HeaderValue>),
}

impl CorsOrigins {
    /// Parse a comma-separated list. A `*` entry anywhere means [`CorsOrigins::Any`].
    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        let entries: Vec<&str> = raw
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect();

        if entries.is_empty() || entries.contains(&"*") {
            return Ok(Self::Any);
        }

        entries
            .into_iter()
            .map(|o| HeaderValue::from_str(o).map_err(|_| ConfigError::InvalidOrigin(o.to_string())))
            .collect::<Result<Vec<_>, _>>()
            .map(Self::List)
    }
}

/// Database connection settings.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// PostgreSQL URL. `None` selects the in-memory store.
    pub url: Option<String>,
    /// Overrides the database named in `url`.
    pub name: Option<String>,
    pub max_connections: u32,
}

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8001`).
    pub port: u16,
    pub database: DatabaseConfig,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    pub cors_origins: CorsOrigins,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Upper bound on store teardown after the server stops (default: `10`).
    pub shutdown_timeout_secs: u64,
    /// Directory uploaded images are written to and served from.
    pub upload_dir: PathBuf,
    /// Largest accepted image, in bytes (default: 5 MiB).
    pub max_upload_bytes: usize,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                 | Default    |
    /// |-------------------------|------------|
    /// | `HOST`                  | `0.0.0.0`  |
    /// | `PORT`                  | `8001`     |
    /// | `DATABASE_URL`          | (none)     |
    /// | `DB_NAME`               | (none)     |
    /// | `DB_MAX_CONNECTIONS`    | `10`       |
    /// | `CORS_ORIGINS`          | `*`        |
    /// | `REQUEST_TIMEOUT_SECS`  | `30`       |
    /// | `SHUTDOWN_TIMEOUT_SECS` | `10`       |
    /// | `UPLOAD_DIR`            | `uploads`  |
    /// | `MAX_UPLOAD_BYTES`      | `5242880`  |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let host = non_empty("HOST").unwrap_or_else(|| "0.0.0.0".into());
        let port = parse_number(&lookup, "PORT", "u16", 8001)?;

        let database = DatabaseConfig {
            url: non_empty("DATABASE_URL"),
            name: non_empty("DB_NAME"),
            max_connections: parse_number(&lookup, "DB_MAX_CONNECTIONS", "u32", 10)?,
        };

        let cors_origins = CorsOrigins::parse(&lookup("CORS_ORIGINS").unwrap_or_else(|| "*".into()))?;

        let request_timeout_secs = parse_number(&lookup, "REQUEST_TIMEOUT_SECS", "u64", 30)?;
        let shutdown_timeout_secs = parse_number(&lookup, "SHUTDOWN_TIMEOUT_SECS", "u64", 10)?;

        let upload_dir = non_empty("UPLOAD_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("uploads"));
        let max_upload_bytes =
            parse_number(&lookup, "MAX_UPLOAD_BYTES", "usize", DEFAULT_MAX_BYTES)?;

        Ok(Self {
            host,
            port,
            database,
            cors_origins,
            request_timeout_secs,
            shutdown_timeout_secs,
            upload_dir,
            max_upload_bytes,
        })
    }
}

fn parse_number<F, T>(
    lookup: &F,
    var: &'static str,
    expected: &'static str,
    default: T,
) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(var) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidNumber {
                var,
                expected,
                value,
            }),
    }
}

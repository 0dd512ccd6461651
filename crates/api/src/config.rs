use std::ops::RangeInclusive;
use std::str::FromStr;

use crate::auth::jwt::{JwtConfig, DEFAULT_ACCESS_EXPIRY_MINS, MAX_ACCESS_EXPIRY_MINS};

/// Default SQLite database file, created on first start.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://artist_site.db";

/// Upper bound for `REQUEST_TIMEOUT_SECS`.
pub const MAX_REQUEST_TIMEOUT_SECS: u64 = 600;

/// Startup configuration errors. The server refuses to start on any of these.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{key} has invalid value '{value}': {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// Log output format, selected by `LOG_FORMAT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable, for local development.
    #[default]
    Pretty,
    /// One JSON object per line, for log shippers.
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pretty" | "text" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => Err(format!("expected 'pretty' or 'json', got '{other}'")),
        }
    }
}

/// The single admin account allowed to edit content.
#[derive(Debug, Clone)]
pub struct AdminConfig {
    pub username: String,
    /// Argon2id PHC string. Generate one with `artist-site-api hash-password`.
    pub password_hash: String,
}

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// sqlx SQLite URL (default: [`DEFAULT_DATABASE_URL`]).
    pub database_url: String,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    pub log_format: LogFormat,
    pub admin: AdminConfig,
    pub jwt: JwtConfig,
}

impl ServerConfig {
    /// Load configuration from the process environment.
    ///
    /// | Env Var                  | Default                    |
    /// |--------------------------|----------------------------|
    /// | `HOST`                   | `0.0.0.0`                  |
    /// | `PORT`                   | `3000`                     |
    /// | `DATABASE_URL`           | `sqlite://artist_site.db`  |
    /// | `CORS_ORIGINS`           | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS`   | `30`                       |
    /// | `LOG_FORMAT`             | `pretty`                   |
    /// | `ADMIN_USERNAME`         | `admin`                    |
    /// | `ADMIN_PASSWORD_HASH`    | required                   |
    /// | `JWT_SECRET`             | required                   |
    /// | `JWT_ACCESS_EXPIRY_MINS` | `60`                       |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".into());
        let port = parse_or(&lookup, "PORT", 3000u16)?;
        let database_url = lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.into());

        let cors_origins: Vec<String> = lookup("CORS_ORIGINS")
            .unwrap_or_else(|| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        for origin in &cors_origins {
            let invalid = |reason: String| ConfigError::Invalid {
                key: "CORS_ORIGINS",
                value: origin.clone(),
                reason,
            };
            // Credentials are allowed, so every origin must be explicit.
            if origin == "*" {
                return Err(invalid("wildcard origin cannot be used with credentials".into()));
            }
            axum::http::HeaderValue::from_str(origin).map_err(|e| invalid(e.to_string()))?;
        }

        let request_timeout_secs = parse_in_range(
            &lookup,
            "REQUEST_TIMEOUT_SECS",
            30u64,
            1..=MAX_REQUEST_TIMEOUT_SECS,
        )?;
        let log_format = parse_or(&lookup, "LOG_FORMAT", LogFormat::default())?;

        let admin = AdminConfig {
            username: lookup("ADMIN_USERNAME").unwrap_or_else(|| "admin".into()),
            password_hash: required(&lookup, "ADMIN_PASSWORD_HASH")?,
        };
        argon2::PasswordHash::new(&admin.password_hash).map_err(|e| ConfigError::Invalid {
            key: "ADMIN_PASSWORD_HASH",
            value: "<redacted>".into(),
            reason: e.to_string(),
        })?;

        let jwt = JwtConfig {
            secret: required(&lookup, "JWT_SECRET")?,
            access_token_expiry_mins: parse_in_range(
                &lookup,
                "JWT_ACCESS_EXPIRY_MINS",
                DEFAULT_ACCESS_EXPIRY_MINS,
                1..=MAX_ACCESS_EXPIRY_MINS,
            )?,
        };

        Ok(Self {
            host,
            port,
            database_url,
            cors_origins,
            request_timeout_secs,
            log_format,
            admin,
            jwt,
        })
    }
}

fn required<F>(lookup: &F, key: &'static str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .filter(|v| !v.trim().is_empty())
        .ok_or(ConfigError::Missing(key))
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
            key,
            value: raw.clone(),
            reason: e.to_string(),
        }),
    }
}

fn parse_in_range<F, T>(
    lookup: &F,
    key: &'static str,
    default: T,
    range: RangeInclusive<T>,
) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr + PartialOrd + std::fmt::Display,
    T::Err: std::fmt::Display,
{
    let value = parse_or(lookup, key, default)?;
    if !range.contains(&value) {
        return Err(ConfigError::Invalid {
            key,
            value: value.to_string(),
            reason: format!("must be between {} and {}", range.start(), range.end()),
        });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::LazyLock;

    use assert_matches::assert_matches;

    use super::*;
    use crate::auth::password::hash_password;

    static HASH: LazyLock<String> =
        LazyLock::new(|| hash_password("correct-horse").expect("hashing should succeed"));

    fn load(pairs: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| map.get(key).cloned())
    }

    fn required_only() -> Vec<(&'static str, &'static str)> {
        vec![("ADMIN_PASSWORD_HASH", HASH.as_str()), ("JWT_SECRET", "s3cret")]
    }

    #[test]
    fn defaults_apply() {
        let config = load(&required_only()).unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3000);
        assert_eq!(config.database_url, DEFAULT_DATABASE_URL);
        assert_eq!(config.cors_origins, vec!["http://localhost:5173"]);
        assert_eq!(config.request_timeout_secs, 30);
        assert_eq!(config.log_format, LogFormat::Pretty);
        assert_eq!(config.admin.username, "admin");
        assert_eq!(config.jwt.access_token_expiry_mins, 60);
    }

    #[test]
    fn overrides_are_parsed() {
        let mut pairs = required_only();
        pairs.extend([
            ("PORT", "8080"),
            ("CORS_ORIGINS", "https://xboy.example, https://admin.xboy.example ,"),
            ("LOG_FORMAT", "JSON"),
            ("ADMIN_USERNAME", "owner"),
            ("DATABASE_URL", "sqlite::memory:"),
        ]);
        let config = load(&pairs).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(
            config.cors_origins,
            vec!["https://xboy.example", "https://admin.xboy.example"]
        );
        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(config.admin.username, "owner");
        assert_eq!(config.database_url, "sqlite::memory:");
    }

    #[test]
    fn missing_secrets_are_reported() {
        assert_matches!(
            load(&[("JWT_SECRET", "s3cret")]),
            Err(ConfigError::Missing("ADMIN_PASSWORD_HASH"))
        );
        assert_matches!(
            load(&[("ADMIN_PASSWORD_HASH", HASH.as_str()), ("JWT_SECRET", "  ")]),
            Err(ConfigError::Missing("JWT_SECRET"))
        );
    }

    #[test]
    fn invalid_values_are_reported() {
        let mut pairs = required_only();
        pairs.push(("PORT", "not-a-port"));
        assert_matches!(load(&pairs), Err(ConfigError::Invalid { key: "PORT", .. }));

        let pairs = [("ADMIN_PASSWORD_HASH", "plaintext"), ("JWT_SECRET", "s3cret")];
        assert_matches!(
            load(&pairs),
            Err(ConfigError::Invalid { key: "ADMIN_PASSWORD_HASH", .. })
        );
    }

    #[test]
    fn wildcard_cors_origin_is_rejected() {
        let mut pairs = required_only();
        pairs.push(("CORS_ORIGINS", "https://xboy.example, *"));
        assert_matches!(
            load(&pairs),
            Err(ConfigError::Invalid { key: "CORS_ORIGINS", value, .. }) if value == "*"
        );
    }

    #[test]
    fn out_of_range_durations_are_rejected() {
        for (key, value) in [
            ("JWT_ACCESS_EXPIRY_MINS", "0"),
            ("JWT_ACCESS_EXPIRY_MINS", "-5"),
            ("JWT_ACCESS_EXPIRY_MINS", "9223372036854775807"),
            ("REQUEST_TIMEOUT_SECS", "0"),
            ("REQUEST_TIMEOUT_SECS", "86400"),
        ] {
            let mut pairs = required_only();
            pairs.push((key, value));
            let err = load(&pairs).unwrap_err();
            assert_matches!(
                err,
                ConfigError::Invalid { key: k, .. } if k == key,
                "expected {key}={value} to be rejected"
            );
        }
    }

    #[test]
    fn range_bounds_are_inclusive() {
        let mut pairs = required_only();
        pairs.extend([("JWT_ACCESS_EXPIRY_MINS", "1"), ("REQUEST_TIMEOUT_SECS", "600")]);
        let config = load(&pairs).unwrap();
        assert_eq!(config.jwt.access_token_expiry_mins, 1);
        assert_eq!(config.request_timeout_secs, MAX_REQUEST_TIMEOUT_SECS);
    }
}

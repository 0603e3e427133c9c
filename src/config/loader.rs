//! Load [`AppConfig`] from environment variables.

use super::types::*;
use crate::error::ConfigError;
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

impl AppConfig {
    /// Read `.env` (if present) and the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset or blank keys take defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let database = DatabaseConfig {
            url: get("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.into()),
            schema: get("DATABASE_SCHEMA").unwrap_or_else(|| DEFAULT_SCHEMA.into()),
            max_connections: parse_or(&get, "DATABASE_MAX_CONNECTIONS", 5)?,
            run_migrations: parse_bool_or(&get, "RUN_MIGRATIONS", false)?,
        };
        if database.max_connections == 0 {
            return Err(ConfigError::Invalid {
                key: "DATABASE_MAX_CONNECTIONS",
                message: "must be at least 1".into(),
            });
        }
        if !is_identifier(&database.schema) {
            return Err(ConfigError::Invalid {
                key: "DATABASE_SCHEMA",
                message: format!("'{}' is not a plain identifier", database.schema),
            });
        }

        let http = HttpConfig {
            bind_addr: parse_or(&get, "BIND_ADDR", SocketAddr::from(DEFAULT_BIND_ADDR))?,
            cors_origin: get("CORS_ORIGIN"),
            body_limit_bytes: parse_or(&get, "BODY_LIMIT_BYTES", 1024 * 1024)?,
        };

        let currency = CurrencyConfig {
            url: get("CURRENCY_URL").unwrap_or_else(|| DEFAULT_CURRENCY_URL.into()),
            timeout: Duration::from_secs(parse_or(&get, "CURRENCY_TIMEOUT_SECS", 10)?),
        };

        Ok(AppConfig {
            database,
            http,
            currency,
            log_filter: get("RUST_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.into()),
        })
    }
}

fn parse_or<T, G>(get: &G, key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    G: Fn(&str) -> Option<String>,
{
    match get(key) {
        None => Ok(default),
        Some(raw) => raw.parse().map_err(|e: T::Err| ConfigError::Invalid {
            key,
            message: format!("'{}': {}", raw, e),
        }),
    }
}

fn parse_bool_or<G>(get: &G, key: &'static str, default: bool) -> Result<bool, ConfigError>
where
    G: Fn(&str) -> Option<String>,
{
    match get(key).map(|v| v.to_lowercase()) {
        None => Ok(default),
        Some(v) => match v.as_str() {
            "1" | "true" | "yes" | "on" => Ok(true),
            "0" | "false" | "no" | "off" => Ok(false),
            _ => Err(ConfigError::Invalid {
                key,
                message: format!("'{}' is not a boolean", v),
            }),
        },
    }
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(pairs: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|k| env.get(k).cloned())
    }

    #[test]
    fn defaults_apply_when_unset() {
        let cfg = load(&[]).unwrap();
        assert_eq!(cfg.database.url, DEFAULT_DATABASE_URL);
        assert_eq!(cfg.database.schema, "public");
        assert_eq!(cfg.database.max_connections, 5);
        assert!(!cfg.database.run_migrations);
        assert_eq!(cfg.http.bind_addr.port(), 4000);
        assert_eq!(cfg.http.cors_origin, None);
        assert_eq!(cfg.currency.url, DEFAULT_CURRENCY_URL);
        assert_eq!(cfg.currency.timeout, Duration::from_secs(10));
    }

    #[test]
    fn overrides_are_parsed() {
        let cfg = load(&[
            ("DATABASE_SCHEMA", "catalog"),
            ("DATABASE_MAX_CONNECTIONS", "12"),
            ("RUN_MIGRATIONS", "yes"),
            ("BIND_ADDR", "127.0.0.1:8080"),
            ("CORS_ORIGIN", "https://calc.example.ru"),
            ("CURRENCY_TIMEOUT_SECS", "3"),
            ("RUST_LOG", "debug"),
        ])
        .unwrap();
        assert_eq!(cfg.database.schema, "catalog");
        assert_eq!(cfg.database.max_connections, 12);
        assert!(cfg.database.run_migrations);
        assert_eq!(cfg.http.bind_addr.to_string(), "127.0.0.1:8080");
        assert_eq!(cfg.http.cors_origin.as_deref(), Some("https://calc.example.ru"));
        assert_eq!(cfg.currency.timeout, Duration::from_secs(3));
        assert_eq!(cfg.log_filter, "debug");
    }

    #[test]
    fn blank_values_take_defaults() {
        let cfg = load(&[("DATABASE_URL", "  "), ("CORS_ORIGIN", "")]).unwrap();
        assert_eq!(cfg.database.url, DEFAULT_DATABASE_URL);
        assert_eq!(cfg.http.cors_origin, None);
    }

    #[test]
    fn invalid_values_are_reported_with_key() {
        let err = load(&[("DATABASE_MAX_CONNECTIONS", "many")]).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "DATABASE_MAX_CONNECTIONS", .. }));

        let err = load(&[("RUN_MIGRATIONS", "maybe")]).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "RUN_MIGRATIONS", .. }));

        let err = load(&[("DATABASE_SCHEMA", "public; drop")]).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "DATABASE_SCHEMA", .. }));

        let err = load(&[("DATABASE_MAX_CONNECTIONS", "0")]).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { .. }));
    }
}

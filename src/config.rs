use std::env;
use std::net::SocketAddr;

use thiserror::Error;

const DEFAULT_DATABASE_URL: &str = "sqlite://duo.db?mode=rwc";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3333";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Used when `RUST_LOG` is unset. sqlx logs statements on `sqlx::query` at DEBUG.
pub const DEFAULT_LOG_FILTER: &str = "duo_backend=debug,tower_http=debug,sqlx=debug";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{name} is invalid: {reason}")]
    Invalid { name: &'static str, reason: String },
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub database_url: String,
    pub bind_addr: SocketAddr,
    pub max_connections: u32,
}

impl AppConfig {
    pub fn new_from_env() -> Result<Self, ConfigError> {
        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());

        let bind_addr = env::var("BIND_ADDR")
            .unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string())
            .parse()
            .map_err(|e: std::net::AddrParseError| ConfigError::Invalid {
                name: "BIND_ADDR",
                reason: e.to_string(),
            })?;

        let max_connections = match env::var("DATABASE_MAX_CONNECTIONS") {
            Ok(raw) => parse_max_connections(&raw)?,
            Err(_) => DEFAULT_MAX_CONNECTIONS,
        };

        Ok(Self {
            database_url,
            bind_addr,
            max_connections,
        })
    }
}

pub fn log_filter() -> String {
    env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string())
}

fn parse_max_connections(raw: &str) -> Result<u32, ConfigError> {
    let invalid = |reason: String| ConfigError::Invalid {
        name: "DATABASE_MAX_CONNECTIONS",
        reason,
    };

    match raw.trim().parse::<u32>() {
        Ok(0) => Err(invalid("must be at least 1".to_string())),
        Ok(n) => Ok(n),
        Err(e) => Err(invalid(e.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_connections_must_be_positive() {
        assert_eq!(parse_max_connections("8").unwrap(), 8);
        assert_eq!(parse_max_connections(" 2 ").unwrap(), 2);
        assert!(matches!(
            parse_max_connections("0"),
            Err(ConfigError::Invalid { name: "DATABASE_MAX_CONNECTIONS", .. })
        ));
        assert!(matches!(parse_max_connections("many"), Err(ConfigError::Invalid { .. })));
    }

    #[test]
    fn default_log_filter_keeps_statement_logging() {
        assert!(DEFAULT_LOG_FILTER.split(',').any(|d| d == "sqlx=debug"));
    }
}

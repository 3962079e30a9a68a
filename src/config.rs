//! Runtime configuration read from the environment (after `.env` is loaded).

use crate::error::ConfigError;
use std::net::SocketAddr;

pub const DEFAULT_DATABASE_URL: &str = "postgres://localhost/students";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:3000";
pub const DEFAULT_SCHEMA: &str = "public";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Which [`StudentStore`](crate::store::StudentStore) backs the service.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StoreBackend {
    Postgres,
    Memory,
}

impl std::str::FromStr for StoreBackend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "postgres" => Ok(StoreBackend::Postgres),
            "memory" => Ok(StoreBackend::Memory),
            _ => Err(ConfigError::Invalid {
                var: "STUDENT_STORE",
                reason: format!("{} (expected postgres or memory)", s),
            }),
        }
    }
}

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub database_url: String,
    pub store: StoreBackend,
    pub schema: String,
    pub bind_addr: SocketAddr,
    pub allowed_origin: String,
    pub max_connections: u32,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from any key lookup; unset keys fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str, default: &str| lookup(key).filter(|v| !v.is_empty()).unwrap_or_else(|| default.to_string());

        let store = get("STUDENT_STORE", "postgres").parse()?;
        let bind_addr = get("BIND_ADDR", DEFAULT_BIND_ADDR)
            .parse()
            .map_err(|e: std::net::AddrParseError| ConfigError::Invalid {
                var: "BIND_ADDR",
                reason: e.to_string(),
            })?;
        let max_connections = get("DB_MAX_CONNECTIONS", &DEFAULT_MAX_CONNECTIONS.to_string())
            .parse()
            .map_err(|e: std::num::ParseIntError| ConfigError::Invalid {
                var: "DB_MAX_CONNECTIONS",
                reason: e.to_string(),
            })?;
        let allowed_origin = get("ALLOWED_ORIGIN", DEFAULT_ALLOWED_ORIGIN);
        if axum::http::HeaderValue::from_str(&allowed_origin).is_err() {
            return Err(ConfigError::Invalid {
                var: "ALLOWED_ORIGIN",
                reason: format!("not a valid header value: {}", allowed_origin),
            });
        }

        Ok(ServerConfig {
            database_url: get("DATABASE_URL", DEFAULT_DATABASE_URL),
            store,
            schema: get("STUDENT_SCHEMA", DEFAULT_SCHEMA),
            bind_addr,
            allowed_origin,
            max_connections,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn from_map(pairs: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let map: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        ServerConfig::from_lookup(|k| map.get(k).cloned())
    }

    #[test]
    fn defaults_apply_when_unset() {
        let cfg = from_map(&[]).unwrap();
        assert_eq!(cfg.store, StoreBackend::Postgres);
        assert_eq!(cfg.bind_addr.port(), 8080);
        assert_eq!(cfg.allowed_origin, DEFAULT_ALLOWED_ORIGIN);
        assert_eq!(cfg.schema, "public");
        assert_eq!(cfg.max_connections, 5);
    }

    #[test]
    fn overrides_are_read() {
        let cfg = from_map(&[("STUDENT_STORE", "Memory"), ("BIND_ADDR", "127.0.0.1:9000")]).unwrap();
        assert_eq!(cfg.store, StoreBackend::Memory);
        assert_eq!(cfg.bind_addr.to_string(), "127.0.0.1:9000");
    }

    #[test]
    fn bad_values_are_rejected() {
        assert!(matches!(
            from_map(&[("STUDENT_STORE", "mongo")]),
            Err(ConfigError::Invalid { var: "STUDENT_STORE", .. })
        ));
        assert!(matches!(
            from_map(&[("DB_MAX_CONNECTIONS", "lots")]),
            Err(ConfigError::Invalid { var: "DB_MAX_CONNECTIONS", .. })
        ));
    }
}

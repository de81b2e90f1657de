//! Runtime configuration read from the environment.

use std::fmt;
use std::str::FromStr;

/// Where players are kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StorageKind {
    #[default]
    Sqlite,
    Memory,
}

impl FromStr for StorageKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sqlite" => Ok(Self::Sqlite),
            "memory" => Ok(Self::Memory),
            _ => Err(ConfigError::invalid("STORAGE", s, "expected 'sqlite' or 'memory'")),
        }
    }
}

impl fmt::Display for StorageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sqlite => f.write_str("sqlite"),
            Self::Memory => f.write_str("memory"),
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {key} ('{value}'): {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

impl ConfigError {
    fn invalid(key: &'static str, value: impl Into<String>, reason: impl ToString) -> Self {
        Self::Invalid {
            key,
            value: value.into(),
            reason: reason.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    pub server_host: String,
    pub server_port: u16,
    pub storage: StorageKind,
    pub players_db: String,
    /// `*` or a comma separated origin list. `None` leaves CORS off.
    pub cors_allowed_origins: Option<String>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            server_host: "0.0.0.0".into(),
            server_port: 3000,
            storage: StorageKind::default(),
            players_db: "players.db".into(),
            cors_allowed_origins: None,
        }
    }
}

impl EngineConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`, falling back to defaults for
    /// anything unset or blank.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let defaults = Self::default();

        let server_port = match var("SERVER_PORT").or_else(|| var("PORT")) {
            Some(raw) => raw
                .parse()
                .map_err(|e| ConfigError::invalid("SERVER_PORT", raw.as_str(), e))?,
            None => defaults.server_port,
        };

        let storage = match var("STORAGE") {
            Some(raw) => raw.parse()?,
            None => defaults.storage,
        };

        Ok(Self {
            server_host: var("SERVER_HOST").unwrap_or(defaults.server_host),
            server_port,
            storage,
            players_db: var("PLAYERS_DB").unwrap_or(defaults.players_db),
            cors_allowed_origins: var("CORS_ALLOWED_ORIGINS"),
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(pairs: &[(&str, &str)]) -> Result<EngineConfig, ConfigError> {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        EngineConfig::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn empty_environment_uses_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config, EngineConfig::default());
        assert_eq!(config.bind_address(), "0.0.0.0:3000");
    }

    #[test]
    fn port_falls_back_to_port_variable() {
        let config = config_from(&[("PORT", "8080")]).unwrap();
        assert_eq!(config.server_port, 8080);

        let config = config_from(&[("SERVER_PORT", "9000"), ("PORT", "8080")]).unwrap();
        assert_eq!(config.server_port, 9000);
    }

    #[test]
    fn invalid_port_is_rejected() {
        let err = config_from(&[("SERVER_PORT", "http")]).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "SERVER_PORT", .. }));
    }

    #[test]
    fn storage_kind_parses_case_insensitively() {
        let config = config_from(&[("STORAGE", "Memory")]).unwrap();
        assert_eq!(config.storage, StorageKind::Memory);

        let err = config_from(&[("STORAGE", "postgres")]).unwrap_err();
        assert!(err.to_string().contains("STORAGE"));
    }

    #[test]
    fn blank_values_count_as_unset() {
        let config = config_from(&[("CORS_ALLOWED_ORIGINS", "  "), ("PLAYERS_DB", "")]).unwrap();
        assert_eq!(config.cors_allowed_origins, None);
        assert_eq!(config.players_db, "players.db");
    }
}

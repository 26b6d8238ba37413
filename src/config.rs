//! Configuration module
//!
//! `AppConfig` is read from a TOML file (default
//! `~/.config/parkdesk/config.toml`, overridable via the `PARKDESK_CONFIG`
//! environment variable). Every section has defaults so a fresh checkout
//! runs without any setup.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Location of the config file when `PARKDESK_CONFIG` is not set.
pub fn default_config_path() -> PathBuf {
    dirs_next::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("parkdesk")
        .join("config.toml")
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Top-level application configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseSettings,
    pub security: SecurityConfig,
    pub logging: LoggingConfig,
    pub admin: AdminConfig,
}

impl AppConfig {
    /// Parse the TOML file at `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&raw)?)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub api_host: String,
    pub api_port: u16,
    /// Seconds to wait for in-flight requests during shutdown
    pub shutdown_timeout: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            api_host: "0.0.0.0".to_string(),
            api_port: 8080,
            shutdown_timeout: 10,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseSettings {
    /// SQLite file path; ignored when DATABASE_URL is set
    pub path: String,
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            path: "parkdesk.db".to_string(),
        }
    }
}

impl DatabaseSettings {
    /// Connection URL for SeaORM. `DATABASE_URL` wins over the file path.
    pub fn connection_url(&self) -> String {
        std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| format!("sqlite://{}?mode=rwc", self.path))
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SecurityConfig {
    pub jwt_secret: String,
    pub jwt_expiration_hours: i64,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            jwt_secret: "change-me-in-production".to_string(),
            jwt_expiration_hours: 8,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Credentials for the administrator account seeded on first start
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AdminConfig {
    pub username: String,
    pub password: String,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            username: "admin".to_string(),
            password: "Admin@123".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_usable() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.server.api_host, "0.0.0.0");
        assert_eq!(cfg.server.api_port, 8080);
        assert_eq!(cfg.security.jwt_expiration_hours, 8);
        assert_eq!(cfg.logging.level, "info");
        assert_eq!(cfg.admin.username, "admin");
    }

    #[test]
    fn parses_partial_toml_and_keeps_defaults_elsewhere() {
        let cfg: AppConfig = toml::from_str(
            r#"
            [server]
            api_port = 9090

            [security]
            jwt_secret = "s3cret"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.server.api_port, 9090);
        assert_eq!(cfg.server.api_host, "0.0.0.0");
        assert_eq!(cfg.security.jwt_secret, "s3cret");
        assert_eq!(cfg.database.path, "parkdesk.db");
    }

    #[test]
    fn connection_url_falls_back_to_sqlite_path() {
        let db = DatabaseSettings {
            path: "/tmp/parkdesk-test.db".to_string(),
        };
        // DATABASE_URL wins when present, so only assert the fallback shape.
        if std::env::var("DATABASE_URL").is_err() {
            assert_eq!(
                db.connection_url(),
                "sqlite:///tmp/parkdesk-test.db?mode=rwc"
            );
        }
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = toml::from_str::<AppConfig>("[server\napi_port = 1").unwrap_err();
        assert!(err.to_string().contains("expected"));
    }
}

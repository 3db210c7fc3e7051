//! Server configuration loaded from the environment.
//!
//! Deployment contract: `HOST`/`PORT` pick the bind address,
//! `APP_ENV=production` switches on cache headers and file logging,
//! `STATIC_DIR`/`LOG_DIR` relocate the asset and log directories. Every
//! value has a default so a bare `cargo run` serves on 0.0.0.0:3000 in
//! debug mode.

use std::path::PathBuf;

use thiserror::Error;

/// Response-building mode, threaded explicitly through the response path.
///
/// `Production` enables cache headers and the rotating file log; `Debug`
/// disables both so edits show up immediately.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    Debug,
    Production,
}

impl RenderMode {
    /// Parse from `APP_ENV`. Anything other than a production spelling is
    /// treated as debug.
    pub fn from_env_value(value: &str) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "production" | "prod" => RenderMode::Production,
            _ => RenderMode::Debug,
        }
    }

    pub fn is_production(self) -> bool {
        matches!(self, RenderMode::Production)
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    /// The section catalog must hold at least one entry; looping clones
    /// both ends, which has no meaning for zero sections.
    #[error("section repository is empty")]
    NoSections,

    #[error("invalid {name} value {value:?}: {reason}")]
    InvalidValue {
        name: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub mode: RenderMode,
    pub static_dir: PathBuf,
    pub log_dir: PathBuf,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());

        let port = match std::env::var("PORT") {
            Ok(raw) => raw.parse().map_err(|e: std::num::ParseIntError| {
                ConfigError::InvalidValue {
                    name: "PORT",
                    value: raw.clone(),
                    reason: e.to_string(),
                }
            })?,
            Err(_) => 3000,
        };

        let mode = std::env::var("APP_ENV")
            .map(|v| RenderMode::from_env_value(&v))
            .unwrap_or(RenderMode::Debug);

        let static_dir = std::env::var("STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("static"));

        let log_dir = std::env::var("LOG_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("logs"));

        Ok(Self {
            host,
            port,
            mode,
            static_dir,
            log_dir,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

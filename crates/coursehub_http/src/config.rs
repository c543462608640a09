//! Server configuration.
//!
//! # Invariants
//! - `database_path` is never empty.
//! - `bind_addr` is a parsed socket address.
//! - `log_dir`, when set, is absolute.

use coursehub_core::{default_log_level, LogTarget};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::net::SocketAddr;
use std::path::PathBuf;

pub const DEFAULT_DATABASE_PATH: &str = "coursehub.sqlite3";
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5000";

/// Invalid configuration value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    EmptyDatabasePath,
    InvalidBindAddr { value: String, reason: String },
    RelativeLogDir(PathBuf),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyDatabasePath => write!(f, "database path cannot be empty"),
            Self::InvalidBindAddr { value, reason } => {
                write!(f, "invalid bind address `{value}`: {reason}")
            }
            Self::RelativeLogDir(dir) => {
                write!(f, "log dir must be an absolute path, got `{}`", dir.display())
            }
        }
    }
}

impl Error for ConfigError {}

/// Runtime settings for the HTTP server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub database_path: PathBuf,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    pub log_dir: Option<PathBuf>,
}

impl ServerConfig {
    /// Validates raw settings.
    ///
    /// A blank `log_level` falls back to the build-mode default.
    pub fn new(
        database_path: impl Into<PathBuf>,
        bind_addr: &str,
        log_level: Option<&str>,
        log_dir: Option<PathBuf>,
    ) -> Result<Self, ConfigError> {
        let database_path = database_path.into();
        if database_path.as_os_str().is_empty() {
            return Err(ConfigError::EmptyDatabasePath);
        }

        let bind_addr = bind_addr
            .trim()
            .parse::<SocketAddr>()
            .map_err(|err| ConfigError::InvalidBindAddr {
                value: bind_addr.to_string(),
                reason: err.to_string(),
            })?;

        if let Some(dir) = log_dir.as_deref() {
            if !dir.is_absolute() {
                return Err(ConfigError::RelativeLogDir(dir.to_path_buf()));
            }
        }

        let log_level = log_level
            .map(str::trim)
            .filter(|level| !level.is_empty())
            .unwrap_or(default_log_level())
            .to_string();

        Ok(Self {
            database_path,
            bind_addr,
            log_level,
            log_dir,
        })
    }

    /// Config for a database file with every other setting at its default.
    pub fn for_database(database_path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        Self::new(database_path, DEFAULT_BIND_ADDR, None, None)
    }

    pub fn log_target(&self) -> LogTarget {
        LogTarget::from_optional_dir(self.log_dir.as_deref())
    }
}

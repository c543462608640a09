use clap::{Parser, Subcommand};
use coursehub_http::config::{DEFAULT_BIND_ADDR, DEFAULT_DATABASE_PATH};
use coursehub_http::{ConfigError, ServerConfig};
use std::path::PathBuf;

/// Top-level CLI parser for the `coursehub` binary.
#[derive(Debug, Parser)]
#[command(name = "coursehub", version, about = "CourseHub - course catalog backend")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// SQLite database file
    #[arg(long, global = true, env = "COURSEHUB_DATABASE_PATH", default_value = DEFAULT_DATABASE_PATH)]
    pub database: PathBuf,

    /// Listen address for `serve`
    #[arg(long, global = true, env = "COURSEHUB_BIND_ADDR", default_value = DEFAULT_BIND_ADDR)]
    pub bind: String,

    /// Log level: trace, debug, info, warn, error
    #[arg(long, global = true, env = "COURSEHUB_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Absolute directory for rotating log files (stderr when unset)
    #[arg(long, global = true, env = "COURSEHUB_LOG_DIR")]
    pub log_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum Commands {
    /// Run the HTTP server (default)
    Serve,
    /// Apply pending schema migrations and print the schema version
    Migrate,
    /// Print pong and the core version
    Ping,
}

impl Cli {
    pub fn selected_command(&self) -> Commands {
        self.command.unwrap_or(Commands::Serve)
    }

    pub fn server_config(&self) -> Result<ServerConfig, ConfigError> {
        ServerConfig::new(
            self.database.clone(),
            &self.bind,
            self.log_level.as_deref(),
            self.log_dir.clone(),
        )
    }
}

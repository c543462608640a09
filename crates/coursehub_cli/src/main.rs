//! CourseHub command-line entry point.
//!
//! # Responsibility
//! - Load `.env`, parse flags and initialize logging.
//! - Dispatch to `serve`, `migrate` or `ping`.

use anyhow::Context;
use clap::Parser;
use coursehub_core::db::migrations::current_user_version;
use coursehub_core::{core_version, init_logging, open_db, ping};
use log::{info, warn};

mod cli;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    if let Err(error) = run().await {
        eprintln!("coursehub error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli.server_config().context("invalid configuration")?;

    init_logging(&config.log_level, config.log_target())
        .map_err(anyhow::Error::msg)
        .context("failed to initialize logging")?;

    match cli.selected_command() {
        Commands::Serve => coursehub_http::serve(config, shutdown_signal())
            .await
            .context("server stopped with an error"),
        Commands::Migrate => {
            let conn = open_db(&config.database_path).with_context(|| {
                format!("failed to open {}", config.database_path.display())
            })?;
            let version = current_user_version(&conn)?;
            info!(
                "event=migrate module=cli status=ok schema_version={} database={}",
                version,
                config.database_path.display()
            );
            println!("{} schema_version={version}", config.database_path.display());
            Ok(())
        }
        Commands::Ping => {
            println!("coursehub_core ping={}", ping());
            println!("coursehub_core version={}", core_version());
            Ok(())
        }
    }
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(
            "event=shutdown_signal module=cli status=error error={}",
            err
        );
        std::future::pending::<()>().await;
    }
    info!("event=shutdown_signal module=cli status=ok");
}

//! HTTP/JSON surface for the CourseHub catalog.
//!
//! # Responsibility
//! - Map REST routes onto catalog services.
//! - Translate catalog errors into status codes and `{"error": ...}` bodies.
//!
//! # Invariants
//! - Handlers never touch SQL; every request goes through one
//!   `AppState::with_catalog` or `AppState::read_catalog` scope.

pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod router;
pub mod state;

pub use config::{ConfigError, ServerConfig};
pub use error::ApiError;
pub use router::build_router;
pub use state::AppState;

use log::info;
use tokio::net::TcpListener;

/// Binds `config.bind_addr` and serves until `shutdown` resolves.
pub async fn serve(
    config: ServerConfig,
    shutdown: impl std::future::Future<Output = ()> + Send + 'static,
) -> std::io::Result<()> {
    let listener = TcpListener::bind(config.bind_addr).await?;
    info!(
        "event=server_start module=http status=ok addr={} database={}",
        listener.local_addr()?,
        config.database_path.display()
    );

    let app = build_router(AppState::new(config));
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    info!("event=server_stop module=http status=ok");
    Ok(())
}

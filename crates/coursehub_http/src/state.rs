//! Shared server state and the per-request catalog scope.
//!
//! # Invariants
//! - Each call opens its own connection and drops it before returning.
//! - All statements of one call run in one transaction that commits only
//!   when the work succeeds: IMMEDIATE for writes, DEFERRED for reads.

use crate::config::ServerConfig;
use crate::error::ApiError;
use coursehub_core::{
    open_db, run_in_transaction, run_read_transaction, Catalog, ErrorKind, ServiceError,
    ServiceResult,
};
use log::{debug, error};
use rusqlite::Connection;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct AppState {
    config: Arc<ServerConfig>,
}

#[derive(Debug, Clone, Copy)]
enum Access {
    Read,
    Write,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Runs mutating `work` against a fresh catalog on a blocking worker thread.
    pub async fn with_catalog<T, F>(&self, op: &'static str, work: F) -> Result<T, ApiError>
    where
        T: Send + 'static,
        F: FnOnce(&Catalog<'_>) -> ServiceResult<T> + Send + 'static,
    {
        self.scoped(Access::Write, op, work).await
    }

    /// Like [`AppState::with_catalog`] but only takes a shared lock.
    pub async fn read_catalog<T, F>(&self, op: &'static str, work: F) -> Result<T, ApiError>
    where
        T: Send + 'static,
        F: FnOnce(&Catalog<'_>) -> ServiceResult<T> + Send + 'static,
    {
        self.scoped(Access::Read, op, work).await
    }

    async fn scoped<T, F>(&self, access: Access, op: &'static str, work: F) -> Result<T, ApiError>
    where
        T: Send + 'static,
        F: FnOnce(&Catalog<'_>) -> ServiceResult<T> + Send + 'static,
    {
        let database_path = self.config.database_path.clone();
        tokio::task::spawn_blocking(move || -> Result<T, ApiError> {
            let conn = open_db(&database_path)?;
            let unit = |tx: &Connection| -> Result<T, ApiError> {
                let catalog = Catalog::try_new(tx)?;
                work(&catalog).map_err(|err| {
                    log_failure(op, &err);
                    ApiError::from(err)
                })
            };
            match access {
                Access::Read => run_read_transaction(&conn, unit),
                Access::Write => run_in_transaction(&conn, unit),
            }
        })
        .await?
    }
}

fn log_failure(op: &str, err: &ServiceError) {
    match err.kind() {
        ErrorKind::Storage => error!(
            "event=catalog_op module=http status=error op={} error={}",
            op, err
        ),
        kind => debug!(
            "event=catalog_op module=http status=rejected op={} kind={:?} error={}",
            op, kind, err
        ),
    }
}

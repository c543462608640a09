//! Unit-of-work scope over one connection.

use rusqlite::{Connection, Transaction, TransactionBehavior};

/// Runs `work` inside one `BEGIN IMMEDIATE` transaction.
///
/// Commits when `work` returns `Ok`; any `Err` drops the transaction,
/// which rolls it back. Taking the write lock up front means a publish-lock
/// check and the mutation that follows it observe the same course state.
pub fn run_in_transaction<T, E>(
    conn: &Connection,
    work: impl FnOnce(&Connection) -> Result<T, E>,
) -> Result<T, E>
where
    E: From<rusqlite::Error>,
{
    run_with(conn, TransactionBehavior::Immediate, work)
}

/// Runs read-only `work` inside one `BEGIN DEFERRED` transaction.
///
/// Only a shared lock is taken, so readers do not queue behind each other
/// or behind a writer that has not reached commit yet.
pub fn run_read_transaction<T, E>(
    conn: &Connection,
    work: impl FnOnce(&Connection) -> Result<T, E>,
) -> Result<T, E>
where
    E: From<rusqlite::Error>,
{
    run_with(conn, TransactionBehavior::Deferred, work)
}

fn run_with<T, E>(
    conn: &Connection,
    behavior: TransactionBehavior,
    work: impl FnOnce(&Connection) -> Result<T, E>,
) -> Result<T, E>
where
    E: From<rusqlite::Error>,
{
    let tx = Transaction::new_unchecked(conn, behavior)?;
    let value = work(&tx)?;
    tx.commit()?;
    Ok(value)
}

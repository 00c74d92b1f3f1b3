//! A small data-access layer for a transaction ledger.
//!
//! This library stores financial transactions in a SQLite database and
//! exposes three operations through [SQLiteTransactionStore]: creating a
//! transaction for an account, deleting transactions by account and
//! caller-supplied identifier, and listing an account's transactions as
//! external-safe [TransactionView]s.
//!
//! Callers own the database connection: open one with `rusqlite`, run
//! [initialize_db] on it once, then hand it to the store.

#![warn(missing_docs)]

mod database_id;
mod db;
mod transaction;

pub use database_id::{AccountId, DatabaseId, TransactionId};
pub use db::initialize as initialize_db;
pub use transaction::{
    NewTransaction, OperationStatus, SQLiteTransactionStore, Transaction, TransactionView,
    create_transaction_table, map_transaction_row, to_views,
};

/// The errors that may occur in the data-access layer.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The requested row could not be found.
    ///
    /// Internally, this error occurs when a query returns no rows.
    #[error("the requested transaction could not be found")]
    NotFound,

    /// An unhandled/unexpected SQL error.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),

    /// Could not acquire the database lock.
    #[error("could not acquire the database lock")]
    DatabaseLockError,
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        match value {
            rusqlite::Error::QueryReturnedNoRows => Error::NotFound,
            error => {
                tracing::error!("an unhandled SQL error occurred: {}", error);
                Error::SqlError(error)
            }
        }
    }
}

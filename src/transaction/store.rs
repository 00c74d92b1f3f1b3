//! Implements a SQLite backed store for ledger transactions.

use std::sync::{Arc, Mutex};

use rusqlite::Connection;

use crate::{
    Error,
    database_id::AccountId,
    transaction::{
        NewTransaction, TransactionView,
        core::{create_transaction, delete_transactions, get_transactions_for_account},
        view::to_views,
    },
};

/// The outcome of a mutating ledger operation.
///
/// Mutating operations never return a raw [Error]; every failure is
/// collapsed into [OperationStatus::Error] with a human-readable
/// message that embeds the underlying failure description.
#[derive(Debug, Clone, PartialEq)]
pub enum OperationStatus {
    /// The operation completed and the change was persisted.
    Success(String),
    /// The operation failed. The message describes the underlying
    /// error.
    Error(String),
}

impl OperationStatus {
    /// Whether the operation completed successfully.
    pub fn is_success(&self) -> bool {
        matches!(self, OperationStatus::Success(_))
    }

    /// The human-readable message for the outcome.
    pub fn message(&self) -> &str {
        match self {
            OperationStatus::Success(message) | OperationStatus::Error(message) => message,
        }
    }
}

/// Stores ledger transactions in a SQLite database.
///
/// The store borrows its connection from the caller rather than opening
/// one itself: construct it with a shared connection that has already
/// been set up with [crate::initialize_db]. Cloning the store clones
/// the handle, not the connection.
#[derive(Debug, Clone)]
pub struct SQLiteTransactionStore {
    connection: Arc<Mutex<Connection>>,
}

impl SQLiteTransactionStore {
    /// Create a new store for the SQLite `connection`.
    pub fn new(connection: Arc<Mutex<Connection>>) -> Self {
        Self { connection }
    }

    /// Create a transaction for `account_id`.
    ///
    /// No validation is applied: negative amounts, empty identifiers,
    /// and unknown account IDs are all accepted. The insert is
    /// auto-committed.
    ///
    /// Failures are logged and reported as [OperationStatus::Error].
    pub fn create_transaction(
        &self,
        account_id: AccountId,
        amount: f64,
        transaction_uuid: &str,
    ) -> OperationStatus {
        let result = self
            .connection
            .lock()
            .map_err(|_| Error::DatabaseLockError)
            .and_then(|connection| {
                create_transaction(
                    NewTransaction {
                        account_id,
                        amount,
                        transaction_uuid: transaction_uuid.to_owned(),
                    },
                    &connection,
                )
            });

        match result {
            Ok(_) => OperationStatus::Success("Transaction added successfully".to_owned()),
            Err(error) => {
                tracing::error!("Could not create transaction for account {account_id}: {error}");
                OperationStatus::Error(format!(
                    "Error in adding a new transaction. Error is: {error}"
                ))
            }
        }
    }

    /// Delete the transactions matching both `account_id` and
    /// `transaction_uuid`.
    ///
    /// The delete runs inside an explicit SQL transaction. Deleting a
    /// pair that matches no rows still reports success.
    ///
    /// Failures are logged and reported as [OperationStatus::Error].
    pub fn delete_transaction(
        &self,
        account_id: AccountId,
        transaction_uuid: &str,
    ) -> OperationStatus {
        let result = self
            .connection
            .lock()
            .map_err(|_| Error::DatabaseLockError)
            .and_then(|connection| delete_transactions(account_id, transaction_uuid, &connection));

        match result {
            Ok(_) => OperationStatus::Success("Transaction deleted successfully".to_owned()),
            Err(error) => {
                tracing::error!(
                    "Could not delete transaction {transaction_uuid} for account {account_id}: {error}"
                );
                OperationStatus::Error(format!(
                    "Error in deleting a transaction. Error is: {error}"
                ))
            }
        }
    }

    /// Retrieve the transactions for `account_id` as external-safe
    /// views, in the order the database returns them.
    ///
    /// An account with no transactions yields an empty vector. Unlike
    /// the mutating operations, failures are not converted to a status:
    /// they propagate to the caller.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::DatabaseLockError] if the connection mutex is poisoned,
    /// - or [Error::SqlError] if there is an SQL error.
    pub fn get_transactions(&self, account_id: AccountId) -> Result<Vec<TransactionView>, Error> {
        let connection = self
            .connection
            .lock()
            .map_err(|_| Error::DatabaseLockError)?;

        let transactions = get_transactions_for_account(account_id, &connection)?;

        Ok(to_views(&transactions))
    }
}

#[cfg(test)]
mod store_tests {
    use std::sync::{Arc, Mutex};

    use rusqlite::Connection;

    use crate::{db::initialize, transaction::store::OperationStatus};

    use super::SQLiteTransactionStore;

    fn get_test_store() -> SQLiteTransactionStore {
        let conn = Connection::open_in_memory().unwrap();
        initialize(&conn).unwrap();
        SQLiteTransactionStore::new(Arc::new(Mutex::new(conn)))
    }

    #[test]
    fn create_then_list_then_delete() {
        let store = get_test_store();

        let status = store.create_transaction(42, 19.99, "abc-1");
        assert_eq!(
            status,
            OperationStatus::Success("Transaction added successfully".to_owned())
        );

        let views = store.get_transactions(42).unwrap();
        assert_eq!(views.len(), 1);
        assert_eq!(views[0].amount, 19.99);

        let status = store.delete_transaction(42, "abc-1");
        assert_eq!(
            status,
            OperationStatus::Success("Transaction deleted successfully".to_owned())
        );

        assert!(store.get_transactions(42).unwrap().is_empty());
    }

    #[test]
    fn delete_missing_pair_reports_success() {
        let store = get_test_store();

        let status = store.delete_transaction(42, "does-not-exist");

        assert!(status.is_success());
    }

    #[test]
    fn create_accepts_negative_amount() {
        let store = get_test_store();

        let status = store.create_transaction(42, -5.0, "abc-1");

        assert!(status.is_success());
        assert_eq!(store.get_transactions(42).unwrap()[0].amount, -5.0);
    }

    #[test]
    fn list_unknown_account_yields_empty_vec() {
        let store = get_test_store();

        assert_eq!(store.get_transactions(999).unwrap(), vec![]);
    }

    fn get_uninitialized_store() -> SQLiteTransactionStore {
        // No schema, so every statement against the transaction table fails.
        let conn = Connection::open_in_memory().unwrap();
        SQLiteTransactionStore::new(Arc::new(Mutex::new(conn)))
    }

    #[test]
    fn create_reports_error_with_failure_description() {
        let store = get_uninitialized_store();

        let status = store.create_transaction(42, 19.99, "abc-1");

        match status {
            OperationStatus::Error(message) => {
                assert!(message.starts_with("Error in adding a new transaction. Error is: "))
            }
            OperationStatus::Success(message) => panic!("Unexpected success: {message}"),
        }
    }

    #[test]
    fn delete_reports_error_with_failure_description() {
        let store = get_uninitialized_store();

        let status = store.delete_transaction(42, "abc-1");

        match status {
            OperationStatus::Error(message) => {
                assert!(message.starts_with("Error in deleting a transaction. Error is: "))
            }
            OperationStatus::Success(message) => panic!("Unexpected success: {message}"),
        }
    }

    #[test]
    fn list_propagates_errors() {
        let store = get_uninitialized_store();

        assert!(store.get_transactions(42).is_err());
    }
}

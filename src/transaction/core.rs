//! Defines the core data model and database queries for ledger transactions.

use rusqlite::{Connection, Row};
use serde::{Deserialize, Serialize};

use crate::{
    Error,
    database_id::{AccountId, TransactionId},
};

// ============================================================================
// MODELS
// ============================================================================

/// A ledger entry recording money moving in or out of an account.
///
/// Not to be confused with a SQL transaction: this is the domain object
/// that gets persisted, one row per entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The ID of the transaction, assigned by the database on insert.
    pub id: TransactionId,
    /// The ID of the account the transaction belongs to.
    ///
    /// Accounts are managed by an external service, so this layer does
    /// not check that the account exists.
    pub account_id: AccountId,
    /// The amount of money moved by this transaction.
    pub amount: f64,
    /// A caller-supplied identifier for the transaction.
    ///
    /// Used to address the transaction when deleting it. Uniqueness is
    /// not enforced: deleting by this identifier removes every row that
    /// matches it within the account.
    pub transaction_uuid: String,
}

/// The caller-supplied fields for creating a [Transaction].
///
/// No validation is applied to any field: negative amounts, empty
/// identifiers, and unknown account IDs are all accepted as-is.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTransaction {
    /// The ID of the account the transaction belongs to.
    pub account_id: AccountId,
    /// The amount of money moved by this transaction.
    pub amount: f64,
    /// A caller-supplied identifier for the transaction.
    pub transaction_uuid: String,
}

// ============================================================================
// DATABASE FUNCTIONS
// ============================================================================

/// Create a new transaction in the database.
///
/// The insert is a single auto-committed statement, no explicit SQL
/// transaction is opened.
///
/// # Errors
/// This function will return an [Error::SqlError] if there is an SQL
/// error.
pub fn create_transaction(
    new_transaction: NewTransaction,
    connection: &Connection,
) -> Result<Transaction, Error> {
    let transaction = connection
        .prepare(
            "INSERT INTO \"transaction\" (account_id, amount, transaction_uuid)
             VALUES (?1, ?2, ?3)
             RETURNING id, account_id, amount, transaction_uuid",
        )?
        .query_row(
            (
                new_transaction.account_id,
                new_transaction.amount,
                new_transaction.transaction_uuid,
            ),
            map_transaction_row,
        )?;

    Ok(transaction)
}

/// Delete the transactions matching both `account_id` and
/// `transaction_uuid` exactly, and return the number of rows removed.
///
/// The delete runs inside an explicit SQL transaction. If the delete
/// fails the uncommitted transaction is dropped, rolling the change
/// back. Zero matching rows is not an error, the result is `Ok(0)`.
///
/// # Errors
/// This function will return an [Error::SqlError] if there is an SQL
/// error.
pub fn delete_transactions(
    account_id: AccountId,
    transaction_uuid: &str,
    connection: &Connection,
) -> Result<usize, Error> {
    let sql_transaction = connection.unchecked_transaction()?;

    let rows_affected = sql_transaction.execute(
        "DELETE FROM \"transaction\" WHERE account_id = ?1 AND transaction_uuid = ?2",
        (account_id, transaction_uuid),
    )?;

    sql_transaction.commit()?;

    Ok(rows_affected)
}

/// Retrieve the transactions in the database that have `account_id`.
///
/// Rows are returned in whatever order the database produces them, no
/// ordering is guaranteed. An account with no transactions yields an
/// empty vector.
///
/// # Errors
/// This function will return an [Error::SqlError] if there is an SQL
/// error.
pub fn get_transactions_for_account(
    account_id: AccountId,
    connection: &Connection,
) -> Result<Vec<Transaction>, Error> {
    connection
        .prepare(
            "SELECT id, account_id, amount, transaction_uuid FROM \"transaction\"
             WHERE account_id = :account_id",
        )?
        .query_map(&[(":account_id", &account_id)], map_transaction_row)?
        .map(|maybe_transaction| maybe_transaction.map_err(Error::SqlError))
        .collect()
}

/// Create the transaction table in the database.
///
/// # Errors
/// Returns an error if the table cannot be created or if there is an SQL error.
pub fn create_transaction_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS \"transaction\" (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                account_id INTEGER NOT NULL,
                amount REAL NOT NULL,
                transaction_uuid TEXT NOT NULL
                )",
        (),
    )?;

    // Ensure the sequence starts at 1
    connection.execute(
        "INSERT OR IGNORE INTO sqlite_sequence (name, seq) VALUES ('transaction', 0)",
        (),
    )?;

    // Every query filters on account_id.
    connection.execute(
        "CREATE INDEX IF NOT EXISTS idx_transaction_account ON \"transaction\"(account_id);",
        (),
    )?;

    Ok(())
}

/// Map a database row to a Transaction.
pub fn map_transaction_row(row: &Row) -> Result<Transaction, rusqlite::Error> {
    let id = row.get(0)?;
    let account_id = row.get(1)?;
    let amount = row.get(2)?;
    let transaction_uuid = row.get(3)?;

    Ok(Transaction {
        id,
        account_id,
        amount,
        transaction_uuid,
    })
}

// ============================================================================
// TESTS
// ============================================================================


#[cfg(test)]
mod create_table_tests {
    use rusqlite::Connection;

    use super::create_transaction_table;

    #[test]
    fn sql_is_valid() {
        let connection =
            Connection::open_in_memory().expect("Could not initialise in-memory SQLite database");

        assert_eq!(Ok(()), create_transaction_table(&connection));
    }
}

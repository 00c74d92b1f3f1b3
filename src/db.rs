/*! Sets up the application's database schema. */

use rusqlite::{Connection, Transaction as SqlTransaction};

use crate::{Error, transaction::create_transaction_table};

/// Create the tables for the ledger's domain models.
///
/// The tables are created within a single SQL transaction so that the
/// schema is either fully set up or not at all.
///
/// # Errors
/// Returns an error if a table cannot be created or if there is some
/// other SQL error.
pub fn initialize(connection: &Connection) -> Result<(), Error> {
    let transaction =
        SqlTransaction::new_unchecked(connection, rusqlite::TransactionBehavior::Exclusive)?;

    create_transaction_table(&transaction)?;

    transaction.commit()?;

    Ok(())
}

#[cfg(test)]
mod initialize_tests {
    use rusqlite::Connection;

    use super::initialize;

    #[test]
    fn creates_schema() {
        let conn = Connection::open_in_memory().unwrap();

        assert_eq!(Ok(()), initialize(&conn));

        let count: i64 = conn
            .query_row("SELECT COUNT(id) FROM \"transaction\"", [], |row| {
                row.get(0)
            })
            .expect("transaction table should exist after initialize");
        assert_eq!(count, 0);
    }

    #[test]
    fn is_idempotent() {
        let conn = Connection::open_in_memory().unwrap();

        assert_eq!(Ok(()), initialize(&conn));
        assert_eq!(Ok(()), initialize(&conn));
    }
}

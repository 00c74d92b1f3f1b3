//! Transaction management for the ledger.
//!
//! This module contains everything related to transactions:
//! - The `Transaction` model and `NewTransaction` input for creating transactions
//! - Database functions for storing, deleting, and querying transactions
//! - The `SQLiteTransactionStore` facade that external callers use
//! - The `TransactionView` projection returned from read operations

mod core;
mod store;
mod view;

pub use core::{NewTransaction, Transaction, create_transaction_table, map_transaction_row};
pub use store::{OperationStatus, SQLiteTransactionStore};
pub use view::{TransactionView, to_views};

#[cfg(test)]
pub use core::{create_transaction, delete_transactions, get_transactions_for_account};

//! The external-safe projection of a transaction.

use serde::Serialize;

use crate::database_id::TransactionId;

use super::core::Transaction;

/// The subset of a [Transaction] that is safe to hand to external
/// callers.
///
/// The account ID and the caller-supplied transaction identifier are
/// deliberately left out so that routing and deduplication details stay
/// internal to the ledger.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransactionView {
    /// The ID of the transaction.
    pub id: TransactionId,
    /// The amount of money moved by this transaction.
    pub amount: f64,
}

impl TransactionView {
    /// Create a view by copying the exposed fields of `transaction`.
    pub fn new_from_transaction(transaction: &Transaction) -> Self {
        Self {
            id: transaction.id,
            amount: transaction.amount,
        }
    }
}

/// Map each transaction to its view, preserving order.
///
/// An empty input yields an empty vector, never an absent value.
pub fn to_views(transactions: &[Transaction]) -> Vec<TransactionView> {
    transactions
        .iter()
        .map(TransactionView::new_from_transaction)
        .collect()
}

//! Database ID type definitions.

/// Alias for the integer type used for mapping to database IDs.
pub type DatabaseId = i64;

/// The ID of a row in the transaction table.
pub type TransactionId = i64;

/// The ID of the account a transaction belongs to.
///
/// Accounts live in an external service, so this is an opaque integer
/// rather than a foreign key.
pub type AccountId = i64;

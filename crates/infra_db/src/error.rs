//! Database and ledger error types
//!
//! `DatabaseError` captures infrastructure failures (connections, queries,
//! constraint violations). `LedgerError` is what the repositories return:
//! the union of domain rejections and infrastructure failures, so callers
//! can map each to a distinct, stable result code.

use rust_decimal::Decimal;
use thiserror::Error;

use domain_allocation::AllocationError;
use domain_goals::GoalError;
use domain_wallet::WalletError;

/// Errors that can occur during database operations
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// Failed to establish a database connection
    #[error("Failed to connect to database: {0}")]
    ConnectionFailed(String),

    /// Query execution failed
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// Entity not found in database
    #[error("Entity not found: {0}")]
    NotFound(String),

    /// Unique constraint violation
    #[error("Duplicate entry: {0}")]
    DuplicateEntry(String),

    /// Foreign key constraint violation
    #[error("Foreign key violation: {0}")]
    ForeignKeyViolation(String),

    /// Check constraint violation
    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    /// Transaction error
    #[error("Transaction failed: {0}")]
    TransactionFailed(String),

    /// Pool exhaustion - no available connections
    #[error("Connection pool exhausted")]
    PoolExhausted,

    /// Generic SQL error
    #[error("SQL error: {0}")]
    SqlError(#[from] sqlx::Error),
}

impl DatabaseError {
    /// Creates a not found error for a specific entity type and identifier
    ///
    /// # Example
    ///
    /// ```rust
    /// use infra_db::DatabaseError;
    ///
    /// let error = DatabaseError::not_found("Goal", "GOL-123");
    /// assert!(error.to_string().contains("Goal"));
    /// ```
    pub fn not_found(entity: &str, id: impl std::fmt::Display) -> Self {
        DatabaseError::NotFound(format!("{} with id '{}' not found", entity, id))
    }

    /// Creates a duplicate entry error
    pub fn duplicate(entity: &str, field: &str, value: impl std::fmt::Display) -> Self {
        DatabaseError::DuplicateEntry(format!(
            "{} with {} '{}' already exists",
            entity, field, value
        ))
    }

    /// Checks if this error indicates a record was not found
    pub fn is_not_found(&self) -> bool {
        matches!(self, DatabaseError::NotFound(_))
    }

    /// Checks if this error is a constraint violation
    pub fn is_constraint_violation(&self) -> bool {
        matches!(
            self,
            DatabaseError::DuplicateEntry(_)
                | DatabaseError::ForeignKeyViolation(_)
                | DatabaseError::ConstraintViolation(_)
        )
    }

    /// Checks if this error is a connection-related issue
    pub fn is_connection_error(&self) -> bool {
        matches!(
            self,
            DatabaseError::ConnectionFailed(_) | DatabaseError::PoolExhausted
        )
    }
}

/// Converts SQLx errors to more specific DatabaseError variants
///
/// This function analyzes the SQLx error and maps it to the appropriate
/// DatabaseError variant based on the PostgreSQL error code.
impl From<&sqlx::Error> for DatabaseError {
    fn from(error: &sqlx::Error) -> Self {
        match error {
            sqlx::Error::RowNotFound => {
                DatabaseError::NotFound("Record not found".to_string())
            }
            sqlx::Error::PoolTimedOut => DatabaseError::PoolExhausted,
            sqlx::Error::Database(db_err) => {
                // PostgreSQL error codes
                // https://www.postgresql.org/docs/current/errcodes-appendix.html
                if let Some(code) = db_err.code() {
                    match code.as_ref() {
                        "23505" => DatabaseError::DuplicateEntry(db_err.message().to_string()),
                        "23503" => {
                            DatabaseError::ForeignKeyViolation(db_err.message().to_string())
                        }
                        "23514" => {
                            DatabaseError::ConstraintViolation(db_err.message().to_string())
                        }
                        _ => DatabaseError::QueryFailed(db_err.message().to_string()),
                    }
                } else {
                    DatabaseError::QueryFailed(db_err.message().to_string())
                }
            }
            _ => DatabaseError::QueryFailed(error.to_string()),
        }
    }
}

/// Errors returned by the ledger repositories
///
/// Domain rejections (insufficient funds, invalid split, completed goal)
/// are detected before any mutation and never leave partial state behind;
/// `Database` failures abort the in-flight transaction via rollback.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// The spendable account balance cannot cover the payment
    #[error("Insufficient funds in account: available {available}, requested {requested}")]
    InsufficientBalance {
        available: Decimal,
        requested: Decimal,
    },

    /// An amount that must be positive was zero or negative
    #[error("Amount must be positive, got {0}")]
    InvalidAmount(Decimal),

    /// Wallet domain rejection (insufficient wallet funds, bad wallet name)
    #[error(transparent)]
    Wallet(#[from] WalletError),

    /// Allocation domain rejection (invalid split, non-positive amount)
    #[error(transparent)]
    Allocation(#[from] AllocationError),

    /// Goal domain rejection (completed goal, bad target)
    #[error(transparent)]
    Goal(#[from] GoalError),

    /// Infrastructure failure
    #[error("Database error: {0}")]
    Database(#[from] DatabaseError),
}

impl LedgerError {
    /// True when the error means a referenced entity does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(self, LedgerError::Database(db) if db.is_not_found())
    }
}

impl From<sqlx::Error> for LedgerError {
    fn from(error: sqlx::Error) -> Self {
        LedgerError::Database(DatabaseError::from(&error))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_helper() {
        let error = DatabaseError::not_found("User", "USR-42");
        assert!(error.is_not_found());
        assert!(error.to_string().contains("USR-42"));
    }

    #[test]
    fn test_duplicate_helper_is_constraint_violation() {
        let error = DatabaseError::duplicate("User", "email", "demo@example.com");
        assert!(error.is_constraint_violation());
    }

    #[test]
    fn test_row_not_found_maps_to_not_found() {
        let error = DatabaseError::from(&sqlx::Error::RowNotFound);
        assert!(error.is_not_found());
    }

    #[test]
    fn test_ledger_error_wraps_wallet_rejection() {
        let wallet_err = WalletError::UnknownWallet("checking".to_string());
        let ledger_err: LedgerError = wallet_err.into();
        assert!(matches!(ledger_err, LedgerError::Wallet(_)));
        assert!(!ledger_err.is_not_found());
    }

    #[test]
    fn test_ledger_error_not_found_passthrough() {
        let ledger_err = LedgerError::Database(DatabaseError::not_found("Goal", "GOL-1"));
        assert!(ledger_err.is_not_found());
    }
}

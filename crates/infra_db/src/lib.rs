//! Infrastructure Database Layer
//!
//! This crate is the ledger store: it owns the PostgreSQL connection pool
//! and every query that touches persisted account state. All wallet
//! mutations go through the repositories here, never through ad-hoc SQL in
//! the API layer.
//!
//! # Transactional discipline
//!
//! Balance-changing operations on one account must be serialized with
//! respect to each other. Each such operation runs in a single database
//! transaction that begins by locking the account row
//! (`SELECT ... FOR UPDATE`); two concurrent debits therefore never both
//! read the pre-mutation balance. Validation failures roll back before any
//! write; infrastructure failures roll back via `Drop` on the open
//! transaction.
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_db::{DatabaseConfig, create_pool, WalletRepository};
//!
//! let pool = create_pool(DatabaseConfig::new("postgres://localhost/roundup")).await?;
//! let wallets = WalletRepository::new(pool.clone());
//! ```

pub mod pool;
pub mod error;
pub mod repositories;

pub use pool::{DatabasePool, create_pool, DatabaseConfig};
pub use error::{DatabaseError, LedgerError};
pub use repositories::{AccountRepository, WalletRepository, GoalRepository, CatalogRepository, CharityRef};

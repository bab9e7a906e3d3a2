//! Repository implementations of the balance engine's reader traits.
//!
//! Repositories hide the `SeaORM` details from the engine; each one
//! maps rows to the core read models and database failures to the
//! engine's error taxonomy.

pub mod customer;
pub mod invoice;
pub mod ledger_entry;

pub use customer::CustomerRepository;
pub use invoice::InvoiceRepository;
pub use ledger_entry::LedgerEntryRepository;

use khata_core::balance::BalanceError;
use sea_orm::DbErr;

/// Maps a database error into the engine taxonomy.
///
/// Connectivity failures are retryable (`StoreUnavailable`); anything
/// else (bad SQL, decode failures) is a non-retryable `Database`
/// error. Either way the failure surfaces - it is never collapsed
/// into an empty result.
pub(crate) fn map_db_err(err: DbErr) -> BalanceError {
    match err {
        DbErr::Conn(_) | DbErr::ConnectionAcquire(_) => {
            BalanceError::StoreUnavailable(err.to_string())
        }
        other => BalanceError::Database(other.to_string()),
    }
}

//! Shared domain types.

pub mod id;

pub use id::{CompanyId, CustomerId, InvoiceId, LedgerEntryId};

#[cfg(test)]
mod id_tests;

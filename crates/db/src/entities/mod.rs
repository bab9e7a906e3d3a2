//! `SeaORM` entity definitions.

pub mod customers;
pub mod invoices;
pub mod ledger_entries;
pub mod sea_orm_active_enums;

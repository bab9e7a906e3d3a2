//! Postgres enum mappings.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Direction of a customer's opening balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "opening_balance_type")]
#[serde(rename_all = "lowercase")]
pub enum OpeningBalanceType {
    /// Customer owes the business.
    #[sea_orm(string_value = "debit")]
    Debit,
    /// Business owes the customer.
    #[sea_orm(string_value = "credit")]
    Credit,
}

/// Sales document kind. Only invoices feed the balance engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "document_type")]
#[serde(rename_all = "snake_case")]
pub enum DocumentType {
    /// Tax invoice.
    #[sea_orm(string_value = "invoice")]
    Invoice,
    /// Quotation; never carries a balance.
    #[sea_orm(string_value = "quote")]
    Quote,
    /// Credit note issued against an invoice.
    #[sea_orm(string_value = "credit_note")]
    CreditNote,
}

/// Sales document lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "document_status")]
#[serde(rename_all = "snake_case")]
pub enum DocumentStatus {
    /// Not yet issued.
    #[sea_orm(string_value = "draft")]
    Draft,
    /// Issued and unpaid.
    #[sea_orm(string_value = "issued")]
    Issued,
    /// Partially settled.
    #[sea_orm(string_value = "partially_paid")]
    PartiallyPaid,
    /// Fully settled.
    #[sea_orm(string_value = "paid")]
    Paid,
    /// Cancelled before settlement.
    #[sea_orm(string_value = "cancelled")]
    Cancelled,
    /// Voided after issue.
    #[sea_orm(string_value = "void")]
    Void,
}

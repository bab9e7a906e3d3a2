//! `SeaORM` Entity for sales documents.
//!
//! One table holds invoices, quotes and credit notes; the balance
//! engine only ever reads `document_type = invoice` rows.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::sea_orm_active_enums::{DocumentStatus, DocumentType};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "sales_documents")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub customer_id: Uuid,
    pub company_id: Uuid,
    pub document_type: DocumentType,
    pub status: DocumentStatus,
    pub document_number: String,
    pub document_date: Date,
    pub total_amount: Decimal,
    pub paid_amount: Decimal,
    /// Stored outstanding balance; `NULL` on legacy rows that predate
    /// the column, in which case it is derived as total minus paid.
    pub balance_amount: Option<Decimal>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::customers::Entity",
        from = "Column::CustomerId",
        to = "super::customers::Column::Id"
    )]
    Customers,
}

impl Related<super::customers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Customers.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

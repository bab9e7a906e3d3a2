//! Sales document reads for the fallback aggregation.

use chrono::NaiveDate;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};

use khata_core::balance::{BalanceError, InvoiceBalance, InvoiceReader, InvoiceStatus};
use khata_shared::types::{CompanyId, CustomerId, InvoiceId};

use super::map_db_err;
use crate::entities::{
    invoices,
    sea_orm_active_enums::{DocumentStatus, DocumentType},
};

/// Invoice listing scoped to one customer within one company.
#[derive(Debug, Clone)]
pub struct InvoiceRepository {
    db: DatabaseConnection,
}

impl InvoiceRepository {
    /// Creates a new invoice repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl InvoiceReader for InvoiceRepository {
    async fn invoices_for_customer(
        &self,
        customer_id: CustomerId,
        company_id: CompanyId,
        as_of: Option<NaiveDate>,
    ) -> Result<Vec<InvoiceBalance>, BalanceError> {
        let mut query = invoices::Entity::find()
            .filter(invoices::Column::CustomerId.eq(customer_id.into_inner()))
            .filter(invoices::Column::CompanyId.eq(company_id.into_inner()))
            .filter(invoices::Column::DocumentType.eq(DocumentType::Invoice))
            .filter(
                invoices::Column::Status
                    .is_not_in([DocumentStatus::Cancelled, DocumentStatus::Void]),
            );

        if let Some(bound) = as_of {
            query = query.filter(invoices::Column::DocumentDate.lte(bound));
        }

        let models = query.all(&self.db).await.map_err(map_db_err)?;

        Ok(models.into_iter().map(to_balance).collect())
    }
}

fn to_balance(model: invoices::Model) -> InvoiceBalance {
    InvoiceBalance {
        id: InvoiceId::from_uuid(model.id),
        status: to_status(model.status),
        total_amount: model.total_amount,
        paid_amount: model.paid_amount,
        balance_amount: model.balance_amount,
    }
}

const fn to_status(status: DocumentStatus) -> InvoiceStatus {
    match status {
        DocumentStatus::Draft => InvoiceStatus::Draft,
        DocumentStatus::Issued => InvoiceStatus::Issued,
        DocumentStatus::PartiallyPaid => InvoiceStatus::PartiallyPaid,
        DocumentStatus::Paid => InvoiceStatus::Paid,
        DocumentStatus::Cancelled => InvoiceStatus::Cancelled,
        DocumentStatus::Void => InvoiceStatus::Void,
    }
}

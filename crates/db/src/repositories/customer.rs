//! Customer repository backing the engine's customer lookups.

use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};

use khata_core::balance::{BalanceError, CustomerProfile, CustomerReader, OpeningBalanceType};
use khata_shared::types::{CompanyId, CustomerId};

use super::map_db_err;
use crate::entities::{customers, sea_orm_active_enums};

/// Customer master reads, always scoped by company.
#[derive(Debug, Clone)]
pub struct CustomerRepository {
    db: DatabaseConnection,
}

impl CustomerRepository {
    /// Creates a new customer repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl CustomerReader for CustomerRepository {
    async fn customer_profile(
        &self,
        customer_id: CustomerId,
        company_id: CompanyId,
    ) -> Result<Option<CustomerProfile>, BalanceError> {
        let model = customers::Entity::find_by_id(customer_id.into_inner())
            .filter(customers::Column::CompanyId.eq(company_id.into_inner()))
            .one(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(model.map(to_profile))
    }
}

fn to_profile(model: customers::Model) -> CustomerProfile {
    CustomerProfile {
        customer_id: CustomerId::from_uuid(model.id),
        company_id: CompanyId::from_uuid(model.company_id),
        opening_balance: model.opening_balance,
        opening_balance_type: match model.opening_balance_type {
            sea_orm_active_enums::OpeningBalanceType::Debit => OpeningBalanceType::Debit,
            sea_orm_active_enums::OpeningBalanceType::Credit => OpeningBalanceType::Credit,
        },
        credit_limit: model.credit_limit,
        is_active: model.is_active,
    }
}

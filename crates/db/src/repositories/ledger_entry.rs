//! Ledger log reads.
//!
//! The engine only ever needs the single latest entry; the query is
//! an index-backed `LIMIT 1` on
//! `(customer_id, company_id, entry_date DESC, created_at DESC)`.

use chrono::NaiveDate;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};

use khata_core::balance::{BalanceError, LedgerEntry, LedgerEntryReader};
use khata_shared::types::{CompanyId, CustomerId, LedgerEntryId};

use super::map_db_err;
use crate::entities::ledger_entries;

/// Latest-entry reads against the customer ledger log.
#[derive(Debug, Clone)]
pub struct LedgerEntryRepository {
    db: DatabaseConnection,
}

impl LedgerEntryRepository {
    /// Creates a new ledger entry repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl LedgerEntryReader for LedgerEntryRepository {
    async fn latest_entry(
        &self,
        customer_id: CustomerId,
        company_id: CompanyId,
        as_of: Option<NaiveDate>,
    ) -> Result<Option<LedgerEntry>, BalanceError> {
        let mut query = ledger_entries::Entity::find()
            .filter(ledger_entries::Column::CustomerId.eq(customer_id.into_inner()))
            .filter(ledger_entries::Column::CompanyId.eq(company_id.into_inner()));

        if let Some(bound) = as_of {
            query = query.filter(ledger_entries::Column::EntryDate.lte(bound));
        }

        let model = query
            .order_by_desc(ledger_entries::Column::EntryDate)
            .order_by_desc(ledger_entries::Column::CreatedAt)
            .one(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(model.map(to_entry))
    }
}

fn to_entry(model: ledger_entries::Model) -> LedgerEntry {
    LedgerEntry {
        id: LedgerEntryId::from_uuid(model.id),
        customer_id: CustomerId::from_uuid(model.customer_id),
        company_id: CompanyId::from_uuid(model.company_id),
        entry_date: model.entry_date,
        debit_amount: model.debit_amount,
        credit_amount: model.credit_amount,
        balance: model.balance,
        created_at: model.created_at.to_utc(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use rust_decimal_macros::dec;
    use uuid::Uuid;

    #[test]
    fn test_maps_row_to_entry() {
        let now = Utc::now();
        let row = ledger_entries::Model {
            id: Uuid::now_v7(),
            customer_id: Uuid::now_v7(),
            company_id: Uuid::now_v7(),
            entry_date: NaiveDate::from_ymd_opt(2026, 2, 1).unwrap(),
            description: Some("Invoice INV-0042".into()),
            debit_amount: dec!(1180),
            credit_amount: dec!(0),
            balance: dec!(1380),
            reference_type: Some("invoice".into()),
            reference_id: Some(Uuid::now_v7()),
            created_at: now.into(),
        };

        let entry = to_entry(row.clone());
        assert_eq!(entry.id.into_inner(), row.id);
        assert_eq!(entry.entry_date, row.entry_date);
        assert_eq!(entry.debit_amount, dec!(1180));
        assert_eq!(entry.credit_amount, dec!(0));
        assert_eq!(entry.balance, dec!(1380));
        assert_eq!(entry.created_at, now);
    }
}

//! Invoice fallback aggregation.
//!
//! When a customer has no ledger entries yet, the outstanding balance
//! is derived directly from their invoices. This is an O(n) scan and
//! acceptable only as a fallback; once the sales subsystem posts
//! ledger entries, the fast path takes over permanently.

use rust_decimal::Decimal;

use super::types::InvoiceBalance;

/// Sums the outstanding balance across a customer's invoices.
///
/// Cancelled and voided documents are skipped defensively even though
/// upstream is expected to exclude them. Invoice balances do not
/// include the opening balance; the resolver adds that.
#[must_use]
pub fn outstanding_total(invoices: &[InvoiceBalance]) -> Decimal {
    invoices
        .iter()
        .filter(|inv| inv.status.counts_toward_balance())
        .map(InvoiceBalance::outstanding)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::balance::types::InvoiceStatus;
    use khata_shared::types::InvoiceId;
    use rust_decimal_macros::dec;

    fn invoice(total: Decimal, paid: Decimal, balance: Option<Decimal>) -> InvoiceBalance {
        InvoiceBalance {
            id: InvoiceId::new(),
            status: InvoiceStatus::Issued,
            total_amount: total,
            paid_amount: paid,
            balance_amount: balance,
        }
    }

    #[test]
    fn test_empty_list_sums_to_zero() {
        assert_eq!(outstanding_total(&[]), Decimal::ZERO);
    }

    #[test]
    fn test_sums_derived_balances() {
        // {total: 1000, paid: 400} + {total: 500, paid: 500} = 600
        let invoices = vec![
            invoice(dec!(1000), dec!(400), None),
            invoice(dec!(500), dec!(500), None),
        ];
        assert_eq!(outstanding_total(&invoices), dec!(600));
    }

    #[test]
    fn test_stored_balance_wins_over_derivation() {
        let invoices = vec![
            invoice(dec!(1000), dec!(400), Some(dec!(550))),
            invoice(dec!(500), dec!(0), None),
        ];
        assert_eq!(outstanding_total(&invoices), dec!(1050));
    }

    #[test]
    fn test_missing_numerics_treated_as_zero() {
        let invoices = vec![invoice(Decimal::ZERO, Decimal::ZERO, None)];
        assert_eq!(outstanding_total(&invoices), Decimal::ZERO);
    }

    #[test]
    fn test_cancelled_and_void_excluded() {
        let mut cancelled = invoice(dec!(700), dec!(0), None);
        cancelled.status = InvoiceStatus::Cancelled;
        let mut voided = invoice(dec!(300), dec!(0), None);
        voided.status = InvoiceStatus::Void;
        let invoices = vec![invoice(dec!(1000), dec!(400), None), cancelled, voided];

        assert_eq!(outstanding_total(&invoices), dec!(600));
    }

    #[test]
    fn test_overpayment_yields_negative_outstanding() {
        // A customer who overpaid reduces the total owed.
        let invoices = vec![
            invoice(dec!(1000), dec!(1200), None),
            invoice(dec!(500), dec!(0), None),
        ];
        assert_eq!(outstanding_total(&invoices), dec!(300));
    }
}

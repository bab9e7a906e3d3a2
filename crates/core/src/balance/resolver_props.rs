//! Property tests for the pure balance arithmetic.

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::aggregator::outstanding_total;
use super::credit::{CreditPolicy, CreditStatus};
use super::types::{
    AvailableCredit, BalancePath, CustomerProfile, InvoiceBalance, InvoiceStatus, LedgerSummary,
    OpeningBalanceType,
};
use khata_shared::types::{CompanyId, CustomerId, InvoiceId};

fn arb_amount() -> impl Strategy<Value = Decimal> {
    // Two decimal places, up to ten million, as money columns store.
    (-1_000_000_000i64..1_000_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

fn arb_nonneg_amount() -> impl Strategy<Value = Decimal> {
    (0i64..1_000_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

fn arb_status() -> impl Strategy<Value = InvoiceStatus> {
    prop_oneof![
        Just(InvoiceStatus::Draft),
        Just(InvoiceStatus::Issued),
        Just(InvoiceStatus::PartiallyPaid),
        Just(InvoiceStatus::Paid),
        Just(InvoiceStatus::Cancelled),
        Just(InvoiceStatus::Void),
    ]
}

fn arb_invoice() -> impl Strategy<Value = InvoiceBalance> {
    (
        arb_nonneg_amount(),
        arb_nonneg_amount(),
        proptest::option::of(arb_amount()),
        arb_status(),
    )
        .prop_map(|(total, paid, balance, status)| InvoiceBalance {
            id: InvoiceId::new(),
            status,
            total_amount: total,
            paid_amount: paid,
            balance_amount: balance,
        })
}

fn summary(current_balance: Decimal, credit_limit: Decimal) -> LedgerSummary {
    LedgerSummary::new(
        CustomerId::new(),
        CompanyId::new(),
        Decimal::ZERO,
        current_balance,
        credit_limit,
        BalancePath::Ledger,
    )
}

proptest! {
    #[test]
    fn prop_outstanding_total_matches_manual_sum(invoices in prop::collection::vec(arb_invoice(), 0..32)) {
        let expected: Decimal = invoices
            .iter()
            .filter(|inv| !matches!(inv.status, InvoiceStatus::Cancelled | InvoiceStatus::Void))
            .map(InvoiceBalance::outstanding)
            .sum();
        prop_assert_eq!(outstanding_total(&invoices), expected);
    }

    #[test]
    fn prop_excluded_statuses_never_contribute(
        kept in prop::collection::vec(arb_invoice(), 0..16),
        excluded in prop::collection::vec(arb_invoice(), 0..16),
    ) {
        let mut mixed = kept.clone();
        mixed.extend(excluded.into_iter().map(|mut inv| {
            inv.status = InvoiceStatus::Cancelled;
            inv
        }));
        prop_assert_eq!(outstanding_total(&mixed), outstanding_total(&kept));
    }

    #[test]
    fn prop_available_credit_never_negative(balance in arb_amount(), limit in arb_nonneg_amount()) {
        match AvailableCredit::compute(limit, balance) {
            AvailableCredit::Unlimited => prop_assert!(limit.is_zero()),
            AvailableCredit::Amount(amount) => {
                prop_assert!(!limit.is_zero());
                prop_assert!(amount >= Decimal::ZERO);
                prop_assert!(amount <= limit);
            }
        }
    }

    #[test]
    fn prop_classification_is_total_and_consistent(balance in arb_amount(), limit in arb_nonneg_amount()) {
        let policy = CreditPolicy::default();
        let status = policy.classify(&summary(balance, limit));
        if limit.is_zero() {
            prop_assert_eq!(status, CreditStatus::Unlimited);
        } else if balance > limit {
            prop_assert_eq!(status, CreditStatus::Exceeded);
        } else if balance >= limit * policy.headroom_threshold {
            prop_assert_eq!(status, CreditStatus::Limited);
        } else {
            prop_assert_eq!(status, CreditStatus::Available);
        }
    }

    #[test]
    fn prop_nonpositive_balance_never_limited(balance in arb_nonneg_amount(), limit in arb_nonneg_amount()) {
        prop_assume!(!limit.is_zero());
        let policy = CreditPolicy::default();
        let status = policy.classify(&summary(-balance, limit));
        prop_assert_eq!(status, CreditStatus::Available);
    }

    #[test]
    fn prop_signed_opening_follows_type(amount in arb_nonneg_amount()) {
        let debit = CustomerProfile {
            customer_id: CustomerId::new(),
            company_id: CompanyId::new(),
            opening_balance: amount,
            opening_balance_type: OpeningBalanceType::Debit,
            credit_limit: Decimal::ZERO,
            is_active: true,
        };
        let credit = CustomerProfile {
            opening_balance_type: OpeningBalanceType::Credit,
            ..debit.clone()
        };
        prop_assert_eq!(debit.signed_opening_balance(), amount);
        prop_assert_eq!(credit.signed_opening_balance(), -amount);
    }
}

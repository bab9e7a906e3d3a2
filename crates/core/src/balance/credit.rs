//! Credit status classification.
//!
//! A pure function of a `LedgerSummary` and the configured credit
//! policy. No I/O; safe to call inline on every render. Order and
//! invoice creation gating consume the result elsewhere.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use khata_shared::EngineConfig;

use super::types::LedgerSummary;

/// Qualitative credit classification for a customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CreditStatus {
    /// No credit limit configured.
    Unlimited,
    /// Exposure is comfortably below the limit.
    Available,
    /// Exposure is at or near the limit.
    Limited,
    /// Exposure exceeds the limit.
    Exceeded,
}

/// Classification thresholds.
///
/// `headroom_threshold` is the fraction of the credit limit at which
/// a customer moves from `Available` to `Limited`. The 80% default is
/// a product choice, deliberately configurable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CreditPolicy {
    /// Fraction of the limit treated as headroom (0 < threshold <= 1).
    pub headroom_threshold: Decimal,
}

impl Default for CreditPolicy {
    fn default() -> Self {
        Self {
            headroom_threshold: Decimal::new(8, 1),
        }
    }
}

impl CreditPolicy {
    /// Builds a policy from the engine configuration.
    #[must_use]
    pub const fn from_config(config: &EngineConfig) -> Self {
        Self {
            headroom_threshold: config.credit_headroom_threshold,
        }
    }

    /// Classifies a summary against the credit limit.
    ///
    /// Only the debit direction (customer owes business) counts as
    /// exposure: a negative balance is credit in the customer's
    /// favour and is always `Available`, regardless of magnitude.
    #[must_use]
    pub fn classify(&self, summary: &LedgerSummary) -> CreditStatus {
        let limit = summary.credit_limit;
        if limit.is_zero() {
            return CreditStatus::Unlimited;
        }

        let exposure = summary.current_balance;
        if exposure > limit {
            CreditStatus::Exceeded
        } else if exposure >= limit * self.headroom_threshold {
            CreditStatus::Limited
        } else {
            CreditStatus::Available
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::balance::types::BalancePath;
    use khata_shared::types::{CompanyId, CustomerId};
    use rstest::rstest;
    use rust_decimal_macros::dec;

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

    #[rstest]
    #[case(dec!(799), CreditStatus::Available)]
    #[case(dec!(800), CreditStatus::Limited)]
    #[case(dec!(1000), CreditStatus::Limited)]
    #[case(dec!(1001), CreditStatus::Exceeded)]
    #[case(dec!(-500), CreditStatus::Available)]
    #[case(dec!(0), CreditStatus::Available)]
    fn test_classification_boundaries(
        #[case] balance: Decimal,
        #[case] expected: CreditStatus,
    ) {
        let policy = CreditPolicy::default();
        assert_eq!(policy.classify(&summary(balance, dec!(1000))), expected);
    }

    #[rstest]
    #[case(dec!(0))]
    #[case(dec!(999999))]
    #[case(dec!(-999999))]
    fn test_zero_limit_is_unlimited(#[case] balance: Decimal) {
        let policy = CreditPolicy::default();
        assert_eq!(
            policy.classify(&summary(balance, Decimal::ZERO)),
            CreditStatus::Unlimited
        );
    }

    #[test]
    fn test_custom_threshold() {
        let policy = CreditPolicy {
            headroom_threshold: dec!(0.5),
        };
        assert_eq!(
            policy.classify(&summary(dec!(499), dec!(1000))),
            CreditStatus::Available
        );
        assert_eq!(
            policy.classify(&summary(dec!(500), dec!(1000))),
            CreditStatus::Limited
        );
    }

    #[test]
    fn test_policy_from_config() {
        let config = EngineConfig {
            credit_headroom_threshold: dec!(0.9),
            ..EngineConfig::default()
        };
        let policy = CreditPolicy::from_config(&config);
        assert_eq!(policy.headroom_threshold, dec!(0.9));
        assert_eq!(
            policy.classify(&summary(dec!(850), dec!(1000))),
            CreditStatus::Available
        );
        assert_eq!(
            policy.classify(&summary(dec!(900), dec!(1000))),
            CreditStatus::Limited
        );
    }

    #[test]
    fn test_deep_credit_balance_never_exceeded() {
        // Business owes the customer; exposure is zero no matter how
        // large the magnitude.
        let policy = CreditPolicy::default();
        assert_eq!(
            policy.classify(&summary(dec!(-100000), dec!(100))),
            CreditStatus::Available
        );
    }
}

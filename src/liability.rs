//! The debt input entity, minimum-payment policy and aggregate summary.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Category of a liability. Descriptive only, it does not affect any math.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LiabilityKind {
    CreditCard,
    Loan,
    Mortgage,
    StudentLoan,
    Other,
}

/// One outstanding debt, as supplied by the caller.
///
/// `amount` is the live balance after payments to date. `original_amount`
/// is only used for progress reporting; when absent it defaults to `amount`
/// and progress reads as zero. `interest_rate` is a nominal annual
/// percentage (18 means 18%/yr); absent means interest-free.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Liability {
    pub id: String,
    pub name: String,
    pub amount: Decimal,
    pub original_amount: Option<Decimal>,
    pub interest_rate: Option<Decimal>,
    pub monthly_payment: Option<Decimal>,
    pub kind: LiabilityKind,
}

impl Liability {
    /// The annual rate, with absence meaning interest-free.
    pub fn annual_rate(&self) -> Decimal {
        self.interest_rate.unwrap_or(dec!(0))
    }

    /// Fraction of the original balance already paid, in [0, 1].
    ///
    /// Without an `original_amount` the live balance is taken as the
    /// original, so progress reads as zero.
    pub fn paid_fraction(&self) -> Decimal {
        let original = self.original_amount.unwrap_or(self.amount);
        if original <= dec!(0) {
            return dec!(0);
        }
        ((original - self.amount) / original).clamp(dec!(0), dec!(1))
    }
}

/// Synthetic minimum-payment policy applied when a liability carries no
/// contractual monthly payment.
///
/// The default (2% of balance with a 25 floor) follows typical
/// revolving-credit conventions. Real contracts vary, which is why this is
/// configuration rather than a constant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MinimumPaymentPolicy {
    /// Fraction of the outstanding balance due each month.
    pub balance_fraction: Decimal,
    /// Smallest minimum payment the policy produces.
    pub floor: Decimal,
}

impl Default for MinimumPaymentPolicy {
    fn default() -> Self {
        MinimumPaymentPolicy {
            balance_fraction: dec!(0.02),
            floor: dec!(25),
        }
    }
}

/// Resolves the minimum monthly payment for a liability.
///
/// A contractual `monthly_payment` wins when present and positive;
/// otherwise the policy derives one from the balance.
pub fn minimum_payment(liability: &Liability, policy: &MinimumPaymentPolicy) -> Decimal {
    if let Some(payment) = liability.monthly_payment
        && payment > dec!(0)
    {
        return payment;
    }
    (liability.amount * policy.balance_fraction).max(policy.floor)
}

/// Aggregate view over a list of liabilities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebtSummary {
    pub total_debt: Decimal,
    pub total_original_debt: Decimal,
    /// Sum of resolved minimum payments across active debts.
    pub total_monthly_minimum: Decimal,
    /// Count of debts with a positive balance.
    pub active_debt_count: usize,
    /// Id of the active debt with the highest positive annual rate.
    /// `None` when every active debt is interest-free.
    pub highest_interest_debt: Option<String>,
    /// Id of the active debt with the smallest balance, if any.
    pub smallest_debt: Option<String>,
}

/// Calculates a [`DebtSummary`] over a snapshot of liabilities.
///
/// Fully-paid debts (zero balance) contribute to the original-amount total
/// but are excluded from the active count, the minimum-payment total and
/// both debt references. An empty input yields an all-zero summary with
/// `None` references.
pub fn calculate_debt_summary(
    liabilities: &[Liability],
    policy: &MinimumPaymentPolicy,
) -> DebtSummary {
    let mut summary = DebtSummary {
        total_debt: dec!(0),
        total_original_debt: dec!(0),
        total_monthly_minimum: dec!(0),
        active_debt_count: 0,
        highest_interest_debt: None,
        smallest_debt: None,
    };

    let mut highest_rate = dec!(0);
    let mut smallest_balance: Option<Decimal> = None;

    for liability in liabilities {
        summary.total_debt += liability.amount.max(dec!(0));
        summary.total_original_debt += liability
            .original_amount
            .unwrap_or(liability.amount)
            .max(dec!(0));

        if liability.amount <= dec!(0) {
            continue;
        }

        summary.active_debt_count += 1;
        summary.total_monthly_minimum += minimum_payment(liability, policy);

        if liability.annual_rate() > highest_rate {
            highest_rate = liability.annual_rate();
            summary.highest_interest_debt = Some(liability.id.clone());
        }
        if smallest_balance.is_none_or(|smallest| liability.amount < smallest) {
            smallest_balance = Some(liability.amount);
            summary.smallest_debt = Some(liability.id.clone());
        }
    }

    summary
}

#[cfg(test)]
pub(crate) fn sample_liability(id: &str, amount: Decimal, rate: Option<Decimal>) -> Liability {
    Liability {
        id: id.to_string(),
        name: id.to_uppercase(),
        amount,
        original_amount: None,
        interest_rate: rate,
        monthly_payment: None,
        kind: LiabilityKind::CreditCard,
    }
}

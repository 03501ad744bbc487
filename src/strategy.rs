//! Per-debt analysis and strategy-based debt ordering.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::amortization::{PayoffHorizon, months_to_pay_off, total_interest_paid};
use crate::liability::{Liability, MinimumPaymentPolicy, minimum_payment};

/// How the extra budget is directed across debts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StrategyKind {
    /// Smallest balance first, for quick psychological wins.
    Snowball,
    /// Highest interest rate first, minimizing total interest paid.
    Avalanche,
    /// Caller-supplied ordering of liability ids, respected verbatim.
    Custom { order: Vec<String> },
}

/// A payoff strategy plus the monthly budget available beyond minimums.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentStrategy {
    pub kind: StrategyKind,
    pub name: String,
    pub description: String,
    pub monthly_extra_budget: Decimal,
}

impl PaymentStrategy {
    pub fn snowball(monthly_extra_budget: Decimal) -> Self {
        PaymentStrategy {
            kind: StrategyKind::Snowball,
            name: "Snowball".to_string(),
            description: "Pay off the smallest balances first".to_string(),
            monthly_extra_budget,
        }
    }

    pub fn avalanche(monthly_extra_budget: Decimal) -> Self {
        PaymentStrategy {
            kind: StrategyKind::Avalanche,
            name: "Avalanche".to_string(),
            description: "Pay off the highest interest rates first".to_string(),
            monthly_extra_budget,
        }
    }
}

/// One liability analyzed in isolation for a given calculation pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebtAnalysis {
    pub liability: Liability,
    pub months_to_pay_off: PayoffHorizon,
    pub total_interest_paid: Decimal,
    pub minimum_payment: Decimal,
    /// Minimum plus whatever extra budget is directed at this debt.
    pub suggested_payment: Decimal,
    /// 1-based position in the payoff order; 0 until ordering assigns it.
    pub priority: u32,
}

/// Analyzes one debt in isolation: resolves its minimum payment, adds the
/// extra, and projects months and interest at that combined payment.
///
/// Interactions with other debts are deliberately ignored here; the payment
/// plan ledger accounts for those.
pub fn analyze_debt(
    liability: &Liability,
    extra_payment: Decimal,
    policy: &MinimumPaymentPolicy,
) -> DebtAnalysis {
    let minimum = minimum_payment(liability, policy);
    let suggested = minimum + extra_payment;
    DebtAnalysis {
        months_to_pay_off: months_to_pay_off(liability.amount, suggested, liability.annual_rate()),
        total_interest_paid: total_interest_paid(
            liability.amount,
            suggested,
            liability.annual_rate(),
        ),
        minimum_payment: minimum,
        suggested_payment: suggested,
        priority: 0,
        liability: liability.clone(),
    }
}

/// Orders analyzed debts per strategy and assigns 1-based priorities.
///
/// The sort is stable: debts tied on the sort key keep their input order, so
/// repeated runs over the same snapshot never shuffle ties. Custom orderings
/// are respected verbatim; ids missing from a custom list trail the listed
/// debts in input order.
pub fn order_debts(mut debts: Vec<DebtAnalysis>, kind: &StrategyKind) -> Vec<DebtAnalysis> {
    match kind {
        StrategyKind::Snowball => {
            debts.sort_by(|a, b| a.liability.amount.cmp(&b.liability.amount));
        }
        StrategyKind::Avalanche => {
            debts.sort_by(|a, b| b.liability.annual_rate().cmp(&a.liability.annual_rate()));
        }
        StrategyKind::Custom { order } => {
            let rank = |debt: &DebtAnalysis| {
                order
                    .iter()
                    .position(|id| *id == debt.liability.id)
                    .unwrap_or(order.len())
            };
            debts.sort_by_key(rank);
        }
    }

    for (index, debt) in debts.iter_mut().enumerate() {
        debt.priority = index as u32 + 1;
    }
    debts
}

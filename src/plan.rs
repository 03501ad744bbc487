//! Payment plan construction via an explicit month-by-month payoff ledger.

use log::debug;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::amortization::{PayoffHorizon, monthly_rate};
use crate::liability::{Liability, MinimumPaymentPolicy};
use crate::strategy::{DebtAnalysis, PaymentStrategy, analyze_debt, order_debts};

/// Whether a month-one budget entry carries the extra budget or only the
/// debt's own minimum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AllocationKind {
    Minimum,
    Extra,
}

/// One debt's share of the first month's budget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetAllocation {
    pub debt_id: String,
    pub amount: Decimal,
    pub kind: AllocationKind,
}

/// One month of the simulated payoff, for charting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentScheduleEntry {
    pub month: u32,
    /// Cumulative amount paid across all debts through this month.
    pub total_paid: Decimal,
    /// Combined balance remaining after this month's payments.
    pub remaining_debt: Decimal,
}

/// The presentation-ready payoff plan for one strategy over one debt
/// snapshot. Built fresh on every call and never mutated in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebtPaymentPlan {
    pub strategy: PaymentStrategy,
    /// Analyzed debts in payoff order, priorities assigned.
    pub debts: Vec<DebtAnalysis>,
    pub total_months_to_pay_off: PayoffHorizon,
    /// Interest avoided versus paying every minimum in isolation forever.
    /// Zero when either side of that comparison never converges.
    pub total_interest_saved: Decimal,
    /// The priority-1 liability, the one to pour extra payments into now.
    pub next_debt_to_focus: Option<Liability>,
    pub monthly_budget_distribution: Vec<BudgetAllocation>,
    /// Month-by-month ledger of the simulated payoff.
    pub payment_schedule: Vec<PaymentScheduleEntry>,
}

/// Longest payoff the ledger will walk month by month. A plan stretching
/// past a century is reported as never rather than simulated to the end.
const MAX_LEDGER_MONTHS: u32 = 1200;

struct LedgerOutcome {
    months: PayoffHorizon,
    interest_accrued: Decimal,
    schedule: Vec<PaymentScheduleEntry>,
}

/// Builds a complete payoff plan for the given debts and strategy.
///
/// Fully-paid debts (zero or negative balance) are excluded before
/// planning. The remaining debts are analyzed in isolation, ordered per the
/// strategy, and then run through an explicit month-by-month ledger in
/// which every active debt receives its own minimum, the extra budget (plus
/// every retired debt's minimum) attacks debts in priority order, and the
/// final payment to any debt is capped at its remaining balance with the
/// surplus redirected to the next debt the same month.
///
/// A plan containing a debt that can never be retired, even after all
/// rollovers, reports `PayoffHorizon::Never` as its total horizon.
///
/// # Arguments
///
/// * `liabilities` - The current debt snapshot; the caller owns deduplication.
/// * `strategy` - Ordering rule plus the monthly budget beyond minimums.
/// * `policy` - Minimum-payment fallback for debts without a contractual payment.
///
/// # Errors
///
/// Returns an error if the strategy's extra budget is negative, or if any
/// liability carries a negative interest rate.
pub fn build_payment_plan(
    liabilities: &[Liability],
    strategy: &PaymentStrategy,
    policy: &MinimumPaymentPolicy,
) -> Result<DebtPaymentPlan, anyhow::Error> {
    if strategy.monthly_extra_budget < dec!(0) {
        return Err(anyhow::anyhow!("Monthly extra budget cannot be negative."));
    }
    if let Some(bad) = liabilities.iter().find(|l| l.annual_rate() < dec!(0)) {
        return Err(anyhow::anyhow!(
            "Interest rate cannot be negative on liability '{}'.",
            bad.id
        ));
    }

    let extra = strategy.monthly_extra_budget;
    let active: Vec<&Liability> = liabilities.iter().filter(|l| l.amount > dec!(0)).collect();
    debug!(
        "building payoff plan: {} active debts, strategy {}, extra budget {}",
        active.len(),
        strategy.name,
        extra
    );

    let analyses: Vec<DebtAnalysis> = active
        .iter()
        .map(|l| analyze_debt(l, dec!(0), policy))
        .collect();

    // Baseline: each debt paid down alone at its minimum, measured with the
    // same ledger as the strategy side so the two interest figures share the
    // capped-final-payment convention. A zero-extra single-debt plan is its
    // own baseline and saves exactly nothing.
    let mut baseline_converges = true;
    let mut baseline_interest = dec!(0);
    for analysis in &analyses {
        let solo = run_ledger(std::slice::from_ref(analysis), dec!(0));
        if solo.months.is_never() {
            baseline_converges = false;
            break;
        }
        baseline_interest += solo.interest_accrued;
    }

    let mut ordered = order_debts(analyses, &strategy.kind);

    // The priority-1 debt is the one the extra budget attacks from month one.
    if let Some(first) = ordered.first_mut() {
        let mut focused = analyze_debt(&first.liability, extra, policy);
        focused.priority = 1;
        *first = focused;
    }

    let ledger = run_ledger(&ordered, extra);

    let total_interest_saved = if baseline_converges && !ledger.months.is_never() {
        (baseline_interest - ledger.interest_accrued).max(dec!(0)).round_dp(2)
    } else {
        dec!(0)
    };

    let monthly_budget_distribution = ordered
        .iter()
        .map(|debt| {
            let receives_extra = debt.priority == 1 && extra > dec!(0);
            BudgetAllocation {
                debt_id: debt.liability.id.clone(),
                amount: if debt.priority == 1 {
                    debt.minimum_payment + extra
                } else {
                    debt.minimum_payment
                },
                kind: if receives_extra {
                    AllocationKind::Extra
                } else {
                    AllocationKind::Minimum
                },
            }
        })
        .collect();

    debug!(
        "payoff plan complete: horizon {:?}, interest saved {}",
        ledger.months, total_interest_saved
    );

    Ok(DebtPaymentPlan {
        strategy: strategy.clone(),
        next_debt_to_focus: ordered.first().map(|d| d.liability.clone()),
        debts: ordered,
        total_months_to_pay_off: ledger.months,
        total_interest_saved,
        monthly_budget_distribution,
        payment_schedule: ledger.schedule,
    })
}

/// Runs the month-by-month payoff ledger over ordered debts.
///
/// The total monthly outlay is constant: the extra budget plus every debt's
/// minimum, with retired debts' minimums staying in the pool. Because the
/// outlay never shrinks, a month in which the combined balance fails to
/// strictly decrease can never be followed by a decreasing one, so the
/// ledger stops there and reports `Never`. Payoffs past
/// [`MAX_LEDGER_MONTHS`] are cut off the same way, keeping the walk bounded
/// for extreme but valid inputs.
fn run_ledger(ordered: &[DebtAnalysis], extra_budget: Decimal) -> LedgerOutcome {
    let mut balances: Vec<Decimal> = ordered.iter().map(|d| d.liability.amount).collect();
    let rates: Vec<Decimal> = ordered
        .iter()
        .map(|d| monthly_rate(d.liability.annual_rate()))
        .collect();
    let minimums: Vec<Decimal> = ordered.iter().map(|d| d.minimum_payment).collect();
    let total_outlay = extra_budget + minimums.iter().copied().sum::<Decimal>();

    let mut month = 0u32;
    let mut cumulative_paid = dec!(0);
    let mut interest_accrued = dec!(0);
    let mut schedule = Vec::new();

    while balances.iter().any(|b| *b > dec!(0)) {
        if month == MAX_LEDGER_MONTHS {
            return LedgerOutcome {
                months: PayoffHorizon::Never,
                interest_accrued,
                schedule,
            };
        }
        month += 1;
        let before: Decimal = balances.iter().copied().sum();

        for (balance, rate) in balances.iter_mut().zip(&rates) {
            if *balance > dec!(0) {
                let accrual = *balance * *rate;
                *balance += accrual;
                interest_accrued += accrual;
            }
        }

        let mut budget = total_outlay;

        // Every active debt gets its own minimum, capped at payoff.
        for (balance, minimum) in balances.iter_mut().zip(&minimums) {
            if *balance > dec!(0) {
                let payment = (*minimum).min(*balance);
                *balance -= payment;
                budget -= payment;
                cumulative_paid += payment;
            }
        }

        // Whatever is left attacks debts in priority order.
        for balance in balances.iter_mut() {
            if budget <= dec!(0) {
                break;
            }
            if *balance > dec!(0) {
                let payment = budget.min(*balance);
                *balance -= payment;
                budget -= payment;
                cumulative_paid += payment;
            }
        }

        let after: Decimal = balances.iter().copied().sum();
        schedule.push(PaymentScheduleEntry {
            month,
            total_paid: cumulative_paid.round_dp(2),
            remaining_debt: after.round_dp(2),
        });

        if after >= before {
            return LedgerOutcome {
                months: PayoffHorizon::Never,
                interest_accrued,
                schedule,
            };
        }
    }

    LedgerOutcome {
        months: PayoffHorizon::Months(month),
        interest_accrued,
        schedule,
    }
}

//! Fixed-payment amortization math for a single balance/payment/rate triple.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, MathematicalOps};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// How long a debt takes to reach zero under fixed monthly payments.
///
/// `Never` means the payment does not exceed the interest accruing each
/// month, so the balance can never be retired under those terms. The derived
/// `Ord` places `Never` above every finite horizon, so `max`-style
/// aggregation over several debts propagates it instead of losing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayoffHorizon {
    Months(u32),
    Never,
}

impl PayoffHorizon {
    /// The finite number of months, if there is one.
    pub fn months(&self) -> Option<u32> {
        match self {
            PayoffHorizon::Months(m) => Some(*m),
            PayoffHorizon::Never => None,
        }
    }

    pub fn is_never(&self) -> bool {
        matches!(self, PayoffHorizon::Never)
    }
}

/// Converts a nominal annual percentage rate to the monthly periodic rate.
///
/// A rate like 18 (meaning 18% per year) becomes 0.015 per month. This is
/// the nominal-rate convention (divide by twelve), not effective compounding.
pub fn monthly_rate(annual_rate_percent: Decimal) -> Decimal {
    annual_rate_percent / dec!(100) / dec!(12)
}

/// Calculates how many months of fixed payments retire a balance.
///
/// A partial final month counts as a full month, so the result always rounds
/// up. A zero or negative balance is already paid and yields `Months(0)`.
///
/// For a positive rate the closed-form amortization period formula is used:
///
/// `months = ceil( ln(payment / (payment - balance*r)) / ln(1 + r) )`
///
/// where `r` is the monthly periodic rate. When the payment does not exceed
/// the monthly interest accrual (or is not positive at all), the debt can
/// never be paid off and `PayoffHorizon::Never` is returned instead of an
/// error.
///
/// # Arguments
///
/// * `balance` - The current outstanding balance.
/// * `monthly_payment` - The fixed amount paid every month.
/// * `annual_rate_percent` - Nominal annual rate as a percentage (e.g., 18 for 18%).
pub fn months_to_pay_off(
    balance: Decimal,
    monthly_payment: Decimal,
    annual_rate_percent: Decimal,
) -> PayoffHorizon {
    if balance <= dec!(0) {
        return PayoffHorizon::Months(0);
    }
    if monthly_payment <= dec!(0) {
        return PayoffHorizon::Never;
    }

    let rate = monthly_rate(annual_rate_percent);
    if rate <= dec!(0) {
        return ceil_to_months(balance / monthly_payment);
    }

    let monthly_accrual = balance * rate;
    if monthly_payment <= monthly_accrual {
        return PayoffHorizon::Never;
    }

    let numerator = (monthly_payment / (monthly_payment - monthly_accrual)).ln();
    let denominator = (dec!(1) + rate).ln();
    ceil_to_months(numerator / denominator)
}

/// Calculates the total interest paid over the life of the debt.
///
/// Derived as `payment * months - balance` and floored at zero, which
/// absorbs the rounding slack of the final partial installment. A debt that
/// never pays off reports zero interest; callers must consult
/// [`months_to_pay_off`] to distinguish that case.
pub fn total_interest_paid(
    balance: Decimal,
    monthly_payment: Decimal,
    annual_rate_percent: Decimal,
) -> Decimal {
    match months_to_pay_off(balance, monthly_payment, annual_rate_percent) {
        PayoffHorizon::Months(months) => {
            let paid = monthly_payment * Decimal::from(months);
            (paid - balance).max(dec!(0))
        }
        PayoffHorizon::Never => dec!(0),
    }
}

fn ceil_to_months(value: Decimal) -> PayoffHorizon {
    match value.ceil().to_u32() {
        Some(months) => PayoffHorizon::Months(months),
        // Out of range for u32 is indistinguishable from never in practice.
        None => PayoffHorizon::Never,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[rstest]
    #[case(dec!(1000), dec!(25), 40)]
    #[case(dec!(1000), dec!(1000), 1)]
    #[case(dec!(1000), dec!(999), 2)]
    #[case(dec!(100), dec!(30), 4)]
    fn test_zero_interest_is_exact_ceiling(
        #[case] balance: Decimal,
        #[case] payment: Decimal,
        #[case] expected: u32,
    ) {
        assert_eq!(
            months_to_pay_off(balance, payment, dec!(0)),
            PayoffHorizon::Months(expected)
        );
    }

    #[test]
    fn test_zero_balance_is_already_paid() {
        assert_eq!(
            months_to_pay_off(dec!(0), dec!(100), dec!(18)),
            PayoffHorizon::Months(0)
        );
        assert_eq!(total_interest_paid(dec!(0), dec!(100), dec!(18)), dec!(0));
    }

    #[test]
    fn test_zero_payment_never_pays_off() {
        assert_eq!(
            months_to_pay_off(dec!(500), dec!(0), dec!(0)),
            PayoffHorizon::Never
        );
    }

    #[test]
    fn test_closed_form_convergent_scenario() {
        // 5000 at 18%/yr paying 150/mo: monthly rate 0.015, accrual 75,
        // so ln(2)/ln(1.015) = 46.55... which rounds up to 47.
        let months = months_to_pay_off(dec!(5000), dec!(150), dec!(18));
        assert_eq!(months, PayoffHorizon::Months(47));

        let interest = total_interest_paid(dec!(5000), dec!(150), dec!(18));
        assert_eq!(interest, dec!(2050));
    }

    #[test]
    fn test_non_convergent_payment_returns_never() {
        // 1000 at 24%/yr accrues 20/mo, which payment 15 never covers.
        assert_eq!(
            months_to_pay_off(dec!(1000), dec!(15), dec!(24)),
            PayoffHorizon::Never
        );
        assert_eq!(total_interest_paid(dec!(1000), dec!(15), dec!(24)), dec!(0));
    }

    #[test]
    fn test_payment_equal_to_accrual_is_never() {
        // Exactly covering interest keeps the balance flat forever.
        assert_eq!(
            months_to_pay_off(dec!(1000), dec!(20), dec!(24)),
            PayoffHorizon::Never
        );
    }

    #[rstest]
    #[case(dec!(150), dec!(200))]
    #[case(dec!(150), dec!(300))]
    #[case(dec!(76), dec!(150))]
    fn test_bigger_payment_never_takes_longer(
        #[case] smaller: Decimal,
        #[case] larger: Decimal,
    ) {
        let slow = months_to_pay_off(dec!(5000), smaller, dec!(18));
        let fast = months_to_pay_off(dec!(5000), larger, dec!(18));
        assert!(fast <= slow, "{fast:?} should not exceed {slow:?}");
    }

    #[rstest]
    #[case(dec!(0), dec!(12))]
    #[case(dec!(12), dec!(18))]
    #[case(dec!(18), dec!(24))]
    fn test_higher_rate_never_shortens_payoff(
        #[case] lower: Decimal,
        #[case] higher: Decimal,
    ) {
        let cheap = months_to_pay_off(dec!(5000), dec!(150), lower);
        let dear = months_to_pay_off(dec!(5000), dec!(150), higher);
        assert!(cheap <= dear, "{cheap:?} should not exceed {dear:?}");

        let cheap_interest = total_interest_paid(dec!(5000), dec!(150), lower);
        let dear_interest = total_interest_paid(dec!(5000), dec!(150), higher);
        assert!(cheap_interest <= dear_interest);
    }

    #[test]
    fn test_monthly_rate_is_nominal_division() {
        assert_eq!(monthly_rate(dec!(18)), dec!(0.015));
        assert_eq!(monthly_rate(dec!(24)), dec!(0.02));
        assert_eq!(monthly_rate(dec!(0)), dec!(0));
    }

    #[test]
    fn test_never_orders_above_any_finite_horizon() {
        assert!(PayoffHorizon::Never > PayoffHorizon::Months(u32::MAX));
        assert!(PayoffHorizon::Months(12) < PayoffHorizon::Months(13));
        assert_eq!(
            PayoffHorizon::Months(40).max(PayoffHorizon::Never),
            PayoffHorizon::Never
        );
    }
}

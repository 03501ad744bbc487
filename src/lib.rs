//! `debt_payoff` is a Rust library for planning how to pay off a set of debts.
//!
//! It analyzes each debt (months to payoff and total interest under fixed
//! monthly payments), orders them under a payoff strategy, and simulates the
//! whole payoff month by month with budget rollover:
//! - **Snowball**: smallest balance first, for quick psychological wins.
//! - **Avalanche**: highest interest rate first, minimizing interest paid.
//! - **Custom**: a caller-supplied ordering, respected verbatim.
//!
//! Every function is a pure, deterministic mapping from inputs to outputs:
//! no I/O, no shared state, no caching. Callers invoking it on every UI
//! change are expected to memoize on their side.
//!
//! ## Usage
//!
//! Add `debt_payoff` to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! debt_payoff = "0.3.0"
//! rust_decimal = "1.39.0"
//! rust_decimal_macros = "1.39.0"
//! ```
//!
//! Then build a plan from a snapshot of your debts:
//!
//! ```rust
//! use debt_payoff::{
//!     build_payment_plan, Liability, LiabilityKind, MinimumPaymentPolicy, PaymentStrategy,
//! };
//! use rust_decimal_macros::dec;
//!
//! fn main() {
//!     let debts = vec![
//!         Liability {
//!             id: "card".to_string(),
//!             name: "Credit card".to_string(),
//!             amount: dec!(5000),
//!             original_amount: Some(dec!(6000)),
//!             interest_rate: Some(dec!(18)),
//!             monthly_payment: Some(dec!(150)),
//!             kind: LiabilityKind::CreditCard,
//!         },
//!         Liability {
//!             id: "loan".to_string(),
//!             name: "Personal loan".to_string(),
//!             amount: dec!(1000),
//!             original_amount: None,
//!             interest_rate: None,
//!             monthly_payment: None,
//!             kind: LiabilityKind::Loan,
//!         },
//!     ];
//!
//!     let strategy = PaymentStrategy::snowball(dec!(200));
//!     let policy = MinimumPaymentPolicy::default();
//!
//!     match build_payment_plan(&debts, &strategy, &policy) {
//!         Ok(plan) => {
//!             println!("Debt free in: {:?}", plan.total_months_to_pay_off);
//!             println!("Interest saved: {}", plan.total_interest_saved);
//!             if let Some(focus) = plan.next_debt_to_focus {
//!                 println!("Attack this one first: {}", focus.name);
//!             }
//!         }
//!         Err(e) => {
//!             eprintln!("Error building payment plan: {}", e);
//!         }
//!     }
//! }
//! ```

pub mod advice;
pub mod amortization;
pub mod liability;
pub mod plan;
pub mod strategy;

pub use advice::{
    CurrencyFormat, DebtRecommendation, RecommendationReason, motivational_message,
    recommend_next_debt,
};
pub use amortization::{PayoffHorizon, monthly_rate, months_to_pay_off, total_interest_paid};
pub use liability::{
    DebtSummary, Liability, LiabilityKind, MinimumPaymentPolicy, calculate_debt_summary,
    minimum_payment,
};
pub use plan::{
    AllocationKind, BudgetAllocation, DebtPaymentPlan, PaymentScheduleEntry, build_payment_plan,
};
pub use strategy::{DebtAnalysis, PaymentStrategy, StrategyKind, analyze_debt, order_debts};

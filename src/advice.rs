//! Rule-based suggestions and progress messages derived from the plan math.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::liability::Liability;
use crate::strategy::StrategyKind;

/// Smallest-debt share of the total below which it counts as a quick win.
const QUICK_WIN_FRACTION: Decimal = dec!(0.2);
/// Annual rate above which a debt is flagged as expensive.
const HIGH_RATE_THRESHOLD: Decimal = dec!(10);

/// Why a particular debt was recommended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationReason {
    /// Small enough relative to the total to knock out quickly.
    QuickWin,
    /// Carries a high interest rate; paying it first saves money.
    CostSavings,
    /// Nothing stands out, so start with the smallest balance.
    SmallestFirst,
}

/// A suggestion of which debt to prioritize right now.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebtRecommendation {
    pub debt_id: String,
    pub reason: RecommendationReason,
    pub message: String,
}

/// Suggests which debt to pay down first.
///
/// This is a heuristic, not an optimization: if the smallest active balance
/// is under 20% of the aggregate it is a quick win; otherwise the highest
/// rate above 10%/yr wins on cost; otherwise the smallest balance. Returns
/// `None` when no debt carries a positive balance.
pub fn recommend_next_debt(liabilities: &[Liability]) -> Option<DebtRecommendation> {
    let active: Vec<&Liability> = liabilities.iter().filter(|l| l.amount > dec!(0)).collect();
    let total: Decimal = active.iter().map(|l| l.amount).sum();
    let smallest = active.iter().copied().reduce(|smallest, candidate| {
        if candidate.amount < smallest.amount {
            candidate
        } else {
            smallest
        }
    })?;

    if smallest.amount < total * QUICK_WIN_FRACTION {
        return Some(DebtRecommendation {
            debt_id: smallest.id.clone(),
            reason: RecommendationReason::QuickWin,
            message: format!(
                "Knock out '{}' first: at {} it is a small share of your total debt.",
                smallest.name,
                smallest.amount.round_dp(2)
            ),
        });
    }

    let most_expensive = active
        .iter()
        .copied()
        .filter(|l| l.annual_rate() > HIGH_RATE_THRESHOLD)
        .reduce(|highest, candidate| {
            if candidate.annual_rate() > highest.annual_rate() {
                candidate
            } else {
                highest
            }
        });
    if let Some(expensive) = most_expensive {
        return Some(DebtRecommendation {
            debt_id: expensive.id.clone(),
            reason: RecommendationReason::CostSavings,
            message: format!(
                "Focus on '{}': its {}% rate is costing you the most each month.",
                expensive.name,
                expensive.annual_rate().round_dp(2)
            ),
        });
    }

    Some(DebtRecommendation {
        debt_id: smallest.id.clone(),
        reason: RecommendationReason::SmallestFirst,
        message: format!(
            "Start with '{}', your smallest balance, and build momentum.",
            smallest.name
        ),
    })
}

const SNOWBALL_MESSAGES: [&str; 4] = [
    "Every payment counts. Your first snowball is rolling!",
    "Small wins are stacking up. Keep the snowball moving!",
    "More than halfway there. The snowball is unstoppable now!",
    "The finish line is in sight. One last push!",
];

const AVALANCHE_MESSAGES: [&str; 4] = [
    "You are attacking the expensive debt first. Smart move!",
    "Interest charges are shrinking every month. Stay on it!",
    "Over halfway: the costly debt is losing its grip!",
    "Almost debt-free, and you paid the least interest possible!",
];

const CUSTOM_MESSAGES: [&str; 4] = [
    "Your plan, your pace. The first payments are in!",
    "Steady progress on your own terms. Keep going!",
    "Past the halfway mark on the plan you designed!",
    "Your plan worked. The last debts are falling!",
];

/// Maps a payoff progress fraction in [0, 1] to a canned message tier.
///
/// Progress is clamped into range; the tier is `floor(progress * 4)` clamped
/// to the last message, so 100% progress still lands on a valid tier.
pub fn motivational_message(kind: &StrategyKind, progress: Decimal) -> &'static str {
    let messages = match kind {
        StrategyKind::Snowball => &SNOWBALL_MESSAGES,
        StrategyKind::Avalanche => &AVALANCHE_MESSAGES,
        StrategyKind::Custom { .. } => &CUSTOM_MESSAGES,
    };
    let clamped = progress.clamp(dec!(0), dec!(1));
    let tier = (clamped * dec!(4))
        .floor()
        .to_usize()
        .unwrap_or(0)
        .min(messages.len() - 1);
    messages[tier]
}

/// Explicit currency display configuration.
///
/// Formatting always takes one of these; there is no module-level default
/// currency to mutate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrencyFormat {
    pub symbol: String,
    pub decimal_places: u32,
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        CurrencyFormat {
            symbol: "$".to_string(),
            decimal_places: 2,
        }
    }
}

impl CurrencyFormat {
    /// Renders an amount with this currency's symbol and precision.
    pub fn format_amount(&self, amount: Decimal) -> String {
        let places = self.decimal_places as usize;
        format!("{}{:.*}", self.symbol, places, amount.round_dp(self.decimal_places))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::liability::sample_liability as liability;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[test]
    fn test_no_active_debts_means_no_recommendation() {
        assert_eq!(recommend_next_debt(&[]), None);
        let paid = vec![liability("done", dec!(0), Some(dec!(20)))];
        assert_eq!(recommend_next_debt(&paid), None);
    }

    #[test]
    fn test_small_debt_is_a_quick_win() {
        let debts = vec![
            liability("big", dec!(9000), Some(dec!(6))),
            liability("tiny", dec!(500), Some(dec!(3))),
        ];
        let rec = recommend_next_debt(&debts).unwrap();
        assert_eq!(rec.debt_id, "tiny");
        assert_eq!(rec.reason, RecommendationReason::QuickWin);
    }

    #[test]
    fn test_high_rate_wins_without_quick_win() {
        // Balances too even for a quick win; the 22% card is the target.
        let debts = vec![
            liability("a", dec!(4000), Some(dec!(22))),
            liability("b", dec!(5000), Some(dec!(12))),
            liability("c", dec!(4500), Some(dec!(4))),
        ];
        let rec = recommend_next_debt(&debts).unwrap();
        assert_eq!(rec.debt_id, "a");
        assert_eq!(rec.reason, RecommendationReason::CostSavings);
    }

    #[test]
    fn test_falls_back_to_smallest_balance() {
        let debts = vec![
            liability("a", dec!(4000), Some(dec!(5))),
            liability("b", dec!(3500), Some(dec!(6))),
        ];
        let rec = recommend_next_debt(&debts).unwrap();
        assert_eq!(rec.debt_id, "b");
        assert_eq!(rec.reason, RecommendationReason::SmallestFirst);
    }

    #[rstest]
    #[case(dec!(0), 0)]
    #[case(dec!(0.1), 0)]
    #[case(dec!(0.25), 1)]
    #[case(dec!(0.5), 2)]
    #[case(dec!(0.75), 3)]
    #[case(dec!(0.99), 3)]
    #[case(dec!(1), 3)]
    fn test_message_tiers(#[case] progress: Decimal, #[case] tier: usize) {
        let message = motivational_message(&StrategyKind::Snowball, progress);
        assert_eq!(message, SNOWBALL_MESSAGES[tier]);
    }

    #[test]
    fn test_progress_outside_range_is_clamped() {
        assert_eq!(
            motivational_message(&StrategyKind::Avalanche, dec!(-2)),
            AVALANCHE_MESSAGES[0]
        );
        assert_eq!(
            motivational_message(&StrategyKind::Avalanche, dec!(7)),
            AVALANCHE_MESSAGES[3]
        );
    }

    #[test]
    fn test_each_strategy_has_its_own_voice() {
        let custom = StrategyKind::Custom { order: vec![] };
        let snowball = motivational_message(&StrategyKind::Snowball, dec!(0.5));
        let avalanche = motivational_message(&StrategyKind::Avalanche, dec!(0.5));
        let own = motivational_message(&custom, dec!(0.5));
        assert_ne!(snowball, avalanche);
        assert_ne!(avalanche, own);
    }

    #[test]
    fn test_currency_formatting_is_explicit() {
        let dollars = CurrencyFormat::default();
        assert_eq!(dollars.format_amount(dec!(1234.567)), "$1234.57");

        let reais = CurrencyFormat {
            symbol: "R$".to_string(),
            decimal_places: 2,
        };
        assert_eq!(reais.format_amount(dec!(99.9)), "R$99.90");
    }
}

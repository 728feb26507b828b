use serde::{Deserialize, Serialize};

/// Workforce headcount shares per age bracket, in percent. The three shares
/// are expected to sum to 100; deviations are surfaced as a warning, never
/// rejected.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AgeBracketSplit {
    pub under_30: f64,
    pub between_30_50: f64,
    pub over_50: f64,
}

/// The two balance formulas shipped by successive editions of the scorecard.
/// They disagree on purpose and are therefore selected explicitly rather
/// than merged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgeBalanceFormula {
    /// Mean absolute deviation from an ideal 33.33% per bracket, rescaled to
    /// 0-100. Not clamped: an extreme skew can push the score below zero,
    /// which still grades as E.
    DeviationFromIdeal,
    /// Population standard deviation of the three shares, scored as
    /// `100 - 2 * stddev` and floored at zero.
    StandardDeviation,
}

const IDEAL_SHARE: f64 = 33.33;
const MAX_MEAN_DEVIATION: f64 = 66.67;
const SUM_TOLERANCE: f64 = 0.01;

impl AgeBracketSplit {
    pub fn new(under_30: f64, between_30_50: f64, over_50: f64) -> Self {
        Self {
            under_30,
            between_30_50,
            over_50,
        }
    }

    fn shares(&self) -> [f64; 3] {
        [self.under_30, self.between_30_50, self.over_50]
    }

    pub fn total(&self) -> f64 {
        self.under_30 + self.between_30_50 + self.over_50
    }

    /// Soft validation: a warning message when the shares stray from 100%.
    pub fn sum_warning(&self) -> Option<String> {
        let total = self.total();
        if (total - 100.0).abs() > SUM_TOLERANCE {
            Some(format!(
                "age bracket percentages should sum to 100% (currently {total:.2}%)"
            ))
        } else {
            None
        }
    }

    /// Derives the 0-100 balance score for the selected formula.
    pub fn balance_score(&self, formula: AgeBalanceFormula) -> f64 {
        match formula {
            AgeBalanceFormula::DeviationFromIdeal => {
                let mean_deviation = self
                    .shares()
                    .iter()
                    .map(|share| (share - IDEAL_SHARE).abs())
                    .sum::<f64>()
                    / 3.0;
                (1.0 - mean_deviation / MAX_MEAN_DEVIATION) * 100.0
            }
            AgeBalanceFormula::StandardDeviation => {
                let shares = self.shares();
                let mean = shares.iter().sum::<f64>() / 3.0;
                let variance = shares
                    .iter()
                    .map(|share| (share - mean).powi(2))
                    .sum::<f64>()
                    / 3.0;
                (100.0 - 2.0 * variance.sqrt()).max(0.0)
            }
        }
    }
}

impl AgeBalanceFormula {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DeviationFromIdeal => "deviation_from_ideal",
            Self::StandardDeviation => "standard_deviation",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "deviation_from_ideal" | "deviation" => Some(Self::DeviationFromIdeal),
            "standard_deviation" | "stddev" => Some(Self::StandardDeviation),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(left: f64, right: f64) -> bool {
        (left - right).abs() < 1e-6
    }

    #[test]
    fn perfectly_even_split_scores_near_one_hundred() {
        let split = AgeBracketSplit::new(33.33, 33.33, 33.33);
        assert!(close(
            split.balance_score(AgeBalanceFormula::DeviationFromIdeal),
            100.0
        ));
        assert!(close(
            split.balance_score(AgeBalanceFormula::StandardDeviation),
            100.0
        ));
    }

    #[test]
    fn deviation_formula_matches_hand_computed_value() {
        // Deviations 18.33, 11.67, 6.67 -> mean 12.2233 -> score 81.666.
        let split = AgeBracketSplit::new(15.0, 45.0, 40.0);
        let score = split.balance_score(AgeBalanceFormula::DeviationFromIdeal);
        assert!((score - 81.666).abs() < 0.01, "got {score}");
    }

    #[test]
    fn deviation_formula_can_go_negative_on_extreme_skew() {
        let split = AgeBracketSplit::new(100.0, 0.0, 0.0);
        let score = split.balance_score(AgeBalanceFormula::DeviationFromIdeal);
        assert!(score > 33.0 && score < 34.0, "got {score}");

        // A degenerate split far outside percentages drives it below zero.
        let skew = AgeBracketSplit::new(300.0, 0.0, 0.0);
        assert!(skew.balance_score(AgeBalanceFormula::DeviationFromIdeal) < 0.0);
    }

    #[test]
    fn stddev_formula_is_floored_at_zero() {
        let split = AgeBracketSplit::new(100.0, 0.0, 0.0);
        assert!(close(
            split.balance_score(AgeBalanceFormula::StandardDeviation),
            5.719_095_841_793_653
        ));

        let skew = AgeBracketSplit::new(300.0, 0.0, 0.0);
        assert!(close(
            skew.balance_score(AgeBalanceFormula::StandardDeviation),
            0.0
        ));
    }

    #[test]
    fn sum_warning_fires_outside_tolerance() {
        assert!(AgeBracketSplit::new(15.0, 45.0, 40.0).sum_warning().is_none());
        assert!(AgeBracketSplit::new(15.0, 45.0, 40.005)
            .sum_warning()
            .is_none());

        let warning = AgeBracketSplit::new(20.0, 45.0, 35.5)
            .sum_warning()
            .expect("sum is off by half a point");
        assert!(warning.contains("100.50"));
    }

    #[test]
    fn formula_names_round_trip() {
        for formula in [
            AgeBalanceFormula::DeviationFromIdeal,
            AgeBalanceFormula::StandardDeviation,
        ] {
            assert_eq!(AgeBalanceFormula::parse(formula.as_str()), Some(formula));
        }
        assert_eq!(AgeBalanceFormula::parse("nope"), None);
    }
}

mod insights;
pub mod views;

use super::engine::ScorecardOutcome;
use super::grade::Grade;
use super::profile::RatingProfile;
use chrono::NaiveDate;
use views::{
    AgeBalanceView, GradingGridEntry, GridCriterion, IndicatorRatingView, ScorecardReport,
};

impl ScorecardReport {
    /// Assembles the presentation view of an outcome. Only the evaluation
    /// date is external input; everything else is derived from the outcome,
    /// so building the report twice for the same outcome gives identical
    /// results.
    pub fn build(outcome: &ScorecardOutcome, evaluated_on: NaiveDate) -> Self {
        let ratings = outcome
            .ratings
            .iter()
            .map(|rating| IndicatorRatingView {
                key: rating.key.as_str(),
                label: rating.label,
                value: rating.value,
                grade: rating.grade,
                grade_label: rating.grade.label(),
                score: rating.score,
                band: rating.band(),
                band_label: rating.band().label(),
            })
            .collect();

        let warnings = outcome
            .age_balance
            .warning
            .iter()
            .cloned()
            .collect::<Vec<_>>();

        Self {
            company_name: outcome.company_name.clone(),
            year: outcome.year,
            profile: outcome.profile,
            evaluated_on,
            ratings,
            age_balance: AgeBalanceView {
                brackets: outcome.age_balance.brackets,
                formula: outcome.age_balance.formula,
                score: outcome.age_balance.score,
                warning: outcome.age_balance.warning.clone(),
            },
            composite_score: outcome.composite_score,
            overall_grade: outcome.overall_grade,
            overall_grade_label: outcome.overall_grade.label(),
            overall_grade_description: outcome.overall_grade.description(),
            insights: insights::generate_insights(outcome),
            warnings,
            grading_grid: None,
        }
    }

    /// Attaches the per-indicator grading grid for display surfaces that
    /// explain the boundaries alongside the result.
    pub fn with_grading_grid(mut self, profile: &RatingProfile) -> Self {
        self.grading_grid = Some(grading_grid(profile));
        self
    }
}

pub fn grading_grid(profile: &RatingProfile) -> Vec<GradingGridEntry> {
    profile
        .indicators
        .iter()
        .map(|indicator| GradingGridEntry {
            key: indicator.key.as_str(),
            label: indicator.key.label(),
            criteria: Grade::all()
                .into_iter()
                .map(|grade| GridCriterion {
                    grade,
                    criterion: indicator.scale.criterion(grade),
                })
                .collect(),
        })
        .collect()
}

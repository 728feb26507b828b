use crate::scorecard::age::{AgeBalanceFormula, AgeBracketSplit};
use crate::scorecard::grade::{Grade, PerformanceBand};
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct IndicatorRatingView {
    pub key: &'static str,
    pub label: &'static str,
    pub value: f64,
    pub grade: Grade,
    pub grade_label: &'static str,
    pub score: u8,
    pub band: PerformanceBand,
    pub band_label: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct AgeBalanceView {
    pub brackets: AgeBracketSplit,
    pub formula: AgeBalanceFormula,
    pub score: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

/// One indicator's grading grid: the boundary text shown next to each letter.
#[derive(Debug, Clone, Serialize)]
pub struct GradingGridEntry {
    pub key: &'static str,
    pub label: &'static str,
    pub criteria: Vec<GridCriterion>,
}

#[derive(Debug, Clone, Serialize)]
pub struct GridCriterion {
    pub grade: Grade,
    pub criterion: String,
}

/// Narrative derived from the outcome: classified indicator labels plus
/// recommendation and conclusion text for the report body.
#[derive(Debug, Clone, Serialize)]
pub struct ScorecardInsights {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub strengths: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub areas_to_consolidate: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub priority_improvements: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub recommendations: Vec<String>,
    pub conclusion: String,
}

/// Presentation-ready scorecard handed to rendering and export collaborators.
#[derive(Debug, Clone, Serialize)]
pub struct ScorecardReport {
    pub company_name: String,
    pub year: i32,
    pub profile: &'static str,
    pub evaluated_on: NaiveDate,
    pub ratings: Vec<IndicatorRatingView>,
    pub age_balance: AgeBalanceView,
    pub composite_score: f64,
    pub overall_grade: Grade,
    pub overall_grade_label: &'static str,
    pub overall_grade_description: &'static str,
    pub insights: ScorecardInsights,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grading_grid: Option<Vec<GradingGridEntry>>,
}

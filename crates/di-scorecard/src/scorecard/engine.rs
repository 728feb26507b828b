use super::age::{AgeBalanceFormula, AgeBracketSplit};
use super::grade::{Grade, PerformanceBand};
use super::profile::{IndicatorKey, RatingProfile};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Raw evaluation input as handed over by an ingestion surface (form fields,
/// CSV upload or API payload). Indicator values are percentages keyed by the
/// serialized indicator name; the age split is carried separately because its
/// balance score is derived, not submitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScorecardSubmission {
    pub company_name: String,
    pub year: i32,
    pub indicators: BTreeMap<String, f64>,
    pub age_brackets: AgeBracketSplit,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RatingError {
    #[error("unknown indicator key '{0}'")]
    UnknownIndicator(String),
    #[error("indicator '{0}' is not part of the '{1}' profile")]
    NotInProfile(String, &'static str),
    #[error("missing value for indicator '{0}'")]
    MissingIndicator(&'static str),
    #[error("the age balance score is derived from the bracket split and cannot be submitted directly")]
    DerivedIndicator,
}

/// Grade, score and raw value for a single rated indicator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndicatorRating {
    pub key: IndicatorKey,
    pub label: &'static str,
    pub value: f64,
    pub grade: Grade,
    pub score: u8,
}

impl IndicatorRating {
    pub fn band(&self) -> PerformanceBand {
        self.grade.band()
    }
}

/// How the age-balance indicator value came to be, kept alongside the outcome
/// so reports can explain the derived score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AgeBalanceBreakdown {
    pub brackets: AgeBracketSplit,
    pub formula: AgeBalanceFormula,
    pub score: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

/// Full result of one evaluation run: per-indicator ratings in profile order,
/// the unweighted composite and the overall letter. Constructed fresh per
/// request and never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScorecardOutcome {
    pub company_name: String,
    pub year: i32,
    pub profile: &'static str,
    pub ratings: Vec<IndicatorRating>,
    pub age_balance: AgeBalanceBreakdown,
    pub composite_score: f64,
    pub overall_grade: Grade,
}

impl ScorecardOutcome {
    pub fn with_band(&self, band: PerformanceBand) -> impl Iterator<Item = &IndicatorRating> {
        self.ratings
            .iter()
            .filter(move |rating| rating.band() == band)
    }

    pub fn strengths(&self) -> Vec<&IndicatorRating> {
        self.with_band(PerformanceBand::Strength).collect()
    }

    pub fn to_consolidate(&self) -> Vec<&IndicatorRating> {
        self.with_band(PerformanceBand::Consolidate).collect()
    }

    pub fn priorities(&self) -> Vec<&IndicatorRating> {
        self.with_band(PerformanceBand::Priority).collect()
    }
}

/// Stateless rating engine: one immutable profile plus the age formula to
/// apply. Evaluation is a pure function of the submission.
#[derive(Debug, Clone)]
pub struct RatingEngine {
    profile: RatingProfile,
    age_formula: AgeBalanceFormula,
}

impl RatingEngine {
    pub fn new(profile: RatingProfile, age_formula: AgeBalanceFormula) -> Self {
        Self {
            profile,
            age_formula,
        }
    }

    pub fn profile(&self) -> &RatingProfile {
        &self.profile
    }

    pub fn age_formula(&self) -> AgeBalanceFormula {
        self.age_formula
    }

    /// Rates every profile indicator, averages the numeric scores into the
    /// composite and maps it back to the overall letter. Submission keys that
    /// the profile does not know are rejected rather than silently skipped.
    pub fn evaluate(
        &self,
        submission: &ScorecardSubmission,
    ) -> Result<ScorecardOutcome, RatingError> {
        for key in submission.indicators.keys() {
            let indicator = IndicatorKey::from_key(key)
                .ok_or_else(|| RatingError::UnknownIndicator(key.clone()))?;
            if indicator == IndicatorKey::EquilibreAge {
                return Err(RatingError::DerivedIndicator);
            }
            if !self.profile.contains(indicator) {
                return Err(RatingError::NotInProfile(key.clone(), self.profile.name));
            }
        }

        let balance_score = submission.age_brackets.balance_score(self.age_formula);
        let age_balance = AgeBalanceBreakdown {
            brackets: submission.age_brackets,
            formula: self.age_formula,
            score: balance_score,
            warning: submission.age_brackets.sum_warning(),
        };

        let mut ratings = Vec::with_capacity(self.profile.indicators.len());
        for indicator in &self.profile.indicators {
            let value = if indicator.key == IndicatorKey::EquilibreAge {
                balance_score
            } else {
                *submission
                    .indicators
                    .get(indicator.key.as_str())
                    .ok_or(RatingError::MissingIndicator(indicator.key.as_str()))?
            };

            let grade = indicator.scale.grade(value);
            ratings.push(IndicatorRating {
                key: indicator.key,
                label: indicator.key.label(),
                value,
                grade,
                score: grade.score(),
            });
        }

        let composite_score = ratings
            .iter()
            .map(|rating| f64::from(rating.score))
            .sum::<f64>()
            / ratings.len() as f64;
        let overall_grade = Grade::from_score(composite_score);

        Ok(ScorecardOutcome {
            company_name: submission.company_name.clone(),
            year: submission.year,
            profile: self.profile.name,
            ratings,
            age_balance,
            composite_score,
            overall_grade,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission(values: &[(&str, f64)]) -> ScorecardSubmission {
        ScorecardSubmission {
            company_name: "Acme Energy".to_string(),
            year: 2022,
            indicators: values
                .iter()
                .map(|(key, value)| (key.to_string(), *value))
                .collect(),
            age_brackets: AgeBracketSplit::new(33.33, 33.33, 33.33),
        }
    }

    fn core_values() -> Vec<(&'static str, f64)> {
        vec![
            ("taux_feminisation", 30.0),
            ("taux_femmes_cadres", 28.0),
            ("taux_handicap", 5.5),
            ("ecart_salaire", 5.0),
            ("taux_absenteisme", 4.2),
        ]
    }

    fn engine() -> RatingEngine {
        RatingEngine::new(
            RatingProfile::energy_sector(),
            AgeBalanceFormula::DeviationFromIdeal,
        )
    }

    #[test]
    fn unknown_indicator_key_is_rejected() {
        let mut values = core_values();
        values.push(("taux_inconnu", 10.0));
        let err = engine().evaluate(&submission(&values)).unwrap_err();
        assert_eq!(err, RatingError::UnknownIndicator("taux_inconnu".into()));
    }

    #[test]
    fn indicator_outside_profile_is_rejected() {
        let mut values = core_values();
        values.push(("taux_cdi", 85.0));
        let err = engine().evaluate(&submission(&values)).unwrap_err();
        assert_eq!(
            err,
            RatingError::NotInProfile("taux_cdi".into(), "energy_sector")
        );
    }

    #[test]
    fn submitting_the_derived_age_score_is_rejected() {
        let mut values = core_values();
        values.push(("equilibre_age", 75.0));
        let err = engine().evaluate(&submission(&values)).unwrap_err();
        assert_eq!(err, RatingError::DerivedIndicator);
    }

    #[test]
    fn missing_profile_indicator_is_rejected() {
        let mut values = core_values();
        values.pop();
        let err = engine().evaluate(&submission(&values)).unwrap_err();
        assert_eq!(err, RatingError::MissingIndicator("taux_absenteisme"));
    }

    #[test]
    fn all_average_indicators_yield_an_average_overall_grade() {
        // Every value sits in the C band, so the composite must stay at 3.0.
        let values = vec![
            ("taux_feminisation", 32.0),
            ("taux_femmes_cadres", 22.0),
            ("taux_handicap", 4.5),
            ("ecart_salaire", 8.0),
            ("taux_absenteisme", 4.5),
        ];
        let mut submission = submission(&values);
        // Balance score 65 grades as C as well.
        submission.age_brackets = AgeBracketSplit::new(64.0, 22.0, 14.0);

        let outcome = engine().evaluate(&submission).expect("evaluation succeeds");
        assert!(outcome
            .ratings
            .iter()
            .all(|rating| rating.grade == Grade::C));
        assert!((outcome.composite_score - 3.0).abs() < f64::EPSILON);
        assert_eq!(outcome.overall_grade, Grade::C);
    }

    #[test]
    fn band_helpers_partition_the_ratings() {
        let outcome = engine()
            .evaluate(&submission(&core_values()))
            .expect("evaluation succeeds");

        // Grades C, C, B, B, A, C: three strengths, three to consolidate.
        assert_eq!(outcome.strengths().len(), 3);
        assert_eq!(outcome.to_consolidate().len(), 3);
        assert!(outcome.priorities().is_empty());
        assert_eq!(
            outcome.strengths().len() + outcome.to_consolidate().len() + outcome.priorities().len(),
            outcome.ratings.len()
        );
    }

    #[test]
    fn ratings_keep_profile_presentation_order() {
        let outcome = engine()
            .evaluate(&submission(&core_values()))
            .expect("evaluation succeeds");
        let keys: Vec<_> = outcome.ratings.iter().map(|rating| rating.key).collect();
        assert_eq!(
            keys,
            vec![
                IndicatorKey::TauxFeminisation,
                IndicatorKey::TauxFemmesCadres,
                IndicatorKey::TauxHandicap,
                IndicatorKey::EcartSalaire,
                IndicatorKey::EquilibreAge,
                IndicatorKey::TauxAbsenteisme,
            ]
        );
    }
}

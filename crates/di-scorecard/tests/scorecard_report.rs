use chrono::NaiveDate;
use di_scorecard::scorecard::export;
use di_scorecard::scorecard::{
    AgeBalanceFormula, AgeBracketSplit, Grade, RatingEngine, RatingProfile, ScorecardReport,
    ScorecardSubmission,
};
use std::collections::BTreeMap;

fn weak_submission() -> ScorecardSubmission {
    // Mostly D/E values so the priority narrative has something to say.
    let indicators: BTreeMap<String, f64> = [
        ("taux_feminisation", 18.0),
        ("taux_femmes_cadres", 16.0),
        ("taux_handicap", 2.0),
        ("ecart_salaire", 14.0),
        ("taux_absenteisme", 7.5),
    ]
    .into_iter()
    .map(|(key, value)| (key.to_string(), value))
    .collect();

    ScorecardSubmission {
        company_name: "Acme Energy".to_string(),
        year: 2022,
        indicators,
        age_brackets: AgeBracketSplit::new(5.0, 75.0, 20.0),
    }
}

fn evaluated_on() -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 3, 1).expect("valid date")
}

#[test]
fn weak_results_drive_priority_recommendations_and_conclusion() {
    let engine = RatingEngine::new(
        RatingProfile::energy_sector(),
        AgeBalanceFormula::DeviationFromIdeal,
    );
    let outcome = engine.evaluate(&weak_submission()).expect("evaluates");
    let report = ScorecardReport::build(&outcome, evaluated_on());

    assert!(matches!(report.overall_grade, Grade::D | Grade::E));
    assert_eq!(report.overall_grade_description, "Insufficient performance");
    assert!(report.insights.strengths.is_empty());
    assert!(!report.insights.priority_improvements.is_empty());
    assert_eq!(
        report.insights.recommendations.len(),
        report.insights.priority_improvements.len()
    );
    assert!(report
        .insights
        .recommendations
        .iter()
        .any(|text| text.contains("statutory employment target")));
    assert!(report.insights.conclusion.contains("insufficient"));
}

#[test]
fn report_building_is_idempotent() {
    let engine = RatingEngine::new(
        RatingProfile::energy_sector(),
        AgeBalanceFormula::DeviationFromIdeal,
    );
    let outcome = engine.evaluate(&weak_submission()).expect("evaluates");

    let first = serde_json::to_value(ScorecardReport::build(&outcome, evaluated_on()))
        .expect("report serializes");
    let second = serde_json::to_value(ScorecardReport::build(&outcome, evaluated_on()))
        .expect("report serializes");
    assert_eq!(first, second);
}

#[test]
fn csv_export_of_a_full_report_round_trips_key_fields() {
    let engine = RatingEngine::new(
        RatingProfile::energy_sector(),
        AgeBalanceFormula::DeviationFromIdeal,
    );
    let outcome = engine.evaluate(&weak_submission()).expect("evaluates");
    let report = ScorecardReport::build(&outcome, evaluated_on());
    let csv = export::to_csv_string(&report).expect("export succeeds");

    for rating in &report.ratings {
        assert!(csv.contains(rating.key), "missing row for {}", rating.key);
    }
    assert!(csv.contains("company,Acme Energy"));
    assert!(csv.contains(&format!("overall_grade,{}", report.overall_grade_label)));
}

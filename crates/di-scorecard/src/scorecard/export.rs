use super::report::views::ScorecardReport;
use std::io::Write;

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to write CSV report: {0}")]
    Csv(#[from] csv::Error),
    #[error("exported CSV was not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}

/// Writes the tabular report: one row per indicator followed by summary
/// rows, matching the downloadable report of the interactive dashboards.
pub fn write_csv<W: Write>(report: &ScorecardReport, writer: W) -> Result<(), ExportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer.write_record(["indicator", "label", "value", "grade", "score"])?;
    for rating in &report.ratings {
        let value = format!("{:.2}", rating.value);
        let score = rating.score.to_string();
        csv_writer.write_record([
            rating.key,
            rating.label,
            value.as_str(),
            rating.grade_label,
            score.as_str(),
        ])?;
    }

    csv_writer.write_record(["", "", "", "", ""])?;
    let summary: [(&str, String); 6] = [
        ("company", report.company_name.clone()),
        ("year", report.year.to_string()),
        ("profile", report.profile.to_string()),
        ("composite_score", format!("{:.2}", report.composite_score)),
        ("overall_grade", report.overall_grade_label.to_string()),
        ("evaluated_on", report.evaluated_on.to_string()),
    ];
    for (field, value) in summary {
        csv_writer.write_record([field, value.as_str(), "", "", ""])?;
    }

    csv_writer.flush().map_err(csv::Error::from)?;
    Ok(())
}

pub fn to_csv_string(report: &ScorecardReport) -> Result<String, ExportError> {
    let mut buffer = Vec::new();
    write_csv(report, &mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}

/// File name offered for the download, derived from company and year.
pub fn suggested_file_name(report: &ScorecardReport) -> String {
    let company = report
        .company_name
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '_' })
        .collect::<String>()
        .to_lowercase();
    format!("di_scorecard_{company}_{}.csv", report.year)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scorecard::age::{AgeBalanceFormula, AgeBracketSplit};
    use crate::scorecard::engine::{RatingEngine, ScorecardSubmission};
    use crate::scorecard::profile::RatingProfile;
    use chrono::NaiveDate;

    fn sample_report() -> ScorecardReport {
        let engine = RatingEngine::new(
            RatingProfile::energy_sector(),
            AgeBalanceFormula::DeviationFromIdeal,
        );
        let submission = ScorecardSubmission {
            company_name: "Acme Energy".to_string(),
            year: 2022,
            indicators: [
                ("taux_feminisation", 30.0),
                ("taux_femmes_cadres", 28.0),
                ("taux_handicap", 5.5),
                ("ecart_salaire", 5.0),
                ("taux_absenteisme", 4.2),
            ]
            .into_iter()
            .map(|(key, value)| (key.to_string(), value))
            .collect(),
            age_brackets: AgeBracketSplit::new(15.0, 45.0, 40.0),
        };
        let outcome = engine.evaluate(&submission).expect("sample evaluates");
        let evaluated_on = NaiveDate::from_ymd_opt(2023, 3, 1).expect("valid date");
        ScorecardReport::build(&outcome, evaluated_on)
    }

    #[test]
    fn csv_export_contains_ratings_and_summary() {
        let report = sample_report();
        let csv = to_csv_string(&report).expect("export succeeds");

        assert!(csv.starts_with("indicator,label,value,grade,score\n"));
        assert!(csv.contains("taux_feminisation,Workforce feminisation rate,30.00,C,3"));
        assert!(csv.contains("company,Acme Energy"));
        assert!(csv.contains("overall_grade,B"));
        assert!(csv.contains("evaluated_on,2023-03-01"));
    }

    #[test]
    fn file_name_is_sanitised() {
        let report = sample_report();
        assert_eq!(suggested_file_name(&report), "di_scorecard_acme_energy_2022.csv");
    }
}

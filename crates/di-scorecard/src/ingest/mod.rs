//! Tabular ingestion of the two-column indicator template
//! (`indicator,value` rows keyed by fixed labels). Produces a
//! [`ScorecardSubmission`]; profile membership of the indicators is checked
//! later by the engine, so the same file feeds any rating profile.

mod parser;

use crate::scorecard::{AgeBracketSplit, IndicatorKey, ScorecardSubmission};
use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

const LABEL_COMPANY: &str = "nom_entreprise";
const LABEL_YEAR: &str = "annee";
const LABEL_UNDER_30: &str = "moins_30_ans";
const LABEL_BETWEEN_30_50: &str = "entre_30_50_ans";
const LABEL_OVER_50: &str = "plus_50_ans";

#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("failed to read indicator file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid indicator CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("row label '{label}' has non-numeric value '{raw}'")]
    InvalidNumber { label: String, raw: String },
    #[error("unknown row label '{0}'")]
    UnknownLabel(String),
    #[error("duplicate row label '{0}'")]
    DuplicateLabel(String),
    #[error("missing required row label '{0}'")]
    MissingLabel(&'static str),
    #[error("the 'equilibre_age' score is derived from the age bracket rows and must not appear in the file")]
    DerivedLabel,
}

/// Reads a template file from disk. See [`submission_from_reader`].
pub fn submission_from_path<P: AsRef<Path>>(path: P) -> Result<ScorecardSubmission, IngestError> {
    let file = std::fs::File::open(path)?;
    submission_from_reader(file)
}

/// Builds a submission from two-column CSV data. Required labels are the
/// company name, the year and the three age brackets; every remaining label
/// must be a known indicator key. Unknown and duplicate labels fail fast
/// rather than being dropped.
pub fn submission_from_reader<R: Read>(reader: R) -> Result<ScorecardSubmission, IngestError> {
    let rows = parser::parse_rows(reader)?;

    let mut company_name: Option<String> = None;
    let mut year: Option<i32> = None;
    let mut brackets: BTreeMap<&'static str, f64> = BTreeMap::new();
    let mut indicators: BTreeMap<String, f64> = BTreeMap::new();

    for row in rows {
        match row.label.as_str() {
            LABEL_COMPANY => {
                if company_name.replace(row.raw.clone()).is_some() {
                    return Err(IngestError::DuplicateLabel(row.label.clone()));
                }
            }
            LABEL_YEAR => {
                let value = parser::parse_number(&row.label, &row.raw)?;
                if year.replace(value as i32).is_some() {
                    return Err(IngestError::DuplicateLabel(row.label.clone()));
                }
            }
            LABEL_UNDER_30 => {
                let value = parser::parse_number(&row.label, &row.raw)?;
                if brackets.insert(LABEL_UNDER_30, value).is_some() {
                    return Err(IngestError::DuplicateLabel(row.label.clone()));
                }
            }
            LABEL_BETWEEN_30_50 => {
                let value = parser::parse_number(&row.label, &row.raw)?;
                if brackets.insert(LABEL_BETWEEN_30_50, value).is_some() {
                    return Err(IngestError::DuplicateLabel(row.label.clone()));
                }
            }
            LABEL_OVER_50 => {
                let value = parser::parse_number(&row.label, &row.raw)?;
                if brackets.insert(LABEL_OVER_50, value).is_some() {
                    return Err(IngestError::DuplicateLabel(row.label.clone()));
                }
            }
            label => match IndicatorKey::from_key(label) {
                Some(IndicatorKey::EquilibreAge) => return Err(IngestError::DerivedLabel),
                Some(key) => {
                    let value = parser::parse_number(label, &row.raw)?;
                    if indicators.insert(key.as_str().to_string(), value).is_some() {
                        return Err(IngestError::DuplicateLabel(label.to_string()));
                    }
                }
                None => return Err(IngestError::UnknownLabel(label.to_string())),
            },
        }
    }

    let company_name = company_name.ok_or(IngestError::MissingLabel(LABEL_COMPANY))?;
    let year = year.ok_or(IngestError::MissingLabel(LABEL_YEAR))?;
    let age_brackets = AgeBracketSplit::new(
        bracket(&brackets, LABEL_UNDER_30)?,
        bracket(&brackets, LABEL_BETWEEN_30_50)?,
        bracket(&brackets, LABEL_OVER_50)?,
    );

    Ok(ScorecardSubmission {
        company_name,
        year,
        indicators,
        age_brackets,
    })
}

fn bracket(brackets: &BTreeMap<&'static str, f64>, label: &'static str) -> Result<f64, IngestError> {
    brackets
        .get(label)
        .copied()
        .ok_or(IngestError::MissingLabel(label))
}

/// The blank template offered for download next to the upload form.
pub fn template_csv() -> String {
    let mut template = String::from("indicator,value\n");
    let rows = [
        (LABEL_COMPANY, "Acme Energy"),
        (LABEL_YEAR, "2022"),
        ("taux_feminisation", "30.0"),
        ("taux_femmes_cadres", "28.0"),
        ("ecart_salaire", "5.0"),
        ("taux_handicap", "5.5"),
        (LABEL_UNDER_30, "15.0"),
        (LABEL_BETWEEN_30_50, "45.0"),
        (LABEL_OVER_50, "40.0"),
        ("taux_absenteisme", "4.2"),
    ];
    for (label, value) in rows {
        template.push_str(label);
        template.push(',');
        template.push_str(value);
        template.push('\n');
    }
    template
}

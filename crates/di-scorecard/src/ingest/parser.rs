use super::IngestError;
use serde::{Deserialize, Deserializer};
use std::io::Read;

/// One label/value pair from the two-column template. The header row accepts
/// both the English column names and the French ones shipped with the
/// original template files.
#[derive(Debug, Deserialize)]
struct LabelledRow {
    #[serde(rename = "indicator", alias = "Indicateur")]
    label: String,
    #[serde(rename = "value", alias = "Valeur", deserialize_with = "trimmed")]
    raw: String,
}

#[derive(Debug)]
pub(crate) struct LabelledValue {
    pub(crate) label: String,
    pub(crate) raw: String,
}

pub(crate) fn parse_rows<R: Read>(reader: R) -> Result<Vec<LabelledValue>, IngestError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut rows = Vec::new();
    for record in csv_reader.deserialize::<LabelledRow>() {
        let row = record?;
        let label = row.label.trim().to_ascii_lowercase();
        if label.is_empty() {
            continue;
        }
        rows.push(LabelledValue {
            label,
            raw: row.raw,
        });
    }
    Ok(rows)
}

pub(crate) fn parse_number(label: &str, raw: &str) -> Result<f64, IngestError> {
    // Template files written with a French locale use a decimal comma.
    let normalized = raw.replace(',', ".");
    normalized
        .trim()
        .parse::<f64>()
        .map_err(|_| IngestError::InvalidNumber {
            label: label.to_string(),
            raw: raw.to_string(),
        })
}

fn trimmed<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    Ok(value.trim().to_string())
}

use di_scorecard::config::ScorecardConfig;
use di_scorecard::scorecard::{AgeBalanceFormula, RatingProfile};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    /// Profile and age formula applied when a request does not select one.
    pub(crate) scorecard: Arc<ScorecardConfig>,
}

pub(crate) fn parse_profile(raw: &str) -> Result<RatingProfile, String> {
    RatingProfile::by_name(raw)
        .ok_or_else(|| format!("unknown rating profile '{raw}' (expected 'energy_sector' or 'extended')"))
}

pub(crate) fn parse_age_formula(raw: &str) -> Result<AgeBalanceFormula, String> {
    AgeBalanceFormula::parse(raw).ok_or_else(|| {
        format!(
            "unknown age balance formula '{raw}' (expected 'deviation_from_ideal' or 'standard_deviation')"
        )
    })
}

use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use chrono::{Local, NaiveDate};
use di_scorecard::config::ScorecardConfig;
use di_scorecard::error::AppError;
use di_scorecard::ingest;
use di_scorecard::scorecard::{
    export, AgeBalanceFormula, AgeBracketSplit, RatingEngine, ScorecardReport, ScorecardSubmission,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::collections::BTreeMap;
use std::io::Cursor;

#[derive(Debug, Deserialize)]
pub(crate) struct EvaluateRequest {
    #[serde(default)]
    pub(crate) company_name: Option<String>,
    #[serde(default)]
    pub(crate) year: Option<i32>,
    /// Rating profile name; defaults to the six-indicator energy sector grid.
    #[serde(default)]
    pub(crate) profile: Option<String>,
    /// Age balance formula name; defaults to deviation-from-ideal.
    #[serde(default)]
    pub(crate) age_formula: Option<String>,
    #[serde(default)]
    pub(crate) indicators: Option<BTreeMap<String, f64>>,
    #[serde(default)]
    pub(crate) age_brackets: Option<AgeBracketSplit>,
    /// Raw two-column template CSV. When present it replaces the inline
    /// company/year/indicator fields entirely.
    #[serde(default)]
    pub(crate) csv: Option<String>,
    /// Evaluation date stamped on the report (defaults to today).
    #[serde(default)]
    pub(crate) evaluated_on: Option<NaiveDate>,
    #[serde(default)]
    pub(crate) include_grid: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub(crate) enum ScorecardDataSource {
    Csv,
    Inline,
}

#[derive(Debug, Serialize)]
pub(crate) struct EvaluateResponse {
    pub(crate) data_source: ScorecardDataSource,
    pub(crate) age_formula: AgeBalanceFormula,
    #[serde(flatten)]
    pub(crate) report: ScorecardReport,
}

pub(crate) fn router() -> axum::Router {
    axum::Router::new()
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route(
            "/api/v1/scorecard/evaluate",
            axum::routing::post(evaluate_endpoint),
        )
        .route(
            "/api/v1/scorecard/export",
            axum::routing::post(export_endpoint),
        )
        .route(
            "/api/v1/scorecard/template",
            axum::routing::get(template_endpoint),
        )
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn evaluate_endpoint(
    Extension(state): Extension<AppState>,
    Json(payload): Json<EvaluateRequest>,
) -> Result<Json<EvaluateResponse>, AppError> {
    let (report, data_source, age_formula) = build_report(payload, &state.scorecard)?;
    Ok(Json(EvaluateResponse {
        data_source,
        age_formula,
        report,
    }))
}

pub(crate) async fn export_endpoint(
    Extension(state): Extension<AppState>,
    Json(payload): Json<EvaluateRequest>,
) -> Result<impl IntoResponse, AppError> {
    let (report, _, _) = build_report(payload, &state.scorecard)?;
    let file_name = export::suggested_file_name(&report);
    let body = export::to_csv_string(&report)?;
    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{file_name}\""),
            ),
        ],
        body,
    ))
}

pub(crate) async fn template_endpoint() -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/csv; charset=utf-8")],
        ingest::template_csv(),
    )
}

fn build_report(
    payload: EvaluateRequest,
    defaults: &ScorecardConfig,
) -> Result<(ScorecardReport, ScorecardDataSource, AgeBalanceFormula), AppError> {
    let EvaluateRequest {
        company_name,
        year,
        profile,
        age_formula,
        indicators,
        age_brackets,
        csv,
        evaluated_on,
        include_grid,
    } = payload;

    let profile = match profile.as_deref() {
        Some(name) => crate::infra::parse_profile(name).map_err(AppError::invalid)?,
        None => defaults.profile.clone(),
    };
    let age_formula = match age_formula.as_deref() {
        Some(name) => crate::infra::parse_age_formula(name).map_err(AppError::invalid)?,
        None => defaults.age_formula,
    };

    let (submission, data_source) = if let Some(csv) = csv {
        let submission = ingest::submission_from_reader(Cursor::new(csv.into_bytes()))?;
        (submission, ScorecardDataSource::Csv)
    } else {
        let submission = ScorecardSubmission {
            company_name: company_name
                .ok_or_else(|| AppError::invalid("'company_name' is required without 'csv'"))?,
            year: year.ok_or_else(|| AppError::invalid("'year' is required without 'csv'"))?,
            indicators: indicators
                .ok_or_else(|| AppError::invalid("'indicators' is required without 'csv'"))?,
            age_brackets: age_brackets
                .ok_or_else(|| AppError::invalid("'age_brackets' is required without 'csv'"))?,
        };
        (submission, ScorecardDataSource::Inline)
    };

    let engine = RatingEngine::new(profile, age_formula);
    let outcome = engine.evaluate(&submission)?;
    let evaluated_on = evaluated_on.unwrap_or_else(|| Local::now().date_naive());

    let mut report = ScorecardReport::build(&outcome, evaluated_on);
    if include_grid {
        report = report.with_grading_grid(engine.profile());
    }

    Ok((report, data_source, age_formula))
}

use crate::infra::{parse_age_formula, parse_profile};
use chrono::{Local, NaiveDate};
use clap::Args;
use di_scorecard::error::AppError;
use di_scorecard::ingest;
use di_scorecard::scorecard::{
    export, AgeBalanceFormula, AgeBracketSplit, RatingEngine, RatingProfile, ScorecardReport,
    ScorecardSubmission,
};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct RateArgs {
    /// Two-column indicator template file (CSV)
    #[arg(long)]
    pub(crate) csv: PathBuf,
    /// Rating profile: energy_sector or extended
    #[arg(long, default_value = "energy_sector")]
    pub(crate) profile: String,
    /// Age balance formula: deviation_from_ideal or standard_deviation
    #[arg(long, default_value = "deviation_from_ideal")]
    pub(crate) age_formula: String,
    /// Evaluation date stamped on the report (defaults to today)
    #[arg(long)]
    pub(crate) evaluated_on: Option<NaiveDate>,
    /// Write the tabular report to this CSV file
    #[arg(long)]
    pub(crate) export_csv: Option<PathBuf>,
    /// Print the grading grid alongside the results
    #[arg(long)]
    pub(crate) show_grid: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Age balance formula: deviation_from_ideal or standard_deviation
    #[arg(long, default_value = "deviation_from_ideal")]
    pub(crate) age_formula: String,
    /// Evaluation date stamped on the report (defaults to today)
    #[arg(long)]
    pub(crate) evaluated_on: Option<NaiveDate>,
}

pub(crate) fn run_rate(args: RateArgs) -> Result<(), AppError> {
    let RateArgs {
        csv,
        profile,
        age_formula,
        evaluated_on,
        export_csv,
        show_grid,
    } = args;

    let profile = parse_profile(&profile).map_err(AppError::invalid)?;
    let age_formula = parse_age_formula(&age_formula).map_err(AppError::invalid)?;
    let submission = ingest::submission_from_path(csv)?;

    let engine = RatingEngine::new(profile, age_formula);
    let outcome = engine.evaluate(&submission)?;
    let evaluated_on = evaluated_on.unwrap_or_else(|| Local::now().date_naive());
    let mut report = ScorecardReport::build(&outcome, evaluated_on);
    if show_grid {
        report = report.with_grading_grid(engine.profile());
    }

    render_report(&report);

    if let Some(path) = export_csv {
        let file = std::fs::File::create(&path)?;
        export::write_csv(&report, file)?;
        println!("\nReport written to {}", path.display());
    }

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        age_formula,
        evaluated_on,
    } = args;

    let age_formula = parse_age_formula(&age_formula).map_err(AppError::invalid)?;

    // 2022 sample values from an energy-sector social report.
    let submission = ScorecardSubmission {
        company_name: "EDF SA".to_string(),
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

    let engine = RatingEngine::new(RatingProfile::energy_sector(), age_formula);
    let outcome = engine.evaluate(&submission)?;
    let evaluated_on = evaluated_on.unwrap_or_else(|| Local::now().date_naive());
    let report = ScorecardReport::build(&outcome, evaluated_on);

    render_report(&report);
    Ok(())
}

fn render_report(report: &ScorecardReport) {
    println!(
        "D&I scorecard for {} ({}) — profile '{}', evaluated {}",
        report.company_name, report.year, report.profile, report.evaluated_on
    );
    println!();
    println!("{:<34} {:>8}  {:<5} {}", "Indicator", "Value", "Grade", "Band");
    for rating in &report.ratings {
        println!(
            "{:<34} {:>7.2}%  {:<5} {}",
            rating.label, rating.value, rating.grade_label, rating.band_label
        );
    }
    println!();
    println!(
        "Overall grade: {} ({}, composite score {:.2}/5)",
        report.overall_grade_label, report.overall_grade_description, report.composite_score
    );
    println!(
        "Age balance: {:.2} via {} (brackets {:.1} / {:.1} / {:.1})",
        report.age_balance.score,
        match report.age_balance.formula {
            AgeBalanceFormula::DeviationFromIdeal => "deviation from ideal",
            AgeBalanceFormula::StandardDeviation => "standard deviation",
        },
        report.age_balance.brackets.under_30,
        report.age_balance.brackets.between_30_50,
        report.age_balance.brackets.over_50,
    );

    for warning in &report.warnings {
        println!("warning: {warning}");
    }

    let insights = &report.insights;
    if !insights.strengths.is_empty() {
        println!("\nStrengths:");
        for label in &insights.strengths {
            println!("  + {label}");
        }
    }
    if !insights.areas_to_consolidate.is_empty() {
        println!("\nTo consolidate:");
        for label in &insights.areas_to_consolidate {
            println!("  ~ {label}");
        }
    }
    if !insights.priority_improvements.is_empty() {
        println!("\nPriority improvements:");
        for label in &insights.priority_improvements {
            println!("  ! {label}");
        }
    }
    if !insights.recommendations.is_empty() {
        println!("\nRecommendations:");
        for text in &insights.recommendations {
            println!("  - {text}");
        }
    }
    println!("\n{}", insights.conclusion);

    if let Some(grid) = &report.grading_grid {
        println!("\nGrading grid:");
        for entry in grid {
            println!("  {}:", entry.label);
            for criterion in &entry.criteria {
                println!("    {}  {}", criterion.grade.label(), criterion.criterion);
            }
        }
    }
}

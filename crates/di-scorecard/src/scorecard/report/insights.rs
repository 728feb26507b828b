use super::views::ScorecardInsights;
use crate::scorecard::engine::{IndicatorRating, ScorecardOutcome};
use crate::scorecard::grade::Grade;
use crate::scorecard::profile::IndicatorKey;

pub(crate) fn generate_insights(outcome: &ScorecardOutcome) -> ScorecardInsights {
    let recommendations = outcome
        .priorities()
        .into_iter()
        .map(|rating| recommendation_for(rating.key))
        .map(str::to_string)
        .collect();

    ScorecardInsights {
        strengths: labels(outcome.strengths()),
        areas_to_consolidate: labels(outcome.to_consolidate()),
        priority_improvements: labels(outcome.priorities()),
        recommendations,
        conclusion: conclusion_for(outcome),
    }
}

fn labels(ratings: Vec<&IndicatorRating>) -> Vec<String> {
    ratings
        .into_iter()
        .map(|rating| rating.label.to_string())
        .collect()
}

/// Remediation advice per indicator, surfaced when it lands in the priority
/// band.
fn recommendation_for(key: IndicatorKey) -> &'static str {
    match key {
        IndicatorKey::TauxFeminisation => {
            "Strengthen recruitment of women, in particular into technical roles"
        }
        IndicatorKey::TauxFemmesCadres => {
            "Develop mentoring and promotion programmes for women towards management positions"
        }
        IndicatorKey::TauxHandicap => {
            "Reinforce recruitment and workplace adaptation to reach the 6% statutory employment target"
        }
        IndicatorKey::EcartSalaire => {
            "Run a systematic compensation review and a pay catch-up plan"
        }
        IndicatorKey::EquilibreAge => {
            "Diversify recruitment to rebalance the age pyramid and support knowledge transfer"
        }
        IndicatorKey::TauxAbsenteisme => {
            "Analyse root causes of absences and invest in quality-of-life-at-work initiatives"
        }
        IndicatorKey::TauxCdi => "Increase the share of permanent contracts in the workforce",
        IndicatorKey::TauxFormation => "Expand the training programme across the workforce",
        IndicatorKey::TauxRecrutementInterne => "Increase internal recruitment and mobility",
        IndicatorKey::TauxTempsPartiel => "Keep part-time work a choice rather than a constraint",
        IndicatorKey::TauxTeletravail => "Develop remote-work arrangements where roles allow it",
        IndicatorKey::TauxPromotionFemmes => "Increase the share of women among promotions",
    }
}

fn conclusion_for(outcome: &ScorecardOutcome) -> String {
    let grade = outcome.overall_grade;
    let score = outcome.composite_score;
    match grade {
        Grade::A | Grade::B => format!(
            "With an overall grade of {} (score {score:.2}/5), the company demonstrates a solid \
             commitment to diversity and inclusion. The practices in place deserve to be \
             highlighted and shared.",
            grade.label()
        ),
        Grade::C => format!(
            "With an overall grade of {} (score {score:.2}/5), the company shows mixed results \
             on diversity and inclusion. Significant progress is still needed to reach \
             excellence in this area.",
            grade.label()
        ),
        Grade::D | Grade::E => format!(
            "With an overall grade of {} (score {score:.2}/5), the company's diversity and \
             inclusion performance is insufficient. An ambitious, company-wide action plan is \
             required.",
            grade.label()
        ),
    }
}

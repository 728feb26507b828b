pub mod age;
pub mod engine;
pub mod export;
pub mod grade;
pub mod profile;
pub mod report;
pub mod scale;

pub use age::{AgeBalanceFormula, AgeBracketSplit};
pub use engine::{
    AgeBalanceBreakdown, IndicatorRating, RatingEngine, RatingError, ScorecardOutcome,
    ScorecardSubmission,
};
pub use grade::{Grade, PerformanceBand};
pub use profile::{IndicatorKey, IndicatorScale, RatingProfile};
pub use report::views::{ScorecardInsights, ScorecardReport};
pub use scale::{GradeScale, Orientation};

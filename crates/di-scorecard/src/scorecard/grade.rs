use serde::{Deserialize, Serialize};

/// Ordinal rating letter assigned to an indicator or to the overall scorecard.
/// A is best, E is worst.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
    E,
}

/// Classification bucket used for the narrative sections of a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PerformanceBand {
    Strength,
    Consolidate,
    Priority,
}

impl Grade {
    /// Numeric score on the 1-5 scale used for composite averaging.
    pub const fn score(self) -> u8 {
        match self {
            Self::A => 5,
            Self::B => 4,
            Self::C => 3,
            Self::D => 2,
            Self::E => 1,
        }
    }

    /// Maps a numeric score back to a letter using the 4.5 / 3.5 / 2.5 / 1.5
    /// cut points. The same boundaries apply to single scores and to the
    /// composite mean.
    pub fn from_score(score: f64) -> Self {
        if score >= 4.5 {
            Self::A
        } else if score >= 3.5 {
            Self::B
        } else if score >= 2.5 {
            Self::C
        } else if score >= 1.5 {
            Self::D
        } else {
            Self::E
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::E => "E",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::A => "Exemplary performance",
            Self::B => "Satisfactory performance",
            Self::C => "Average performance",
            Self::D => "Insufficient performance",
            Self::E => "Critical performance",
        }
    }

    pub const fn band(self) -> PerformanceBand {
        match self {
            Self::A | Self::B => PerformanceBand::Strength,
            Self::C => PerformanceBand::Consolidate,
            Self::D | Self::E => PerformanceBand::Priority,
        }
    }

    pub const fn all() -> [Self; 5] {
        [Self::A, Self::B, Self::C, Self::D, Self::E]
    }
}

impl PerformanceBand {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Strength => "Strength",
            Self::Consolidate => "To consolidate",
            Self::Priority => "Priority improvement",
        }
    }
}

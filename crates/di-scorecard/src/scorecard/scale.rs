use super::grade::Grade;
use serde::{Deserialize, Serialize};

/// Whether a larger raw value earns a better letter for the indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    HigherIsBetter,
    LowerIsBetter,
}

/// Four grade boundaries and their orientation. The thresholds read
/// `[t_A, t_B, t_C, t_D]`: descending for higher-is-better indicators,
/// ascending for lower-is-better ones.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GradeScale {
    pub thresholds: [f64; 4],
    pub orientation: Orientation,
}

impl GradeScale {
    pub const fn higher_is_better(thresholds: [f64; 4]) -> Self {
        Self {
            thresholds,
            orientation: Orientation::HigherIsBetter,
        }
    }

    pub const fn lower_is_better(thresholds: [f64; 4]) -> Self {
        Self {
            thresholds,
            orientation: Orientation::LowerIsBetter,
        }
    }

    /// Assigns a letter to a raw value. Total over finite reals: every value,
    /// however far outside the expected range, lands on a grade. Boundaries
    /// are inclusive on the good side.
    pub fn grade(&self, value: f64) -> Grade {
        let [t_a, t_b, t_c, t_d] = self.thresholds;
        match self.orientation {
            Orientation::HigherIsBetter => {
                if value >= t_a {
                    Grade::A
                } else if value >= t_b {
                    Grade::B
                } else if value >= t_c {
                    Grade::C
                } else if value >= t_d {
                    Grade::D
                } else {
                    Grade::E
                }
            }
            Orientation::LowerIsBetter => {
                if value <= t_a {
                    Grade::A
                } else if value <= t_b {
                    Grade::B
                } else if value <= t_c {
                    Grade::C
                } else if value <= t_d {
                    Grade::D
                } else {
                    Grade::E
                }
            }
        }
    }

    /// Human-readable criterion for one letter of the grid, e.g. ">= 45%" or
    /// "5.1% to 10%". Used by the report's grading-grid section.
    pub fn criterion(&self, grade: Grade) -> String {
        let [t_a, t_b, t_c, t_d] = self.thresholds;
        match self.orientation {
            Orientation::HigherIsBetter => match grade {
                Grade::A => format!(">= {t_a}%"),
                Grade::B => format!("{t_b}% to {}%", t_a - 0.1),
                Grade::C => format!("{t_c}% to {}%", t_b - 0.1),
                Grade::D => format!("{t_d}% to {}%", t_c - 0.1),
                Grade::E => format!("< {t_d}%"),
            },
            Orientation::LowerIsBetter => match grade {
                Grade::A => format!("<= {t_a}%"),
                Grade::B => format!("{}% to {t_b}%", t_a + 0.1),
                Grade::C => format!("{}% to {t_c}%", t_b + 0.1),
                Grade::D => format!("{}% to {t_d}%", t_c + 0.1),
                Grade::E => format!("> {t_d}%"),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascending_scale_is_inclusive_on_the_good_side() {
        let scale = GradeScale::higher_is_better([45.0, 40.0, 30.0, 20.0]);
        assert_eq!(scale.grade(45.0), Grade::A);
        assert_eq!(scale.grade(44.9), Grade::B);
        assert_eq!(scale.grade(40.0), Grade::B);
        assert_eq!(scale.grade(30.0), Grade::C);
        assert_eq!(scale.grade(20.0), Grade::D);
        assert_eq!(scale.grade(19.9), Grade::E);
    }

    #[test]
    fn descending_scale_is_inclusive_on_the_good_side() {
        let scale = GradeScale::lower_is_better([3.0, 5.0, 10.0, 15.0]);
        assert_eq!(scale.grade(0.0), Grade::A);
        assert_eq!(scale.grade(3.0), Grade::A);
        assert_eq!(scale.grade(3.1), Grade::B);
        assert_eq!(scale.grade(5.0), Grade::B);
        assert_eq!(scale.grade(10.0), Grade::C);
        assert_eq!(scale.grade(15.0), Grade::D);
        assert_eq!(scale.grade(15.1), Grade::E);
    }

    #[test]
    fn grading_is_total_over_out_of_range_values() {
        let ascending = GradeScale::higher_is_better([45.0, 40.0, 30.0, 20.0]);
        assert_eq!(ascending.grade(-1_000.0), Grade::E);
        assert_eq!(ascending.grade(1_000.0), Grade::A);

        let descending = GradeScale::lower_is_better([3.0, 5.0, 10.0, 15.0]);
        assert_eq!(descending.grade(-1_000.0), Grade::A);
        assert_eq!(descending.grade(1_000.0), Grade::E);
    }

    #[test]
    fn criterion_text_matches_grid_presentation() {
        let ascending = GradeScale::higher_is_better([45.0, 40.0, 30.0, 20.0]);
        assert_eq!(ascending.criterion(Grade::A), ">= 45%");
        assert_eq!(ascending.criterion(Grade::B), "40% to 44.9%");
        assert_eq!(ascending.criterion(Grade::E), "< 20%");

        let descending = GradeScale::lower_is_better([3.0, 5.0, 10.0, 15.0]);
        assert_eq!(descending.criterion(Grade::A), "<= 3%");
        assert_eq!(descending.criterion(Grade::B), "3.1% to 5%");
        assert_eq!(descending.criterion(Grade::E), "> 15%");
    }
}

use super::scale::GradeScale;
use serde::{Deserialize, Serialize};

/// Identifier of a rated workforce indicator. The serialized keys follow the
/// labels used by the social-report data files (`taux_feminisation`,
/// `ecart_salaire`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndicatorKey {
    TauxFeminisation,
    TauxFemmesCadres,
    TauxHandicap,
    EcartSalaire,
    EquilibreAge,
    TauxAbsenteisme,
    TauxCdi,
    TauxFormation,
    TauxRecrutementInterne,
    TauxTempsPartiel,
    TauxTeletravail,
    TauxPromotionFemmes,
}

impl IndicatorKey {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TauxFeminisation => "taux_feminisation",
            Self::TauxFemmesCadres => "taux_femmes_cadres",
            Self::TauxHandicap => "taux_handicap",
            Self::EcartSalaire => "ecart_salaire",
            Self::EquilibreAge => "equilibre_age",
            Self::TauxAbsenteisme => "taux_absenteisme",
            Self::TauxCdi => "taux_cdi",
            Self::TauxFormation => "taux_formation",
            Self::TauxRecrutementInterne => "taux_recrutement_interne",
            Self::TauxTempsPartiel => "taux_temps_partiel",
            Self::TauxTeletravail => "taux_teletravail",
            Self::TauxPromotionFemmes => "taux_promotion_femmes",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::TauxFeminisation => "Workforce feminisation rate",
            Self::TauxFemmesCadres => "Women in management rate",
            Self::TauxHandicap => "Disability employment rate",
            Self::EcartSalaire => "Gender pay gap",
            Self::EquilibreAge => "Age balance",
            Self::TauxAbsenteisme => "Absenteeism rate",
            Self::TauxCdi => "Permanent contract rate",
            Self::TauxFormation => "Training rate",
            Self::TauxRecrutementInterne => "Internal recruitment rate",
            Self::TauxTempsPartiel => "Part-time rate",
            Self::TauxTeletravail => "Remote work rate",
            Self::TauxPromotionFemmes => "Women promotion rate",
        }
    }

    pub fn from_key(value: &str) -> Option<Self> {
        let key = match value.trim() {
            "taux_feminisation" => Self::TauxFeminisation,
            "taux_femmes_cadres" => Self::TauxFemmesCadres,
            "taux_handicap" => Self::TauxHandicap,
            "ecart_salaire" => Self::EcartSalaire,
            "equilibre_age" => Self::EquilibreAge,
            "taux_absenteisme" => Self::TauxAbsenteisme,
            "taux_cdi" => Self::TauxCdi,
            "taux_formation" => Self::TauxFormation,
            "taux_recrutement_interne" => Self::TauxRecrutementInterne,
            "taux_temps_partiel" => Self::TauxTempsPartiel,
            "taux_teletravail" => Self::TauxTeletravail,
            "taux_promotion_femmes" => Self::TauxPromotionFemmes,
            _ => return None,
        };
        Some(key)
    }
}

/// One entry of a rating profile: an indicator and its grade boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IndicatorScale {
    pub key: IndicatorKey,
    pub scale: GradeScale,
}

/// Immutable threshold configuration for one edition of the scorecard.
/// Built once at startup and passed into the engine; indicator order is the
/// presentation order of the report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RatingProfile {
    pub name: &'static str,
    pub indicators: Vec<IndicatorScale>,
}

impl RatingProfile {
    /// Six-indicator grid calibrated on energy/industry sector benchmarks.
    pub fn energy_sector() -> Self {
        Self {
            name: "energy_sector",
            indicators: vec![
                entry(
                    IndicatorKey::TauxFeminisation,
                    GradeScale::higher_is_better([45.0, 40.0, 30.0, 20.0]),
                ),
                entry(
                    IndicatorKey::TauxFemmesCadres,
                    GradeScale::higher_is_better([40.0, 30.0, 20.0, 15.0]),
                ),
                entry(
                    IndicatorKey::TauxHandicap,
                    // The 6% boundary is the French statutory employment target.
                    GradeScale::higher_is_better([6.0, 5.0, 4.0, 3.0]),
                ),
                entry(
                    IndicatorKey::EcartSalaire,
                    GradeScale::lower_is_better([3.0, 5.0, 10.0, 15.0]),
                ),
                entry(
                    IndicatorKey::EquilibreAge,
                    GradeScale::higher_is_better([80.0, 70.0, 60.0, 50.0]),
                ),
                entry(
                    IndicatorKey::TauxAbsenteisme,
                    GradeScale::lower_is_better([3.0, 4.0, 5.0, 6.0]),
                ),
            ],
        }
    }

    /// Twelve-indicator grid from the extended edition, adding contract,
    /// training, recruitment and work-organisation metrics. Boundaries are
    /// anchored on that edition's published objectives.
    pub fn extended() -> Self {
        let mut profile = Self::energy_sector();
        profile.name = "extended";
        profile.indicators.extend([
            entry(
                IndicatorKey::TauxCdi,
                GradeScale::higher_is_better([85.0, 80.0, 70.0, 60.0]),
            ),
            entry(
                IndicatorKey::TauxFormation,
                GradeScale::higher_is_better([10.0, 7.0, 5.0, 3.0]),
            ),
            entry(
                IndicatorKey::TauxRecrutementInterne,
                GradeScale::higher_is_better([40.0, 30.0, 20.0, 10.0]),
            ),
            entry(
                IndicatorKey::TauxTempsPartiel,
                GradeScale::lower_is_better([10.0, 15.0, 20.0, 25.0]),
            ),
            entry(
                IndicatorKey::TauxTeletravail,
                GradeScale::higher_is_better([30.0, 20.0, 15.0, 10.0]),
            ),
            entry(
                IndicatorKey::TauxPromotionFemmes,
                GradeScale::higher_is_better([40.0, 35.0, 30.0, 20.0]),
            ),
        ]);
        profile
    }

    pub fn by_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "energy_sector" => Some(Self::energy_sector()),
            "extended" => Some(Self::extended()),
            _ => None,
        }
    }

    pub fn scale(&self, key: IndicatorKey) -> Option<GradeScale> {
        self.indicators
            .iter()
            .find(|indicator| indicator.key == key)
            .map(|indicator| indicator.scale)
    }

    pub fn contains(&self, key: IndicatorKey) -> bool {
        self.scale(key).is_some()
    }
}

fn entry(key: IndicatorKey, scale: GradeScale) -> IndicatorScale {
    IndicatorScale { key, scale }
}

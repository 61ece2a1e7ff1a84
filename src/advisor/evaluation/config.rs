use serde::{Deserialize, Serialize};

/// Rubric configuration carrying every scoring weight, threshold, and
/// projection constant. All business dials live here so a deployment can
/// retune the rubric without touching rule code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Strict upper bound (exclusive) on price per square foot for the
    /// affordability bonus.
    pub price_per_sqft_ceiling: f64,
    pub affordable_pricing_weight: u8,
    /// Inclusive BHK band treated as family-sized.
    pub family_bhk_min: u8,
    pub family_bhk_max: u8,
    pub family_layout_weight: u8,
    pub school_threshold: u8,
    pub school_access_weight: u8,
    pub hospital_threshold: u8,
    pub hospital_access_weight: u8,
    pub transit_threshold: u8,
    pub transit_access_weight: u8,
    pub parking_weight: u8,
    /// Strict upper bound (exclusive) on property age for the
    /// recent-construction bonus.
    pub max_age_years: i32,
    pub recent_construction_weight: u8,
    /// Inclusive score floor for a good-investment recommendation.
    pub good_investment_threshold: u8,
    /// Cap applied to the score-derived confidence figure.
    pub confidence_cap: f64,
    /// Annual compounding appreciation rate applied to projections.
    pub appreciation_rate: f64,
    pub horizon_years: u32,
    /// Fixed epoch used to derive property age from the build year. Not
    /// wall-clock: evaluations stay reproducible across runs.
    pub reference_year: i32,
}

impl ScoringConfig {
    /// Sum of every rule weight, the ceiling of the additive score.
    pub fn maximum_score(&self) -> u16 {
        u16::from(self.affordable_pricing_weight)
            + u16::from(self.family_layout_weight)
            + u16::from(self.school_access_weight)
            + u16::from(self.hospital_access_weight)
            + u16::from(self.transit_access_weight)
            + u16::from(self.parking_weight)
            + u16::from(self.recent_construction_weight)
    }
}

use super::config::ScoringConfig;
use serde::{Deserialize, Serialize};

/// Investment recommendation derived from the composite score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Recommendation {
    GoodInvestment,
    ModerateInvestment,
}

impl Recommendation {
    pub fn label(&self) -> &'static str {
        match self {
            Recommendation::GoodInvestment => "Good investment",
            Recommendation::ModerateInvestment => "Moderate investment",
        }
    }

    pub fn is_good(&self) -> bool {
        matches!(self, Recommendation::GoodInvestment)
    }
}

/// Map the score onto a recommendation. The threshold is inclusive:
/// landing exactly on it counts as a good investment.
pub(crate) fn decide_recommendation(score: u8, config: &ScoringConfig) -> Recommendation {
    if score >= config.good_investment_threshold {
        Recommendation::GoodInvestment
    } else {
        Recommendation::ModerateInvestment
    }
}

/// Score-derived display confidence, capped by policy. Cosmetic figure,
/// not a calibrated probability.
pub(crate) fn derive_confidence(score: u8, config: &ScoringConfig) -> f64 {
    (f64::from(score) / 100.0).min(config.confidence_cap)
}

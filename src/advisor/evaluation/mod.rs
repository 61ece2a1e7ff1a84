mod config;
mod policy;
mod projection;
mod rules;

pub use config::ScoringConfig;
pub use policy::Recommendation;
pub use projection::ProjectionPoint;

use crate::advisor::domain::PropertyProfile;
use serde::{Deserialize, Serialize};

/// Stateless engine applying the rubric configuration to a property
/// profile. Evaluation is a single pure transform: given a validated
/// profile it cannot fail, and identical inputs produce identical output.
pub struct ScoringEngine {
    config: ScoringConfig,
}

impl ScoringEngine {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    pub fn evaluate(&self, profile: &PropertyProfile) -> InvestmentAssessment {
        let (components, score, signals) = rules::score_profile(profile, &self.config);

        let recommendation = policy::decide_recommendation(score, &self.config);
        let confidence = policy::derive_confidence(score, &self.config);

        let current_price_lakhs = profile.current_price_lakhs;
        let future_price_lakhs = projection::future_price(current_price_lakhs, &self.config);
        let roi_percent = projection::roi_percent(current_price_lakhs, future_price_lakhs);

        InvestmentAssessment {
            score,
            recommendation,
            good_investment: recommendation.is_good(),
            confidence,
            current_price_lakhs,
            future_price_lakhs,
            roi_percent,
            price_per_sqft: signals.price_per_sqft,
            property_age_years: signals.property_age,
            components,
        }
    }

    /// Year-by-year projected prices for the configured horizon.
    pub fn price_series(&self, current_price_lakhs: f64) -> Vec<ProjectionPoint> {
        projection::price_series(current_price_lakhs, &self.config)
    }
}

/// Discrete contribution to an assessment, allowing transparent audits of
/// how the composite score was reached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub factor: ScoreFactor,
    pub points: u8,
    pub notes: String,
}

/// The rubric's scored signals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreFactor {
    AffordablePricing,
    FamilySizedLayout,
    SchoolAccess,
    HospitalAccess,
    TransitAccess,
    DedicatedParking,
    RecentConstruction,
}

impl ScoreFactor {
    pub fn label(&self) -> &'static str {
        match self {
            ScoreFactor::AffordablePricing => "Affordable pricing",
            ScoreFactor::FamilySizedLayout => "Family-sized layout",
            ScoreFactor::SchoolAccess => "School access",
            ScoreFactor::HospitalAccess => "Hospital access",
            ScoreFactor::TransitAccess => "Transit access",
            ScoreFactor::DedicatedParking => "Dedicated parking",
            ScoreFactor::RecentConstruction => "Recent construction",
        }
    }
}

/// Assessment output describing the composite score, the recommendation,
/// and the price trajectory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestmentAssessment {
    pub score: u8,
    pub recommendation: Recommendation,
    pub good_investment: bool,
    pub confidence: f64,
    pub current_price_lakhs: f64,
    pub future_price_lakhs: f64,
    pub roi_percent: f64,
    pub price_per_sqft: f64,
    pub property_age_years: i32,
    pub components: Vec<ScoreComponent>,
}

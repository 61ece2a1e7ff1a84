use serde::{Deserialize, Serialize};
use validator::Validate;

use super::domain::{AssessmentRequest, PropertyProfile};
use super::evaluation::{InvestmentAssessment, ProjectionPoint, ScoringConfig, ScoringEngine};
use super::insights::{generate_insights, InvestmentInsights};

/// Request-scoped facade composing boundary validation, the scoring
/// engine, the projection series, and insight generation. Holds no
/// mutable state; a single instance serves any number of concurrent
/// evaluations.
pub struct AdvisorService {
    engine: ScoringEngine,
}

impl AdvisorService {
    pub fn new(config: ScoringConfig) -> Self {
        Self {
            engine: ScoringEngine::new(config),
        }
    }

    pub fn engine(&self) -> &ScoringEngine {
        &self.engine
    }

    /// Validate a submission and produce the full assessment report.
    /// Validation is the only failure path; once a profile is built the
    /// evaluation cannot fail.
    pub fn assess(&self, request: AssessmentRequest) -> Result<AssessmentReport, AssessmentError> {
        request.validate()?;

        let profile = PropertyProfile::from(request);
        let assessment = self.engine.evaluate(&profile);
        let projection = self.engine.price_series(assessment.current_price_lakhs);
        let insights = generate_insights(&assessment, &profile, self.engine.config());

        Ok(AssessmentReport {
            profile,
            assessment,
            projection,
            insights,
        })
    }
}

/// Full advisory output for one submission: the echoed profile, the
/// scored assessment, the year-by-year projection, and the narrative
/// insights.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentReport {
    pub profile: PropertyProfile,
    pub assessment: InvestmentAssessment,
    pub projection: Vec<ProjectionPoint>,
    pub insights: InvestmentInsights,
}

#[derive(Debug, thiserror::Error)]
pub enum AssessmentError {
    #[error("invalid property submission: {0}")]
    Validation(#[from] validator::ValidationErrors),
}

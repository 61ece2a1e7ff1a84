//! Property investment advisory: boundary validation, rubric scoring,
//! price projection, and narrative insights for a single submission.

pub mod domain;
pub mod evaluation;
mod insights;
mod router;
mod service;

pub use insights::InvestmentInsights;
pub use router::advisor_router;
pub use service::{AdvisorService, AssessmentError, AssessmentReport};

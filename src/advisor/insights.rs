use super::domain::PropertyProfile;
use super::evaluation::{InvestmentAssessment, ScoreFactor, ScoringConfig};
use serde::{Deserialize, Serialize};

/// Narrative companion to an assessment: what the numbers say, and what
/// would move them. Everything here is derived deterministically from the
/// assessment; no extra state is consulted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestmentInsights {
    pub observations: Vec<String>,
    pub recommendations: Vec<String>,
}

pub(crate) fn generate_insights(
    assessment: &InvestmentAssessment,
    profile: &PropertyProfile,
    config: &ScoringConfig,
) -> InvestmentInsights {
    let satisfied = assessment
        .components
        .iter()
        .filter(|component| component.points > 0)
        .count();

    let mut observations = Vec::new();
    observations.push(format!(
        "Investment score {} of 100 with {} of {} rubric signals satisfied",
        assessment.score,
        satisfied,
        assessment.components.len()
    ));

    if assessment.price_per_sqft < config.price_per_sqft_ceiling {
        observations.push(format!(
            "Price per sqft {:.0} sits under the {:.0} affordability ceiling",
            assessment.price_per_sqft, config.price_per_sqft_ceiling
        ));
    } else {
        observations.push(format!(
            "Price per sqft {:.0} exceeds the {:.0} affordability ceiling",
            assessment.price_per_sqft, config.price_per_sqft_ceiling
        ));
    }

    let horizon_year = config.reference_year + config.horizon_years as i32;
    observations.push(format!(
        "Assuming {:.0}% annual appreciation, {:.2}L grows to {:.2}L by {} ({:.1}% ROI)",
        config.appreciation_rate * 100.0,
        assessment.current_price_lakhs,
        assessment.future_price_lakhs,
        horizon_year,
        assessment.roi_percent
    ));

    if assessment.property_age_years < config.max_age_years {
        observations.push(format!(
            "Recent construction: {} years old as of {}",
            assessment.property_age_years, config.reference_year
        ));
    }

    let mut recommendations = Vec::new();
    for component in &assessment.components {
        if component.points > 0 {
            continue;
        }
        match component.factor {
            ScoreFactor::AffordablePricing => recommendations.push(format!(
                "Negotiate below {:.0} per sqft to capture the affordability signal",
                config.price_per_sqft_ceiling
            )),
            ScoreFactor::FamilySizedLayout => recommendations.push(format!(
                "{} BHK units trade outside the {}-{} BHK demand band; expect a thinner resale market",
                profile.bhk, config.family_bhk_min, config.family_bhk_max
            )),
            ScoreFactor::SchoolAccess => recommendations.push(format!(
                "School coverage is below the {}-school minimum; verify catchment options before committing",
                config.school_threshold
            )),
            ScoreFactor::HospitalAccess => recommendations.push(format!(
                "Hospital coverage is below the {}-facility minimum",
                config.hospital_threshold
            )),
            ScoreFactor::TransitAccess => recommendations.push(
                "Weak public transport access; budget for commute overhead".to_string(),
            ),
            ScoreFactor::DedicatedParking => {
                recommendations.push("No dedicated parking; a persistent drag on resale value".to_string())
            }
            ScoreFactor::RecentConstruction => recommendations.push(format!(
                "Property is {} years old; factor maintenance and redevelopment risk into the price",
                assessment.property_age_years
            )),
        }
    }

    if assessment.good_investment {
        recommendations.push(format!(
            "Hold through the {}-year horizon to capture the projected appreciation",
            config.horizon_years
        ));
    } else {
        recommendations.push(format!(
            "Score is below the {} threshold; treat as a moderate opportunity pending better terms",
            config.good_investment_threshold
        ));
    }

    InvestmentInsights {
        observations,
        recommendations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::advisor::evaluation::ScoringEngine;

    fn config() -> ScoringConfig {
        ScoringConfig {
            price_per_sqft_ceiling: 10_000.0,
            affordable_pricing_weight: 25,
            family_bhk_min: 2,
            family_bhk_max: 3,
            family_layout_weight: 20,
            school_threshold: 5,
            school_access_weight: 15,
            hospital_threshold: 4,
            hospital_access_weight: 10,
            transit_threshold: 5,
            transit_access_weight: 10,
            parking_weight: 10,
            max_age_years: 10,
            recent_construction_weight: 10,
            good_investment_threshold: 55,
            confidence_cap: 0.95,
            appreciation_rate: 0.08,
            horizon_years: 5,
            reference_year: 2025,
        }
    }

    fn profile() -> PropertyProfile {
        PropertyProfile {
            bhk: 3,
            size_sqft: 1500.0,
            current_price_lakhs: 80.0,
            year_built: 2020,
            nearby_schools: 5,
            nearby_hospitals: 4,
            public_transport: 5,
            parking_spaces: 1,
            floor: 5,
            total_floors: 10,
            city: None,
            property_type: None,
        }
    }

    #[test]
    fn full_score_yields_only_the_hold_recommendation() {
        let config = config();
        let engine = ScoringEngine::new(config.clone());
        let profile = profile();
        let assessment = engine.evaluate(&profile);
        let insights = generate_insights(&assessment, &profile, &config);

        assert!(insights.observations[0].contains("100 of 100"));
        assert_eq!(insights.recommendations.len(), 1);
        assert!(insights.recommendations[0].contains("Hold through"));
    }

    #[test]
    fn missed_rules_each_produce_a_recommendation() {
        let config = config();
        let engine = ScoringEngine::new(config.clone());
        let mut weak = profile();
        weak.nearby_schools = 2;
        weak.parking_spaces = 0;
        let assessment = engine.evaluate(&weak);
        let insights = generate_insights(&assessment, &weak, &config);

        assert!(insights
            .recommendations
            .iter()
            .any(|line| line.contains("School coverage")));
        assert!(insights
            .recommendations
            .iter()
            .any(|line| line.contains("parking")));
    }

    #[test]
    fn roi_observation_names_the_horizon_year() {
        let config = config();
        let engine = ScoringEngine::new(config.clone());
        let profile = profile();
        let assessment = engine.evaluate(&profile);
        let insights = generate_insights(&assessment, &profile, &config);

        assert!(insights
            .observations
            .iter()
            .any(|line| line.contains("2030")));
    }
}

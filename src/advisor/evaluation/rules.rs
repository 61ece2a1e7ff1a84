use super::config::ScoringConfig;
use super::{ScoreComponent, ScoreFactor};
use crate::advisor::domain::PropertyProfile;

/// Derived quantities shared by the decision policy and the insight
/// generator so they are computed exactly once per evaluation.
pub(crate) struct ScoreSignals {
    pub price_per_sqft: f64,
    pub property_age: i32,
}

/// Apply every rubric rule to the profile. Rules are independent boolean
/// predicates over disjoint features; order carries no meaning. Each rule
/// leaves a component behind, scored or not, so the breakdown always
/// lists the full rubric.
pub(crate) fn score_profile(
    profile: &PropertyProfile,
    config: &ScoringConfig,
) -> (Vec<ScoreComponent>, u8, ScoreSignals) {
    let mut components = Vec::new();
    let mut total: u16 = 0;

    let price_per_sqft = profile.price_per_sqft();
    if price_per_sqft < config.price_per_sqft_ceiling {
        components.push(ScoreComponent {
            factor: ScoreFactor::AffordablePricing,
            points: config.affordable_pricing_weight,
            notes: format!(
                "price per sqft {:.0} under the {:.0} affordability ceiling",
                price_per_sqft, config.price_per_sqft_ceiling
            ),
        });
        total += u16::from(config.affordable_pricing_weight);
    } else {
        components.push(ScoreComponent {
            factor: ScoreFactor::AffordablePricing,
            points: 0,
            notes: format!(
                "price per sqft {:.0} at or above the {:.0} ceiling",
                price_per_sqft, config.price_per_sqft_ceiling
            ),
        });
    }

    if (config.family_bhk_min..=config.family_bhk_max).contains(&profile.bhk) {
        components.push(ScoreComponent {
            factor: ScoreFactor::FamilySizedLayout,
            points: config.family_layout_weight,
            notes: format!("{} BHK sits in the high-demand family band", profile.bhk),
        });
        total += u16::from(config.family_layout_weight);
    } else {
        components.push(ScoreComponent {
            factor: ScoreFactor::FamilySizedLayout,
            points: 0,
            notes: format!(
                "{} BHK outside the {}-{} BHK family band",
                profile.bhk, config.family_bhk_min, config.family_bhk_max
            ),
        });
    }

    if profile.nearby_schools >= config.school_threshold {
        components.push(ScoreComponent {
            factor: ScoreFactor::SchoolAccess,
            points: config.school_access_weight,
            notes: format!(
                "{} schools nearby meets the {} minimum",
                profile.nearby_schools, config.school_threshold
            ),
        });
        total += u16::from(config.school_access_weight);
    } else {
        components.push(ScoreComponent {
            factor: ScoreFactor::SchoolAccess,
            points: 0,
            notes: format!(
                "{} schools nearby, below the {} minimum",
                profile.nearby_schools, config.school_threshold
            ),
        });
    }

    if profile.nearby_hospitals >= config.hospital_threshold {
        components.push(ScoreComponent {
            factor: ScoreFactor::HospitalAccess,
            points: config.hospital_access_weight,
            notes: format!(
                "{} hospitals nearby meets the {} minimum",
                profile.nearby_hospitals, config.hospital_threshold
            ),
        });
        total += u16::from(config.hospital_access_weight);
    } else {
        components.push(ScoreComponent {
            factor: ScoreFactor::HospitalAccess,
            points: 0,
            notes: format!(
                "{} hospitals nearby, below the {} minimum",
                profile.nearby_hospitals, config.hospital_threshold
            ),
        });
    }

    if profile.public_transport >= config.transit_threshold {
        components.push(ScoreComponent {
            factor: ScoreFactor::TransitAccess,
            points: config.transit_access_weight,
            notes: format!(
                "transit access {} of 10 meets the {} minimum",
                profile.public_transport, config.transit_threshold
            ),
        });
        total += u16::from(config.transit_access_weight);
    } else {
        components.push(ScoreComponent {
            factor: ScoreFactor::TransitAccess,
            points: 0,
            notes: format!(
                "transit access {} of 10, below the {} minimum",
                profile.public_transport, config.transit_threshold
            ),
        });
    }

    if profile.parking_spaces >= 1 {
        components.push(ScoreComponent {
            factor: ScoreFactor::DedicatedParking,
            points: config.parking_weight,
            notes: format!("{} dedicated parking space(s)", profile.parking_spaces),
        });
        total += u16::from(config.parking_weight);
    } else {
        components.push(ScoreComponent {
            factor: ScoreFactor::DedicatedParking,
            points: 0,
            notes: "no dedicated parking".to_string(),
        });
    }

    let property_age = profile.age_at(config.reference_year);
    if property_age < config.max_age_years {
        components.push(ScoreComponent {
            factor: ScoreFactor::RecentConstruction,
            points: config.recent_construction_weight,
            notes: format!(
                "built {} ({} years old, under the {}-year cutoff)",
                profile.year_built, property_age, config.max_age_years
            ),
        });
        total += u16::from(config.recent_construction_weight);
    } else {
        components.push(ScoreComponent {
            factor: ScoreFactor::RecentConstruction,
            points: 0,
            notes: format!(
                "built {} ({} years old, past the {}-year cutoff)",
                profile.year_built, property_age, config.max_age_years
            ),
        });
    }

    let signals = ScoreSignals {
        price_per_sqft,
        property_age,
    };

    (components, total.min(100) as u8, signals)
}

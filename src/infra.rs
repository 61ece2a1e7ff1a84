use crate::advisor::domain::{City, PropertyType};
use crate::advisor::evaluation::ScoringConfig;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Standard rubric shipped with the service. Weights sum to 100; the
/// reference year comes from deploy configuration.
pub(crate) fn default_scoring_config(reference_year: i32) -> ScoringConfig {
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
        reference_year,
    }
}

pub(crate) fn parse_city(raw: &str) -> Result<City, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "mumbai" => Ok(City::Mumbai),
        "delhi" => Ok(City::Delhi),
        "bangalore" | "bengaluru" => Ok(City::Bangalore),
        "hyderabad" => Ok(City::Hyderabad),
        "chennai" => Ok(City::Chennai),
        "pune" => Ok(City::Pune),
        "kolkata" => Ok(City::Kolkata),
        "ahmedabad" => Ok(City::Ahmedabad),
        other => Err(format!("unknown city '{other}'")),
    }
}

pub(crate) fn parse_property_type(raw: &str) -> Result<PropertyType, String> {
    match raw
        .trim()
        .to_ascii_lowercase()
        .replace(['-', ' '], "_")
        .as_str()
    {
        "apartment" | "flat" => Ok(PropertyType::Apartment),
        "independent_house" | "house" => Ok(PropertyType::IndependentHouse),
        "villa" => Ok(PropertyType::Villa),
        "penthouse" => Ok(PropertyType::Penthouse),
        "studio" => Ok(PropertyType::Studio),
        other => Err(format!("unknown property type '{other}'")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_rubric_weights_sum_to_one_hundred() {
        assert_eq!(default_scoring_config(2025).maximum_score(), 100);
    }

    #[test]
    fn city_parser_accepts_aliases() {
        assert_eq!(parse_city("Bengaluru"), Ok(City::Bangalore));
        assert_eq!(parse_city(" pune "), Ok(City::Pune));
        assert!(parse_city("gotham").is_err());
    }

    #[test]
    fn property_type_parser_normalizes_separators() {
        assert_eq!(
            parse_property_type("independent-house"),
            Ok(PropertyType::IndependentHouse)
        );
        assert_eq!(parse_property_type("Flat"), Ok(PropertyType::Apartment));
        assert!(parse_property_type("castle").is_err());
    }
}

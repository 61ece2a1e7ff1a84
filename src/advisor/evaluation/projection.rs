use super::config::ScoringConfig;
use serde::{Deserialize, Serialize};

/// One point on the projected price curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionPoint {
    pub year: i32,
    pub projected_price_lakhs: f64,
}

/// Compound the current price over the configured horizon.
pub(crate) fn future_price(current_price_lakhs: f64, config: &ScoringConfig) -> f64 {
    current_price_lakhs * (1.0 + config.appreciation_rate).powi(config.horizon_years as i32)
}

/// Percentage change between the current price and its projection.
pub(crate) fn roi_percent(current_price_lakhs: f64, future_price_lakhs: f64) -> f64 {
    (future_price_lakhs - current_price_lakhs) / current_price_lakhs * 100.0
}

/// Year-by-year projection from the reference year through the horizon,
/// inclusive on both ends. Horizon 5 yields six points, the first being
/// the unappreciated current price.
pub(crate) fn price_series(current_price_lakhs: f64, config: &ScoringConfig) -> Vec<ProjectionPoint> {
    (0..=config.horizon_years)
        .map(|offset| ProjectionPoint {
            year: config.reference_year + offset as i32,
            projected_price_lakhs: current_price_lakhs
                * (1.0 + config.appreciation_rate).powi(offset as i32),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(rate: f64, horizon: u32) -> ScoringConfig {
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
            appreciation_rate: rate,
            horizon_years: horizon,
            reference_year: 2025,
        }
    }

    #[test]
    fn five_year_projection_compounds_at_eight_percent() {
        let future = future_price(120.0, &config(0.08, 5));
        assert!((future - 120.0 * 1.08_f64.powi(5)).abs() < 1e-9);
        assert!((future - 176.32).abs() < 0.01);
        assert!((roi_percent(120.0, future) - 46.93).abs() < 0.01);
    }

    #[test]
    fn zero_horizon_leaves_the_price_unchanged() {
        let future = future_price(120.0, &config(0.08, 0));
        assert!((future - 120.0).abs() < f64::EPSILON);
        assert!(roi_percent(120.0, future).abs() < f64::EPSILON);
    }

    #[test]
    fn projection_grows_monotonically_with_horizon() {
        let mut last = 0.0;
        for horizon in 0..=10 {
            let future = future_price(100.0, &config(0.08, horizon));
            assert!(future > last);
            last = future;
        }
    }

    #[test]
    fn series_spans_the_horizon_inclusive() {
        let series = price_series(120.0, &config(0.08, 5));
        assert_eq!(series.len(), 6);
        assert_eq!(series[0].year, 2025);
        assert_eq!(series[5].year, 2030);
        assert!((series[0].projected_price_lakhs - 120.0).abs() < f64::EPSILON);
        assert!(
            (series[5].projected_price_lakhs - future_price(120.0, &config(0.08, 5))).abs() < 1e-9
        );
        for window in series.windows(2) {
            assert!(window[1].projected_price_lakhs > window[0].projected_price_lakhs);
        }
    }
}

use chrono::Local;
use clap::Args;

use crate::advisor::domain::{AssessmentRequest, City, PropertyType};
use crate::advisor::{AdvisorService, AssessmentReport};
use crate::config::AdvisorConfig;
use crate::error::AppError;
use crate::infra::default_scoring_config;

#[derive(Args, Debug)]
pub(crate) struct AssessArgs {
    /// Bedroom-hall-kitchen count (1-5)
    #[arg(long)]
    pub(crate) bhk: u8,
    /// Built-up area in square feet (400-5000)
    #[arg(long)]
    pub(crate) size_sqft: f64,
    /// Asking price in lakhs
    #[arg(long)]
    pub(crate) price_lakhs: f64,
    /// Construction year (1990-2025)
    #[arg(long)]
    pub(crate) year_built: i32,
    /// Schools within reach (0-10)
    #[arg(long, default_value_t = 0)]
    pub(crate) schools: u8,
    /// Hospitals within reach (0-10)
    #[arg(long, default_value_t = 0)]
    pub(crate) hospitals: u8,
    /// Public transport access (0-10)
    #[arg(long, default_value_t = 0)]
    pub(crate) transit: u8,
    /// Dedicated parking spaces (0-4)
    #[arg(long, default_value_t = 0)]
    pub(crate) parking: u8,
    /// Floor the unit sits on
    #[arg(long, default_value_t = 0)]
    pub(crate) floor: u8,
    /// Floors in the building
    #[arg(long, default_value_t = 1)]
    pub(crate) total_floors: u8,
    /// Market the listing belongs to (e.g. pune, mumbai)
    #[arg(long, value_parser = crate::infra::parse_city)]
    pub(crate) city: Option<City>,
    /// Listing category (e.g. apartment, villa)
    #[arg(long, value_parser = crate::infra::parse_property_type)]
    pub(crate) property_type: Option<PropertyType>,
    /// Override the reference year used for age derivation
    #[arg(long)]
    pub(crate) reference_year: Option<i32>,
    /// Emit the full report as JSON instead of the text rendering
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Override the reference year used for age derivation
    #[arg(long)]
    pub(crate) reference_year: Option<i32>,
    /// Skip the raw JSON payload dump at the end of the demo
    #[arg(long)]
    pub(crate) skip_payload: bool,
}

pub(crate) fn run_assess(args: AssessArgs) -> Result<(), AppError> {
    let reference_year = args
        .reference_year
        .unwrap_or(AdvisorConfig::DEFAULT_REFERENCE_YEAR);
    let service = AdvisorService::new(default_scoring_config(reference_year));

    let request = AssessmentRequest {
        bhk: args.bhk,
        size_sqft: args.size_sqft,
        current_price_lakhs: args.price_lakhs,
        year_built: args.year_built,
        nearby_schools: args.schools,
        nearby_hospitals: args.hospitals,
        public_transport: args.transit,
        parking_spaces: args.parking,
        floor: args.floor,
        total_floors: args.total_floors,
        city: args.city,
        property_type: args.property_type,
    };

    let report = service.assess(request).map_err(AppError::from)?;

    if args.json {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{json}"),
            Err(err) => println!("report serialization unavailable: {err}"),
        }
        return Ok(());
    }

    render_assessment_report(&report);
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let reference_year = args
        .reference_year
        .unwrap_or(AdvisorConfig::DEFAULT_REFERENCE_YEAR);
    let service = AdvisorService::new(default_scoring_config(reference_year));

    println!("Housing investment advisor demo");

    let strong = AssessmentRequest {
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
        city: Some(City::Pune),
        property_type: Some(PropertyType::Apartment),
    };

    let stretched = AssessmentRequest {
        bhk: 5,
        size_sqft: 3200.0,
        current_price_lakhs: 450.0,
        year_built: 1998,
        nearby_schools: 2,
        nearby_hospitals: 1,
        public_transport: 3,
        parking_spaces: 2,
        floor: 0,
        total_floors: 2,
        city: Some(City::Mumbai),
        property_type: Some(PropertyType::Villa),
    };

    let strong_report = service.assess(strong).map_err(AppError::from)?;
    render_assessment_report(&strong_report);

    println!();
    let stretched_report = service.assess(stretched).map_err(AppError::from)?;
    render_assessment_report(&stretched_report);

    if !args.skip_payload {
        match serde_json::to_string_pretty(&strong_report) {
            Ok(json) => println!("\nAPI payload for the first property:\n{json}"),
            Err(err) => println!("\nAPI payload unavailable: {err}"),
        }
    }

    Ok(())
}

pub(crate) fn render_assessment_report(report: &AssessmentReport) {
    let profile = &report.profile;
    let assessment = &report.assessment;
    let horizon_years = report.projection.len().saturating_sub(1);

    println!("Property investment analysis (run {})", Local::now().date_naive());

    let mut context = Vec::new();
    if let Some(city) = profile.city {
        context.push(city.label().to_string());
    }
    if let Some(property_type) = profile.property_type {
        context.push(property_type.label().to_string());
    }
    if !context.is_empty() {
        println!("Listing: {}", context.join(" | "));
    }

    println!(
        "{} BHK | {:.0} sqft | floor {}/{} | built {}",
        profile.bhk, profile.size_sqft, profile.floor, profile.total_floors, profile.year_built
    );
    println!(
        "Current price {:.2}L ({:.0} per sqft)",
        assessment.current_price_lakhs, assessment.price_per_sqft
    );
    println!(
        "Projected price ({}Y) {:.2}L ({:+.1}% ROI)",
        horizon_years, assessment.future_price_lakhs, assessment.roi_percent
    );

    println!("\nScore breakdown");
    for component in &assessment.components {
        println!(
            "- {}: +{} ({})",
            component.factor.label(),
            component.points,
            component.notes
        );
    }

    println!(
        "\nInvestment score {}/100 -> {} (confidence {:.0}%)",
        assessment.score,
        assessment.recommendation.label(),
        assessment.confidence * 100.0
    );

    println!("\nProjected price path");
    for point in &report.projection {
        println!("- {}: {:.2}L", point.year, point.projected_price_lakhs);
    }

    if !report.insights.observations.is_empty() {
        println!("\nObservations");
        for note in &report.insights.observations {
            println!("- {note}");
        }
    }

    if !report.insights.recommendations.is_empty() {
        println!("\nRecommendations");
        for action in &report.insights.recommendations {
            println!("- {action}");
        }
    }
}

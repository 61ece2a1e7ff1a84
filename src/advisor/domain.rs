use serde::{Deserialize, Serialize};
use validator::Validate;

/// Markets the advisor recognizes. Collected for reporting context only;
/// no scoring rule reads the city.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum City {
    Mumbai,
    Delhi,
    Bangalore,
    Hyderabad,
    Chennai,
    Pune,
    Kolkata,
    Ahmedabad,
}

impl City {
    pub fn label(&self) -> &'static str {
        match self {
            City::Mumbai => "Mumbai",
            City::Delhi => "Delhi",
            City::Bangalore => "Bangalore",
            City::Hyderabad => "Hyderabad",
            City::Chennai => "Chennai",
            City::Pune => "Pune",
            City::Kolkata => "Kolkata",
            City::Ahmedabad => "Ahmedabad",
        }
    }
}

/// Listing categories, display-only like the city.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyType {
    Apartment,
    IndependentHouse,
    Villa,
    Penthouse,
    Studio,
}

impl PropertyType {
    pub fn label(&self) -> &'static str {
        match self {
            PropertyType::Apartment => "Apartment",
            PropertyType::IndependentHouse => "Independent House",
            PropertyType::Villa => "Villa",
            PropertyType::Penthouse => "Penthouse",
            PropertyType::Studio => "Studio",
        }
    }
}

/// Raw property attributes as submitted at the boundary. Every numeric
/// bound from the intake form is enforced here, before any scoring runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_floor_levels", skip_on_field_errors = false))]
pub struct AssessmentRequest {
    #[validate(range(min = 1, max = 5, message = "bhk must be between 1 and 5"))]
    pub bhk: u8,
    #[validate(range(min = 400.0, max = 5000.0, message = "size_sqft must be between 400 and 5000"))]
    pub size_sqft: f64,
    #[validate(range(
        min = 1.0,
        max = 10000.0,
        message = "current_price_lakhs must be between 1 and 10000"
    ))]
    pub current_price_lakhs: f64,
    #[validate(range(
        min = 1990,
        max = 2025,
        message = "year_built must be between 1990 and 2025"
    ))]
    pub year_built: i32,
    #[validate(range(max = 10, message = "nearby_schools must be at most 10"))]
    pub nearby_schools: u8,
    #[validate(range(max = 10, message = "nearby_hospitals must be at most 10"))]
    pub nearby_hospitals: u8,
    #[validate(range(max = 10, message = "public_transport must be at most 10"))]
    pub public_transport: u8,
    #[validate(range(max = 4, message = "parking_spaces must be at most 4"))]
    pub parking_spaces: u8,
    #[validate(range(max = 30, message = "floor must be at most 30"))]
    pub floor: u8,
    #[validate(range(min = 1, max = 30, message = "total_floors must be between 1 and 30"))]
    pub total_floors: u8,
    #[serde(default)]
    pub city: Option<City>,
    #[serde(default)]
    pub property_type: Option<PropertyType>,
}

fn validate_floor_levels(request: &AssessmentRequest) -> Result<(), validator::ValidationError> {
    if request.floor > request.total_floors {
        let mut error = validator::ValidationError::new("floor_above_total_floors");
        error.message = Some("floor cannot exceed total_floors".into());
        return Err(error);
    }
    Ok(())
}

/// Validated, immutable property snapshot handed to the scoring engine.
/// Constructed once per evaluation; nothing mutates it afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyProfile {
    pub bhk: u8,
    pub size_sqft: f64,
    pub current_price_lakhs: f64,
    pub year_built: i32,
    pub nearby_schools: u8,
    pub nearby_hospitals: u8,
    pub public_transport: u8,
    pub parking_spaces: u8,
    pub floor: u8,
    pub total_floors: u8,
    pub city: Option<City>,
    pub property_type: Option<PropertyType>,
}

impl PropertyProfile {
    /// Price per square foot derived from the lakh-denominated asking
    /// price (1 lakh = 100,000 rupees).
    pub fn price_per_sqft(&self) -> f64 {
        self.current_price_lakhs * 100_000.0 / self.size_sqft
    }

    /// Property age relative to the configured reference year.
    pub fn age_at(&self, reference_year: i32) -> i32 {
        reference_year - self.year_built
    }
}

impl From<AssessmentRequest> for PropertyProfile {
    fn from(request: AssessmentRequest) -> Self {
        Self {
            bhk: request.bhk,
            size_sqft: request.size_sqft,
            current_price_lakhs: request.current_price_lakhs,
            year_built: request.year_built,
            nearby_schools: request.nearby_schools,
            nearby_hospitals: request.nearby_hospitals,
            public_transport: request.public_transport,
            parking_spaces: request.parking_spaces,
            floor: request.floor,
            total_floors: request.total_floors,
            city: request.city,
            property_type: request.property_type,
        }
    }
}

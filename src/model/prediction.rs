//! Prediction request and response payloads.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::PropertyType;

/// Property details submitted to `POST /predict`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionInput {
    pub sqft: u32,
    pub bedrooms: u32,
    pub bathrooms: f64,
    pub location_rating: u8,
    pub property_age: u32,
    pub has_garage: bool,
    pub has_pool: bool,
    pub school_quality: u8,
    pub crime_rate: u8,
    pub property_type: PropertyType,
}

impl Default for PredictionInput {
    fn default() -> Self {
        Self {
            sqft: 2000,
            bedrooms: 3,
            bathrooms: 2.0,
            location_rating: 7,
            property_age: 10,
            has_garage: true,
            has_pool: false,
            school_quality: 8,
            crime_rate: 3,
            property_type: PropertyType::SingleFamily,
        }
    }
}

/// A field of [`PredictionInput`] outside its accepted range.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        min: f64,
        max: f64,
        value: f64,
    },

    #[error("bathrooms must be a multiple of 0.5, got {value}")]
    NotHalfStep { value: f64 },
}

fn check_range(field: &'static str, value: f64, min: f64, max: f64) -> Result<(), ValidationError> {
    if value < min || value > max || value.is_nan() {
        return Err(ValidationError::OutOfRange {
            field,
            min,
            max,
            value,
        });
    }
    Ok(())
}

impl PredictionInput {
    /// Checks every field against the ranges the service accepts.
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_range("sqft", self.sqft as f64, 500.0, 10_000.0)?;
        check_range("bedrooms", self.bedrooms as f64, 1.0, 10.0)?;
        check_range("bathrooms", self.bathrooms, 1.0, 10.0)?;
        if (self.bathrooms * 2.0).fract() != 0.0 {
            return Err(ValidationError::NotHalfStep {
                value: self.bathrooms,
            });
        }
        check_range("location_rating", self.location_rating as f64, 1.0, 10.0)?;
        check_range("property_age", self.property_age as f64, 0.0, 150.0)?;
        check_range("school_quality", self.school_quality as f64, 1.0, 10.0)?;
        check_range("crime_rate", self.crime_rate as f64, 1.0, 10.0)?;
        Ok(())
    }
}

/// Local market statistics returned with a prediction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketComparison {
    pub average: f64,
    pub maximum: f64,
    pub minimum: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyTrend {
    pub month: String,
    pub price: f64,
}

/// Valuation returned by `POST /predict`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub predicted_price: f64,
    /// Percent, e.g. `91.3`.
    pub confidence: f64,
    /// Percent increase reachable with the recommended improvements.
    #[serde(default)]
    pub potential_increase: f64,
    #[serde(default)]
    pub recommended_actions: Vec<String>,
    pub historical_comparison: MarketComparison,
    #[serde(default)]
    pub monthly_trends: Vec<MonthlyTrend>,
}

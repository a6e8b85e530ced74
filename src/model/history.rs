//! Historical prediction entries and their table behaviour.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::table::{SortKey, TableRow};

/// Category of a property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyType {
    SingleFamily,
    MultiFamily,
    Condo,
    Apartment,
    Townhouse,
}

impl PropertyType {
    pub fn all() -> &'static [PropertyType] {
        &[
            PropertyType::SingleFamily,
            PropertyType::MultiFamily,
            PropertyType::Condo,
            PropertyType::Apartment,
            PropertyType::Townhouse,
        ]
    }

    /// Wire name, e.g. `single_family`.
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyType::SingleFamily => "single_family",
            PropertyType::MultiFamily => "multi_family",
            PropertyType::Condo => "condo",
            PropertyType::Apartment => "apartment",
            PropertyType::Townhouse => "townhouse",
        }
    }

    /// Display name with the first underscore replaced, e.g. `single family`.
    pub fn label(&self) -> String {
        self.as_str().replacen('_', " ", 1)
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PropertyType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['-', ' '], "_");
        PropertyType::all()
            .iter()
            .copied()
            .find(|t| t.as_str() == normalized)
            .ok_or_else(|| {
                let names: Vec<&str> = PropertyType::all().iter().map(|t| t.as_str()).collect();
                format!("unknown property type '{}', expected one of: {}", s, names.join(", "))
            })
    }
}

/// One historical prediction entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub id: u32,
    pub date: NaiveDate,
    pub property_type: PropertyType,
    pub sqft: u32,
    pub bedrooms: u32,
    pub bathrooms: f64,
    pub location_rating: u8,
    pub property_age: u32,
    pub has_garage: bool,
    pub has_pool: bool,
    pub school_quality: u8,
    pub crime_rate: u8,
    pub predicted_price: f64,
    pub actual_price: f64,
    /// Zero when the property has not been sold.
    #[serde(default)]
    pub sale_price: f64,
}

/// Prediction accuracy against the actual price, in percent (one decimal).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Accuracy {
    Accurate(f64),
    Off(f64),
}

impl Accuracy {
    pub fn is_accurate(&self) -> bool {
        matches!(self, Accuracy::Accurate(_))
    }
}

impl HistoryRecord {
    pub fn accuracy(&self) -> Accuracy {
        if self.predicted_price == 0.0 {
            return Accuracy::Off(0.0);
        }
        let diff = self.actual_price - self.predicted_price;
        let pct = ((diff / self.predicted_price) * 1000.0).round() / 10.0;
        if pct.abs() < 5.0 {
            Accuracy::Accurate(pct)
        } else {
            Accuracy::Off(pct)
        }
    }

    pub fn is_sold(&self) -> bool {
        self.sale_price > 0.0
    }
}

/// Sortable fields of a [`HistoryRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HistoryField {
    Id,
    Date,
    PropertyType,
    Sqft,
    Bedrooms,
    Bathrooms,
    LocationRating,
    PropertyAge,
    HasGarage,
    HasPool,
    SchoolQuality,
    CrimeRate,
    PredictedPrice,
    ActualPrice,
    SalePrice,
}

impl HistoryField {
    pub fn all() -> &'static [HistoryField] {
        &[
            HistoryField::Id,
            HistoryField::Date,
            HistoryField::PropertyType,
            HistoryField::Sqft,
            HistoryField::Bedrooms,
            HistoryField::Bathrooms,
            HistoryField::LocationRating,
            HistoryField::PropertyAge,
            HistoryField::HasGarage,
            HistoryField::HasPool,
            HistoryField::SchoolQuality,
            HistoryField::CrimeRate,
            HistoryField::PredictedPrice,
            HistoryField::ActualPrice,
            HistoryField::SalePrice,
        ]
    }

    /// Field name as it appears in the JSON record.
    pub fn name(&self) -> &'static str {
        match self {
            HistoryField::Id => "id",
            HistoryField::Date => "date",
            HistoryField::PropertyType => "property_type",
            HistoryField::Sqft => "sqft",
            HistoryField::Bedrooms => "bedrooms",
            HistoryField::Bathrooms => "bathrooms",
            HistoryField::LocationRating => "location_rating",
            HistoryField::PropertyAge => "property_age",
            HistoryField::HasGarage => "has_garage",
            HistoryField::HasPool => "has_pool",
            HistoryField::SchoolQuality => "school_quality",
            HistoryField::CrimeRate => "crime_rate",
            HistoryField::PredictedPrice => "predicted_price",
            HistoryField::ActualPrice => "actual_price",
            HistoryField::SalePrice => "sale_price",
        }
    }
}

impl FromStr for HistoryField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('-', "_");
        HistoryField::all()
            .iter()
            .copied()
            .find(|f| f.name() == normalized)
            .ok_or_else(|| format!("unknown field '{}'", s))
    }
}

impl TableRow for HistoryRecord {
    type Field = HistoryField;

    fn sort_key(&self, field: HistoryField) -> SortKey {
        match field {
            HistoryField::Id => SortKey::Integer(self.id as i64),
            HistoryField::Date => SortKey::Integer(self.date.num_days_from_ce() as i64),
            HistoryField::PropertyType => SortKey::String(self.property_type.as_str().to_string()),
            HistoryField::Sqft => SortKey::Integer(self.sqft as i64),
            HistoryField::Bedrooms => SortKey::Integer(self.bedrooms as i64),
            HistoryField::Bathrooms => SortKey::Float(self.bathrooms),
            HistoryField::LocationRating => SortKey::Integer(self.location_rating as i64),
            HistoryField::PropertyAge => SortKey::Integer(self.property_age as i64),
            HistoryField::HasGarage => SortKey::Integer(self.has_garage as i64),
            HistoryField::HasPool => SortKey::Integer(self.has_pool as i64),
            HistoryField::SchoolQuality => SortKey::Integer(self.school_quality as i64),
            HistoryField::CrimeRate => SortKey::Integer(self.crime_rate as i64),
            HistoryField::PredictedPrice => SortKey::Float(self.predicted_price),
            HistoryField::ActualPrice => SortKey::Float(self.actual_price),
            HistoryField::SalePrice => SortKey::Float(self.sale_price),
        }
    }

    /// The property type is matched against the lowercased term; date, size
    /// and predicted price are matched case-sensitively on their string form.
    fn matches_filter(&self, term: &str) -> bool {
        self.property_type.as_str().contains(&term.to_lowercase())
            || self.date.to_string().contains(term)
            || self.sqft.to_string().contains(term)
            || self.predicted_price.to_string().contains(term)
    }
}

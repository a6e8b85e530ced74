//! Built-in demonstration history.

use chrono::NaiveDate;

use crate::model::{HistoryRecord, PropertyType};

use super::{HistorySource, ProviderError};

const SAMPLE_COUNT: u32 = 25;

const SAMPLE_TYPES: [PropertyType; 5] = [
    PropertyType::SingleFamily,
    PropertyType::MultiFamily,
    PropertyType::Condo,
    PropertyType::Apartment,
    PropertyType::Townhouse,
];

fn sample_record(i: u32) -> Option<HistoryRecord> {
    // Five entries per month, counting back from mid-October 2023.
    let date = NaiveDate::from_ymd_opt(2023, 10 - i / 5, 15 - i % 5)?;
    Some(HistoryRecord {
        id: i + 1,
        date,
        property_type: SAMPLE_TYPES[(i % 5) as usize],
        sqft: 1800 + i * 100,
        bedrooms: 2 + i % 4,
        bathrooms: 1.5 + (i % 3) as f64,
        location_rating: 5 + (i % 6) as u8,
        property_age: 5 + i * 2,
        has_garage: i % 3 == 0,
        has_pool: i % 5 == 0,
        school_quality: 6 + (i % 5) as u8,
        crime_rate: 2 + (i % 8) as u8,
        predicted_price: (350_000 + i * 15_000) as f64,
        actual_price: (345_000 + i * 15_000 + (i % 3) * 10_000) as f64,
        sale_price: if i % 2 == 0 {
            (342_000 + i * 15_000) as f64
        } else {
            0.0
        },
    })
}

/// The deterministic 25-record demonstration set.
pub fn sample_records() -> Vec<HistoryRecord> {
    (0..SAMPLE_COUNT).filter_map(sample_record).collect()
}

/// Source serving [`sample_records`].
#[derive(Debug, Default)]
pub struct SampleSource;

impl SampleSource {
    pub fn new() -> Self {
        Self
    }
}

impl HistorySource for SampleSource {
    fn name(&self) -> &str {
        "sample"
    }

    fn load(&mut self) -> Result<Vec<HistoryRecord>, ProviderError> {
        Ok(sample_records())
    }
}

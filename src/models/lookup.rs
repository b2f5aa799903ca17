// src/models/lookup.rs
// DOCUMENTATION: Lookup inputs - the validated zip code and geocoded coordinate
// PURPOSE: Reject malformed input before any provider call is made

use crate::errors::LookupError;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// A 5-digit numeric zip code
/// DOCUMENTATION: Only constructible through LookupQuery::parse
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Validate)]
pub struct LookupQuery {
    #[validate(length(equal = 5), custom = "validate_ascii_digits")]
    zip_code: String,
}

fn validate_ascii_digits(value: &str) -> Result<(), ValidationError> {
    if value.bytes().all(|b| b.is_ascii_digit()) {
        Ok(())
    } else {
        Err(ValidationError::new("ascii_digits"))
    }
}

impl LookupQuery {
    /// Validate raw user input against `^[0-9]{5}$`
    pub fn parse(raw: &str) -> Result<Self, LookupError> {
        let query = Self {
            zip_code: raw.to_string(),
        };
        query.validate().map_err(|e| {
            log::debug!("Rejected zip code {:?}: {}", raw, e);
            LookupError::InvalidInput
        })?;
        Ok(query)
    }

    pub fn as_str(&self) -> &str {
        &self.zip_code
    }
}

/// Geographic point returned by the geocoding provider
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    /// Both components must be finite
    pub fn new(lat: f64, lng: f64) -> Option<Self> {
        if lat.is_finite() && lng.is_finite() {
            Some(Self { lat, lng })
        } else {
            None
        }
    }

    /// `lat,lng` as expected by the nearby search `location` parameter
    pub fn to_query_value(&self) -> String {
        format!("{},{}", self.lat, self.lng)
    }
}

// src/models/camp.rs
// DOCUMENTATION: Campground records and the lookup status exposed to callers
// PURPOSE: Normalized output shape of a lookup

use crate::errors::LookupError;
use serde::{Deserialize, Serialize};

/// Prefix of the Google Maps link built for every camp
pub const MAPS_PLACE_LINK_PREFIX: &str = "https://www.google.com/maps/place/?q=place_id:";

/// One entry of a nearby search, as far as the locator cares
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct NearbyPlace {
    pub place_id: String,
    pub name: String,
    pub vicinity: String,
}

/// A campground shown to the user
/// DOCUMENTATION: Built fresh on every successful lookup, never mutated
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CampRecord {
    pub id: String,
    pub name: String,
    pub address: String,
    pub link: String,
}

impl CampRecord {
    pub fn from_place(place: NearbyPlace) -> Self {
        let link = format!("{}{}", MAPS_PLACE_LINK_PREFIX, place.place_id);
        Self {
            id: place.place_id,
            name: place.name,
            address: place.vicinity,
            link,
        }
    }
}

/// State of the locator as seen by the presentation layer
/// DOCUMENTATION: Serialized with a `state` tag, e.g. `{"state":"success","camps":[...]}`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum LookupStatus {
    Idle,
    Loading,
    Error(LookupError),
    Success { camps: Vec<CampRecord> },
}

impl LookupStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, LookupStatus::Loading)
    }

    /// Records of a successful lookup; empty in every other state
    #[allow(dead_code)]
    pub fn camps(&self) -> &[CampRecord] {
        match self {
            LookupStatus::Success { camps } => camps,
            _ => &[],
        }
    }

    #[allow(dead_code)]
    pub fn error(&self) -> Option<&LookupError> {
        match self {
            LookupStatus::Error(e) => Some(e),
            _ => None,
        }
    }
}

impl From<Result<Vec<CampRecord>, LookupError>> for LookupStatus {
    fn from(outcome: Result<Vec<CampRecord>, LookupError>) -> Self {
        match outcome {
            Ok(camps) => LookupStatus::Success { camps },
            Err(e) => LookupStatus::Error(e),
        }
    }
}

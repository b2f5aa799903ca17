// src/services/provider.rs
// DOCUMENTATION: Seam between the locator and the external location services
// PURPOSE: Lets the locator run against Google in production and fakes in tests

use crate::errors::LookupError;
use crate::models::{Coordinate, LookupQuery, NearbyPlace};

/// Geocoding plus nearby-search provider
#[allow(async_fn_in_trait)]
pub trait LocationProvider {
    /// Location of the first geocoding result, `None` when nothing matched
    async fn geocode(&self, query: &LookupQuery) -> Result<Option<Coordinate>, LookupError>;

    /// Campgrounds around `center`, in provider order
    async fn nearby_campgrounds(&self, center: Coordinate)
        -> Result<Vec<NearbyPlace>, LookupError>;
}

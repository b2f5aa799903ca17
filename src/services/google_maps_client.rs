// src/services/google_maps_client.rs
// DOCUMENTATION: Google Geocoding and Places API client
// PURPOSE: Resolve a zip code to coordinates and search campgrounds around them

use crate::config::Config;
use crate::errors::LookupError;
use crate::models::{Coordinate, LookupQuery, NearbyPlace};
use crate::services::LocationProvider;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;

/// Nearby search radius in meters (10 miles)
pub const SEARCH_RADIUS_METERS: u32 = 16093;

/// Place type filter for nearby search
pub const CAMPGROUND_TYPE: &str = "campground";

/// Longest slice of a non-2xx response body kept in errors and logs
const ERROR_BODY_LIMIT: usize = 200;

/// Google Maps API client
/// DOCUMENTATION: Holds the credential and both endpoint URLs
pub struct GoogleMapsClient {
    /// HTTP client for making requests
    client: Client,
    /// Google Maps API key
    api_key: String,
    /// Full URL of the geocode JSON endpoint
    geocode_endpoint: String,
    /// Full URL of the nearby search JSON endpoint
    places_endpoint: String,
}

/// Response from the Geocoding API
#[derive(Debug, Deserialize)]
pub struct GeocodeResponse {
    #[serde(default)]
    pub results: Vec<GeocodeResult>,
    pub status: Option<String>,
    pub error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct GeocodeResult {
    pub geometry: GoogleGeometry,
}

#[derive(Debug, Deserialize)]
pub struct GoogleGeometry {
    pub location: GoogleLocation,
}

#[derive(Debug, Deserialize)]
pub struct GoogleLocation {
    pub lat: f64,
    pub lng: f64,
}

/// Response from Google Places Nearby Search
#[derive(Debug, Deserialize)]
pub struct NearbySearchResponse {
    #[serde(default)]
    pub results: Vec<GooglePlace>,
    pub status: Option<String>,
    pub error_message: Option<String>,
}

/// Individual place from Google Places API
#[derive(Debug, Deserialize)]
pub struct GooglePlace {
    /// Google's unique place identifier
    pub place_id: String,
    pub name: String,
    /// Short address (Nearby Search)
    pub vicinity: Option<String>,
    pub formatted_address: Option<String>,
}

impl From<GooglePlace> for NearbyPlace {
    fn from(place: GooglePlace) -> Self {
        NearbyPlace {
            place_id: place.place_id,
            name: place.name,
            vicinity: place
                .vicinity
                .or(place.formatted_address)
                .unwrap_or_default(),
        }
    }
}

/// Map the `status` field every Google response carries
fn check_api_status(
    api: &str,
    status: Option<&str>,
    error_message: Option<String>,
) -> Result<(), LookupError> {
    match status {
        None | Some("OK") | Some("ZERO_RESULTS") => Ok(()),
        Some(other) => {
            let msg = error_message.unwrap_or_else(|| format!("Provider status {}", other));
            log::error!("Google {} API returned {}: {}", api, other, msg);
            Err(LookupError::TransportOrParse(msg))
        }
    }
}

fn truncate_chars(text: &str, limit: usize) -> &str {
    match text.char_indices().nth(limit) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

impl GoogleMapsClient {
    /// Create new Google Maps API client
    /// DOCUMENTATION: `timeout` of None leaves requests unbounded
    pub fn new(
        api_key: String,
        geocode_endpoint: String,
        places_endpoint: String,
        timeout: Option<Duration>,
    ) -> Result<Self, reqwest::Error> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            api_key,
            geocode_endpoint,
            places_endpoint,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, reqwest::Error> {
        Self::new(
            config.google_maps_api_key.clone(),
            config.geocode_endpoint.clone(),
            config.places_endpoint.clone(),
            config.request_timeout(),
        )
    }

    /// GET `url` and decode the JSON body
    /// DOCUMENTATION: Non-2xx responses fail before the body is parsed
    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        params: &[(&str, &str)],
    ) -> Result<T, LookupError> {
        let response = self
            .client
            .get(url)
            .query(params)
            .query(&[("key", self.api_key.as_str())])
            .send()
            .await
            .map_err(|e| {
                let e = e.without_url();
                log::error!("Google API request failed: {}", e);
                LookupError::from(e)
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            let excerpt = truncate_chars(body.trim(), ERROR_BODY_LIMIT);
            log::error!("Google API error {}: {}", status, excerpt);
            return Err(LookupError::TransportOrParse(format!(
                "API error {}: {}",
                status, excerpt
            )));
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| {
            log::error!("Failed to parse Google API response: {}", e);
            LookupError::from(e)
        })
    }
}

impl LocationProvider for GoogleMapsClient {
    async fn geocode(&self, query: &LookupQuery) -> Result<Option<Coordinate>, LookupError> {
        log::debug!("Google geocode: address={}", query.as_str());

        let response: GeocodeResponse = self
            .get_json(&self.geocode_endpoint, &[("address", query.as_str())])
            .await?;
        check_api_status("Geocoding", response.status.as_deref(), response.error_message)?;

        let Some(first) = response.results.into_iter().next() else {
            log::info!("Google geocode returned no results for {}", query.as_str());
            return Ok(None);
        };

        let location = first.geometry.location;
        Coordinate::new(location.lat, location.lng)
            .map(Some)
            .ok_or_else(|| {
                LookupError::TransportOrParse("Geocode returned a non-finite location".to_string())
            })
    }

    async fn nearby_campgrounds(
        &self,
        center: Coordinate,
    ) -> Result<Vec<NearbyPlace>, LookupError> {
        log::debug!(
            "Google Places nearby search: lat={}, lng={}, radius={}",
            center.lat,
            center.lng,
            SEARCH_RADIUS_METERS
        );

        let location = center.to_query_value();
        let radius = SEARCH_RADIUS_METERS.to_string();
        let response: NearbySearchResponse = self
            .get_json(
                &self.places_endpoint,
                &[
                    ("location", location.as_str()),
                    ("radius", radius.as_str()),
                    ("type", CAMPGROUND_TYPE),
                ],
            )
            .await?;
        check_api_status("Places", response.status.as_deref(), response.error_message)?;

        log::info!(
            "Google Places search returned {} results",
            response.results.len()
        );
        Ok(response.results.into_iter().map(NearbyPlace::from).collect())
    }
}

// src/services/google_places_client.rs
// DOCUMENTATION: Google Places API client
// PURPOSE: Handle communication with Google Places API for place data retrieval

use crate::config::SearchArea;
use crate::errors::PlacesError;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Fields requested from Place Details
/// DOCUMENTATION: Only what the actor record needs; billing depends on this list
pub const DETAILS_FIELDS: &str = "place_id,name,formatted_address,formatted_phone_number,website,opening_hours,geometry,types,photos,rating,user_ratings_total,url,vicinity";

/// Read side of the Places API used by the exporter
/// DOCUMENTATION: Implemented by GooglePlacesClient; tests substitute an in-memory fake
#[async_trait]
pub trait PlacesApi: Send + Sync {
    /// Places of one type around the search area
    async fn nearby_search(
        &self,
        area: &SearchArea,
        place_type: &str,
    ) -> Result<Vec<GooglePlaceSummary>, PlacesError>;

    /// Full record for one place
    async fn get_place_details(&self, place_id: &str) -> Result<GooglePlace, PlacesError>;
}

/// Google Places API client
/// DOCUMENTATION: Handles authentication and API calls to Google Places
pub struct GooglePlacesClient {
    /// HTTP client for making requests
    client: Client,
    /// Google Places API key
    api_key: String,
    /// Base URL for Google Places API
    base_url: String,
}

/// Response from Google Places Nearby Search
/// DOCUMENTATION: Parsed response from Google Places API
#[derive(Debug, Deserialize)]
pub struct GooglePlacesResponse {
    /// Results array from API
    #[serde(default)]
    pub results: Vec<GooglePlaceSummary>,
    /// Status of the API call
    pub status: String,
    /// Error message (if status is not OK)
    pub error_message: Option<String>,
}

/// Place as listed by Nearby Search
/// DOCUMENTATION: Only the identifier matters, details are fetched separately
#[derive(Debug, Clone, Deserialize)]
pub struct GooglePlaceSummary {
    /// Google's unique place identifier; results without one are dropped
    #[serde(default)]
    pub place_id: String,
    /// Place name
    #[serde(default)]
    pub name: String,
}

/// Response from Google Place Details
#[derive(Debug, Deserialize)]
struct GoogleDetailsResponse {
    result: Option<GooglePlace>,
    status: String,
    error_message: Option<String>,
}

/// Detailed place from Google Places API
/// DOCUMENTATION: Place data structure returned by Place Details.
/// Every field the API may omit is optional or defaulted.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GooglePlace {
    /// Google's unique place identifier
    #[serde(default)]
    pub place_id: String,
    /// Place name
    #[serde(default)]
    pub name: String,
    /// Place types array (e.g., ["restaurant", "food", "point_of_interest"])
    #[serde(default)]
    pub types: Vec<String>,
    /// Geographic location
    pub geometry: GoogleGeometry,
    /// Formatted address (detailed)
    pub formatted_address: Option<String>,
    /// Vicinity (short address)
    pub vicinity: Option<String>,
    /// Rating (0-5)
    pub rating: Option<f64>,
    /// Number of user ratings
    pub user_ratings_total: Option<u32>,
    /// Opening hours
    pub opening_hours: Option<GoogleOpeningHours>,
    /// Phone number (formatted for local use)
    pub formatted_phone_number: Option<String>,
    /// Website URL
    pub website: Option<String>,
    /// Google Maps URL
    pub url: Option<String>,
    /// Photos
    pub photos: Option<Vec<GooglePhoto>>,
}

/// Geographic location from Google
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GoogleGeometry {
    /// Location coordinates
    pub location: GoogleLocation,
}

/// Coordinates from Google
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GoogleLocation {
    /// Latitude
    pub lat: f64,
    /// Longitude
    pub lng: f64,
}

/// Opening hours metadata
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GoogleOpeningHours {
    /// Whether place is currently open
    pub open_now: Option<bool>,
    /// One human-readable line per weekday
    pub weekday_text: Option<Vec<String>>,
}

/// Photo from Google Places
/// DOCUMENTATION: Place photo data structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GooglePhoto {
    /// Photo reference (used to fetch actual photo)
    pub photo_reference: String,
    /// Photo width in pixels
    pub width: Option<i32>,
    /// Photo height in pixels
    pub height: Option<i32>,
    /// HTML attributions (required by Google)
    pub html_attributions: Option<Vec<String>>,
}

impl GooglePlacesClient {
    /// Create new Google Places API client
    /// DOCUMENTATION: Initializes client with API key, base URL and request timeout
    pub fn new(
        api_key: String,
        base_url: String,
        timeout: Duration,
    ) -> Result<Self, PlacesError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| PlacesError::TransportError(format!("HTTP client init failed: {}", e)))?;

        Ok(Self {
            client,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Get API key
    pub fn get_api_key(&self) -> &str {
        &self.api_key
    }

    /// Get base URL
    pub fn get_base_url(&self) -> &str {
        &self.base_url
    }

    /// Perform nearby search for places
    /// DOCUMENTATION: Searches for places of one type around the search area
    ///
    /// # Arguments
    /// * `area` - Center point and radius
    /// * `place_type` - Type filter (e.g., "restaurant", "bakery")
    ///
    /// # Returns
    /// Place summaries; empty when the API reports ZERO_RESULTS
    pub async fn nearby_search(
        &self,
        area: &SearchArea,
        place_type: &str,
    ) -> Result<Vec<GooglePlaceSummary>, PlacesError> {
        let url = format!("{}/nearbysearch/json", self.base_url);

        let location = area.location_param();
        let radius = area.radius_m.to_string();
        let params = [
            ("location", location.as_str()),
            ("radius", radius.as_str()),
            ("type", place_type),
            ("key", self.api_key.as_str()),
        ];

        log::debug!(
            "Google Places nearby search: location={}, radius={}, type={}",
            location,
            radius,
            place_type
        );

        let response = self
            .client
            .get(&url)
            .query(&params)
            .send()
            .await
            .map_err(|e| PlacesError::TransportError(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(PlacesError::ExternalApiError(format!(
                "HTTP {}: {}",
                status, body
            )));
        }

        let api_response: GooglePlacesResponse = response
            .json()
            .await
            .map_err(|e| PlacesError::TransportError(format!("Parse error: {}", e)))?;

        match api_response.status.as_str() {
            "OK" => {
                log::debug!(
                    "Google Places search returned {} results",
                    api_response.results.len()
                );
                let (places, unidentified): (Vec<_>, Vec<_>) = api_response
                    .results
                    .into_iter()
                    .partition(|place| !place.place_id.is_empty());
                if !unidentified.is_empty() {
                    log::debug!("Skipping {} results without place_id", unidentified.len());
                }
                Ok(places)
            }
            "ZERO_RESULTS" => Ok(Vec::new()),
            status => Err(status_error(status, api_response.error_message)),
        }
    }

    /// Get detailed information about a specific place
    /// DOCUMENTATION: Retrieves the DETAILS_FIELDS subset by place_id
    ///
    /// # Arguments
    /// * `place_id` - Google Place ID
    pub async fn get_place_details(&self, place_id: &str) -> Result<GooglePlace, PlacesError> {
        let url = format!("{}/details/json", self.base_url);

        let params = [
            ("place_id", place_id),
            ("fields", DETAILS_FIELDS),
            ("key", self.api_key.as_str()),
        ];

        log::debug!("Google Places details lookup: place_id={}", place_id);

        let response = self
            .client
            .get(&url)
            .query(&params)
            .send()
            .await
            .map_err(|e| PlacesError::TransportError(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(PlacesError::ExternalApiError(format!(
                "HTTP {}",
                response.status()
            )));
        }

        let api_response: GoogleDetailsResponse = response
            .json()
            .await
            .map_err(|e| PlacesError::TransportError(format!("Parse error: {}", e)))?;

        if api_response.status != "OK" {
            return Err(status_error(&api_response.status, api_response.error_message));
        }

        api_response.result.ok_or_else(|| {
            PlacesError::ExternalApiError("Details status OK without result".to_string())
        })
    }
}

/// Map a non-OK Places status to an error
fn status_error(status: &str, error_message: Option<String>) -> PlacesError {
    match status {
        "OVER_QUERY_LIMIT" => PlacesError::RateLimitExceeded,
        _ => match error_message {
            Some(msg) => PlacesError::ExternalApiError(format!("{}: {}", status, msg)),
            None => PlacesError::ExternalApiError(status.to_string()),
        },
    }
}

#[async_trait]
impl PlacesApi for GooglePlacesClient {
    async fn nearby_search(
        &self,
        area: &SearchArea,
        place_type: &str,
    ) -> Result<Vec<GooglePlaceSummary>, PlacesError> {
        GooglePlacesClient::nearby_search(self, area, place_type).await
    }

    async fn get_place_details(&self, place_id: &str) -> Result<GooglePlace, PlacesError> {
        GooglePlacesClient::get_place_details(self, place_id).await
    }
}

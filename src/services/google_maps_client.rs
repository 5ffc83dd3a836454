// src/services/google_maps_client.rs
// DOCUMENTATION: Google Maps Platform client
// PURPOSE: Nearby search, place details, distance matrix and photo URLs

use crate::errors::FinderError;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Google Maps web services client
/// DOCUMENTATION: Handles authentication and API calls to Google Maps.
/// Built once at startup; the inner reqwest client pools connections.
#[derive(Clone)]
pub struct GoogleMapsClient {
    /// HTTP client for making requests
    client: Client,
    /// Google Maps API key
    api_key: String,
    /// Base URL for Google Maps web services (without trailing slash)
    base_url: String,
}

/// Response from Google Places Nearby Search
#[derive(Debug, Deserialize)]
pub struct NearbySearchResponse {
    /// Results array from API
    #[serde(default)]
    pub results: Vec<NearbyPlace>,
    /// Status of the API call
    pub status: String,
    /// Error message (if status is not OK)
    pub error_message: Option<String>,
}

/// Individual candidate from Nearby Search
#[derive(Debug, Clone, Deserialize)]
pub struct NearbyPlace {
    /// Google's unique place identifier
    pub place_id: String,
    /// Place name
    pub name: String,
    /// Geographic location
    pub geometry: GoogleGeometry,
    /// Category icon URL
    pub icon: String,
    /// Rating (0-5)
    pub rating: Option<f64>,
    /// Number of user ratings
    pub user_ratings_total: Option<i64>,
}

/// Geographic location from Google
#[derive(Debug, Clone, Deserialize)]
pub struct GoogleGeometry {
    /// Location coordinates
    pub location: GoogleLocation,
}

/// Coordinates from Google
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct GoogleLocation {
    /// Latitude
    pub lat: f64,
    /// Longitude
    pub lng: f64,
}

/// Place Details result, limited to the fields we request
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlaceDetails {
    pub formatted_address: Option<String>,
    pub formatted_phone_number: Option<String>,
    pub opening_hours: Option<GoogleOpeningHours>,
    pub photos: Option<Vec<GooglePhoto>>,
}

/// Opening hours metadata
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GoogleOpeningHours {
    /// Whether place is currently open
    pub open_now: Option<bool>,
    /// Opening periods
    pub periods: Option<Vec<GoogleOpeningPeriod>>,
}

/// Google opening period metadata
#[derive(Debug, Clone, Deserialize)]
pub struct GoogleOpeningPeriod {
    pub open: Option<GoogleOpeningTime>,
    pub close: Option<GoogleOpeningTime>,
}

/// Google opening time entry
#[derive(Debug, Clone, Deserialize)]
pub struct GoogleOpeningTime {
    /// 24h clock time as "HHMM"
    pub time: Option<String>,
}

/// Photo from Google Places
#[derive(Debug, Clone, Deserialize)]
pub struct GooglePhoto {
    /// Photo reference (used to fetch actual photo)
    pub photo_reference: String,
}

#[derive(Debug, Deserialize)]
struct DetailsResponse {
    result: Option<PlaceDetails>,
    status: String,
    error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct DistanceMatrixResponse {
    status: String,
    #[serde(default)]
    rows: Vec<DistanceMatrixRow>,
    error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct DistanceMatrixRow {
    #[serde(default)]
    elements: Vec<DistanceMatrixElement>,
}

#[derive(Debug, Deserialize)]
struct DistanceMatrixElement {
    status: String,
    distance: Option<TextValue>,
    duration: Option<TextValue>,
}

#[derive(Debug, Deserialize)]
struct TextValue {
    text: String,
}

/// Distance and travel time from an origin to one destination
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceInfo {
    /// Human readable distance (e.g., "3.2 km")
    pub distance_text: String,
    /// Human readable travel time (e.g., "9 mins")
    pub duration_text: String,
}

impl GoogleMapsClient {
    /// Create new Google Maps client
    /// DOCUMENTATION: base_url is normally https://maps.googleapis.com/maps/api;
    /// tests point it at a mock server
    pub fn with_base_url(api_key: String, base_url: &str) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Perform nearby search for places
    /// DOCUMENTATION: Searches for places near a "{lat},{lng}" location string.
    /// The location is forwarded verbatim; Google decides what to do with it.
    ///
    /// # Arguments
    /// * `location` - Center point as "lat,lng"
    /// * `radius` - Search radius in meters
    /// * `place_type` - Type filter (e.g., "hospital")
    /// * `keyword` - Keyword filter (e.g., "urgent care")
    pub async fn nearby_search(
        &self,
        location: &str,
        radius: u32,
        place_type: &str,
        keyword: &str,
    ) -> Result<Vec<NearbyPlace>, FinderError> {
        let url = format!("{}/place/nearbysearch/json", self.base_url);
        let radius = radius.to_string();
        let params = [
            ("location", location),
            ("radius", radius.as_str()),
            ("keyword", keyword),
            ("type", place_type),
            ("key", self.api_key.as_str()),
        ];

        log::debug!(
            "Google Places nearby search: location={}, radius={}, type={}, keyword={}",
            location,
            radius,
            place_type,
            keyword
        );

        let api_response: NearbySearchResponse = self.get_json(&url, &params).await?;

        match api_response.status.as_str() {
            "OK" | "ZERO_RESULTS" => {
                log::info!(
                    "Google Places search returned {} results",
                    api_response.results.len()
                );
                Ok(api_response.results)
            }
            other => {
                let msg = api_response
                    .error_message
                    .unwrap_or_else(|| format!("Unknown status: {}", other));
                log::error!("Google Places nearby search failed ({}): {}", other, msg);
                Err(FinderError::ExternalApiError(msg))
            }
        }
    }

    /// Get the requested details of a specific place
    ///
    /// # Arguments
    /// * `place_id` - Google Place ID
    /// * `fields` - Comma separated field mask
    pub async fn get_place_details(
        &self,
        place_id: &str,
        fields: &str,
    ) -> Result<PlaceDetails, FinderError> {
        let url = format!("{}/place/details/json", self.base_url);
        let params = [
            ("place_id", place_id),
            ("fields", fields),
            ("key", self.api_key.as_str()),
        ];

        log::debug!("Google Places details lookup: place_id={}", place_id);

        let api_response: DetailsResponse = self.get_json(&url, &params).await?;

        if api_response.status != "OK" {
            return Err(FinderError::ExternalApiError(format!(
                "Details status for {}: {} {}",
                place_id,
                api_response.status,
                api_response.error_message.unwrap_or_default()
            )));
        }

        api_response.result.ok_or_else(|| {
            FinderError::MalformedResponse(format!("Details for {} has no result", place_id))
        })
    }

    /// Get distance and travel time between one origin and one destination
    /// DOCUMENTATION: Only rows[0].elements[0] is read
    pub async fn distance_matrix(
        &self,
        origin: &str,
        destination: &str,
    ) -> Result<DistanceInfo, FinderError> {
        let url = format!("{}/distancematrix/json", self.base_url);
        let params = [
            ("origins", origin),
            ("destinations", destination),
            ("key", self.api_key.as_str()),
        ];

        log::debug!("Distance matrix lookup: {} -> {}", origin, destination);

        let api_response: DistanceMatrixResponse = self.get_json(&url, &params).await?;

        if api_response.status != "OK" {
            return Err(FinderError::ExternalApiError(format!(
                "Distance matrix status: {} {}",
                api_response.status,
                api_response.error_message.unwrap_or_default()
            )));
        }

        let element = api_response
            .rows
            .into_iter()
            .next()
            .and_then(|row| row.elements.into_iter().next())
            .ok_or_else(|| {
                FinderError::MalformedResponse(format!(
                    "Distance matrix for {} has no elements",
                    destination
                ))
            })?;

        if element.status != "OK" {
            return Err(FinderError::MalformedResponse(format!(
                "Distance matrix element status for {}: {}",
                destination, element.status
            )));
        }

        match (element.distance, element.duration) {
            (Some(distance), Some(duration)) => Ok(DistanceInfo {
                distance_text: distance.text,
                duration_text: duration.text,
            }),
            _ => Err(FinderError::MalformedResponse(format!(
                "Distance matrix element for {} lacks distance or duration",
                destination
            ))),
        }
    }

    /// Get photo URL from photo reference
    /// DOCUMENTATION: Converts Google photo_reference to a URL usable in img tags
    pub fn get_photo_url(&self, photo_reference: &str, max_width: u32) -> String {
        format!(
            "{}/place/photo?maxwidth={}&photoreference={}&key={}",
            self.base_url, max_width, photo_reference, self.api_key
        )
    }

    /// Issue a GET and decode the JSON body, rejecting non-2xx statuses
    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        params: &[(&str, &str)],
    ) -> Result<T, FinderError> {
        let response = self
            .client
            .get(url)
            .query(params)
            .send()
            .await
            .map_err(|e| {
                log::error!("Google Maps request to {} failed: {}", url, e);
                FinderError::ExternalApiError(format!("Request failed: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            log::error!("Google Maps API error {} from {}: {}", status, url, body);
            return Err(FinderError::ExternalApiError(format!(
                "API error {}: {}",
                status, body
            )));
        }

        response.json().await.map_err(|e| {
            log::error!("Failed to parse Google Maps response from {}: {}", url, e);
            FinderError::MalformedResponse(format!("Parse error: {}", e))
        })
    }
}

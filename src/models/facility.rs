// src/models/facility.rs
// DOCUMENTATION: Request and response shapes of the facility API
// PURPOSE: Inbound coordinates and the merged facility returned to clients

use crate::services::google_maps_client::GoogleLocation;
use serde::{Deserialize, Serialize};

/// Query parameters for GET /api/nearbyUrgentCares
/// DOCUMENTATION: Kept as raw strings and forwarded to Google untouched.
/// No range or presence check is made here.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchQuery {
    pub latitude: Option<String>,
    pub longitude: Option<String>,
}

impl SearchQuery {
    /// "{lat},{lng}" location string used as search center and route origin
    pub fn location(&self) -> String {
        format!(
            "{},{}",
            self.latitude.as_deref().unwrap_or_default(),
            self.longitude.as_deref().unwrap_or_default()
        )
    }
}

/// Facility merged from nearby search, place details and distance matrix
/// DOCUMENTATION: Field names are part of the client contract.
/// rating and user_ratings_total are omitted when Google has none.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnrichedFacility {
    pub id: String,
    pub name: String,
    pub location: GoogleLocation,
    pub icon: String,
    /// Photo URL, or the icon when the place has no photos
    pub image: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_ratings_total: Option<i64>,
    pub address: String,
    pub phone: String,
    pub open_now: bool,
    pub open_hours: String,
    pub distance: String,
    pub duration: String,
}

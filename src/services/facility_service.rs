// src/services/facility_service.rs
// DOCUMENTATION: Business logic for nearby urgent care lookups
// PURPOSE: Search, enrich every candidate concurrently, merge into one list

use crate::errors::FinderError;
use crate::models::{EnrichedFacility, SearchQuery};
use crate::services::google_maps_client::{GoogleMapsClient, NearbyPlace};
use crate::services::opening_hours::calculate_open_hours;
use futures::future::try_join_all;

/// Search radius in meters
pub const SEARCH_RADIUS_M: u32 = 5000;
pub const SEARCH_KEYWORD: &str = "urgent care";
pub const SEARCH_TYPE: &str = "hospital";
pub const DETAILS_FIELDS: &str = "formatted_phone_number,formatted_address,opening_hours,photos";
pub const PHOTO_MAX_WIDTH: u32 = 400;

pub const ADDRESS_NOT_AVAILABLE: &str = "Address not available";
pub const PHONE_NOT_AVAILABLE: &str = "Not available";

pub struct FacilityService;

impl FacilityService {
    /// Find urgent care facilities around the query coordinates
    /// DOCUMENTATION: All candidates are enriched concurrently and returned in
    /// search order. The first failure aborts the whole lookup.
    pub async fn find_nearby_urgent_cares(
        google_client: &GoogleMapsClient,
        query: &SearchQuery,
    ) -> Result<Vec<EnrichedFacility>, FinderError> {
        let location = query.location();

        let candidates = google_client
            .nearby_search(&location, SEARCH_RADIUS_M, SEARCH_TYPE, SEARCH_KEYWORD)
            .await?;

        if candidates.is_empty() {
            return Err(FinderError::NoResults(location));
        }

        let facilities = try_join_all(
            candidates
                .iter()
                .map(|candidate| Self::enrich_candidate(google_client, &location, candidate)),
        )
        .await?;

        log::info!(
            "Enriched {} urgent care facilities near {}",
            facilities.len(),
            location
        );

        Ok(facilities)
    }

    /// Fetch details and distance for one candidate and merge them
    async fn enrich_candidate(
        google_client: &GoogleMapsClient,
        origin: &str,
        candidate: &NearbyPlace,
    ) -> Result<EnrichedFacility, FinderError> {
        let coords = candidate.geometry.location;
        let destination = format!("{},{}", coords.lat, coords.lng);

        let (details, distance) = tokio::try_join!(
            google_client.get_place_details(&candidate.place_id, DETAILS_FIELDS),
            google_client.distance_matrix(origin, &destination),
        )?;

        let image = details
            .photos
            .as_ref()
            .and_then(|photos| photos.first())
            .map(|photo| google_client.get_photo_url(&photo.photo_reference, PHOTO_MAX_WIDTH))
            .unwrap_or_else(|| candidate.icon.clone());

        let open_hours = calculate_open_hours(details.opening_hours.as_ref())?;

        let open_now = details
            .opening_hours
            .as_ref()
            .and_then(|hours| hours.open_now)
            .unwrap_or(false);

        Ok(EnrichedFacility {
            id: candidate.place_id.clone(),
            name: candidate.name.clone(),
            location: coords,
            icon: candidate.icon.clone(),
            image,
            rating: candidate.rating,
            user_ratings_total: candidate.user_ratings_total,
            address: details
                .formatted_address
                .filter(|a| !a.is_empty())
                .unwrap_or_else(|| ADDRESS_NOT_AVAILABLE.to_string()),
            phone: details
                .formatted_phone_number
                .filter(|p| !p.is_empty())
                .unwrap_or_else(|| PHONE_NOT_AVAILABLE.to_string()),
            open_now,
            open_hours,
            distance: distance.distance_text,
            duration: distance.duration_text,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};
    use std::time::Duration;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn candidate_json(id: &str, lat: f64, lng: f64) -> Value {
        json!({
            "place_id": id,
            "name": format!("Clinic {}", id),
            "geometry": { "location": { "lat": lat, "lng": lng } },
            "icon": format!("https://icons.example/{}.png", id),
            "rating": 4.5,
            "user_ratings_total": 10
        })
    }

    async fn mount_search(server: &MockServer, results: Vec<Value>) {
        Mock::given(method("GET"))
            .and(path("/place/nearbysearch/json"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({ "status": "OK", "results": results })),
            )
            .mount(server)
            .await;
    }

    async fn mount_details(server: &MockServer, place_id: &str, result: Value, delay_ms: u64) {
        Mock::given(method("GET"))
            .and(path("/place/details/json"))
            .and(query_param("place_id", place_id))
            .and(query_param("fields", DETAILS_FIELDS))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({ "status": "OK", "result": result }))
                    .set_delay(Duration::from_millis(delay_ms)),
            )
            .mount(server)
            .await;
    }

    async fn mount_distance(server: &MockServer) {
        Mock::given(method("GET"))
            .and(path("/distancematrix/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": "OK",
                "rows": [{ "elements": [{
                    "status": "OK",
                    "distance": { "text": "2.4 km", "value": 2400 },
                    "duration": { "text": "7 mins", "value": 420 }
                }]}]
            })))
            .mount(server)
            .await;
    }

    fn query() -> SearchQuery {
        SearchQuery {
            latitude: Some("1".to_string()),
            longitude: Some("2".to_string()),
        }
    }

    #[tokio::test]
    async fn test_merges_full_details() {
        let server = MockServer::start().await;
        mount_search(&server, vec![candidate_json("a", 1.25, 2.5)]).await;
        mount_details(
            &server,
            "a",
            json!({
                "formatted_address": "1 Main St",
                "formatted_phone_number": "(555) 010-0000",
                "opening_hours": {
                    "open_now": true,
                    "periods": [{
                        "open": { "day": 1, "time": "0800" },
                        "close": { "day": 1, "time": "1700" }
                    }]
                },
                "photos": [{ "photo_reference": "photo-a", "width": 800, "height": 600 }]
            }),
            0,
        )
        .await;
        Mock::given(method("GET"))
            .and(path("/distancematrix/json"))
            .and(query_param("origins", "1,2"))
            .and(query_param("destinations", "1.25,2.5"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": "OK",
                "rows": [{ "elements": [{
                    "status": "OK",
                    "distance": { "text": "1.1 mi", "value": 1770 },
                    "duration": { "text": "4 mins", "value": 240 }
                }]}]
            })))
            .mount(&server)
            .await;

        let client = GoogleMapsClient::with_base_url("k".to_string(), &server.uri());
        let facilities = FacilityService::find_nearby_urgent_cares(&client, &query())
            .await
            .unwrap();

        assert_eq!(facilities.len(), 1);
        let f = &facilities[0];
        assert_eq!(f.id, "a");
        assert_eq!(f.name, "Clinic a");
        assert_eq!(f.address, "1 Main St");
        assert_eq!(f.phone, "(555) 010-0000");
        assert!(f.open_now);
        assert_eq!(f.open_hours, "9 hours");
        assert_eq!(
            f.image,
            format!("{}/place/photo?maxwidth=400&photoreference=photo-a&key=k", server.uri())
        );
        assert_eq!(f.distance, "1.1 mi");
        assert_eq!(f.duration, "4 mins");
    }

    #[tokio::test]
    async fn test_sentinels_for_missing_details() {
        let server = MockServer::start().await;
        mount_search(&server, vec![candidate_json("a", 1.0, 2.0)]).await;
        mount_details(&server, "a", json!({}), 0).await;
        mount_distance(&server).await;

        let client = GoogleMapsClient::with_base_url("k".to_string(), &server.uri());
        let facilities = FacilityService::find_nearby_urgent_cares(&client, &query())
            .await
            .unwrap();

        let f = &facilities[0];
        assert_eq!(f.address, "Address not available");
        assert_eq!(f.phone, "Not available");
        assert!(!f.open_now);
        assert_eq!(f.open_hours, "Hours not available");
        assert_eq!(f.image, f.icon);
        assert_eq!(f.image, "https://icons.example/a.png");
    }

    #[tokio::test]
    async fn test_order_follows_search_results() {
        let server = MockServer::start().await;
        mount_search(
            &server,
            vec![
                candidate_json("slow", 1.0, 1.0),
                candidate_json("medium", 2.0, 2.0),
                candidate_json("fast", 3.0, 3.0),
            ],
        )
        .await;
        mount_details(&server, "slow", json!({}), 300).await;
        mount_details(&server, "medium", json!({}), 100).await;
        mount_details(&server, "fast", json!({}), 0).await;
        mount_distance(&server).await;

        let client = GoogleMapsClient::with_base_url("k".to_string(), &server.uri());
        let facilities = FacilityService::find_nearby_urgent_cares(&client, &query())
            .await
            .unwrap();

        let ids: Vec<&str> = facilities.iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids, vec!["slow", "medium", "fast"]);
    }

    #[tokio::test]
    async fn test_empty_search_fails() {
        let server = MockServer::start().await;
        mount_search(&server, vec![]).await;

        let client = GoogleMapsClient::with_base_url("k".to_string(), &server.uri());
        let result = FacilityService::find_nearby_urgent_cares(&client, &query()).await;

        assert!(matches!(result, Err(FinderError::NoResults(_))));
    }

    #[tokio::test]
    async fn test_one_failing_enrichment_fails_all() {
        let server = MockServer::start().await;
        mount_search(
            &server,
            vec![
                candidate_json("a", 1.0, 1.0),
                candidate_json("broken", 2.0, 2.0),
                candidate_json("c", 3.0, 3.0),
            ],
        )
        .await;
        mount_details(&server, "a", json!({}), 0).await;
        mount_details(&server, "c", json!({}), 0).await;
        Mock::given(method("GET"))
            .and(path("/place/details/json"))
            .and(query_param("place_id", "broken"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;
        mount_distance(&server).await;

        let client = GoogleMapsClient::with_base_url("k".to_string(), &server.uri());
        let result = FacilityService::find_nearby_urgent_cares(&client, &query()).await;

        assert!(result.is_err());
    }
}

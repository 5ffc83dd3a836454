// src/handlers/facilities.rs
// DOCUMENTATION: HTTP handlers for urgent care lookups
// PURPOSE: Parse requests, call services, return responses

use crate::errors::FinderError;
use crate::models::SearchQuery;
use crate::services::{FacilityService, GoogleMapsClient};
use actix_web::error::QueryPayloadError;
use actix_web::{web, HttpRequest, HttpResponse, Responder};

/// GET /api/nearbyUrgentCares
/// Urgent care facilities near a coordinate, with details and travel distance
pub async fn nearby_urgent_cares(
    google_client: web::Data<GoogleMapsClient>,
    query: web::Query<SearchQuery>,
) -> Result<impl Responder, FinderError> {
    let facilities = FacilityService::find_nearby_urgent_cares(google_client.get_ref(), &query)
        .await
        .map_err(|e| {
            log::error!("Error fetching hospital data: {}", e);
            e
        })?;

    Ok(HttpResponse::Ok().json(facilities))
}

/// Query string failures get the same generic 500 as upstream failures
fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    log::error!("Error fetching hospital data: {}", err);
    FinderError::InvalidQuery(err.to_string()).into()
}

/// Configuration for facility routes
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .app_data(web::QueryConfig::default().error_handler(query_error_handler))
            .route("/nearbyUrgentCares", web::get().to(nearby_urgent_cares)),
    );
}

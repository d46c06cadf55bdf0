use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use validator::Validate;

use crate::core::{find_similar, Recommender};
use crate::models::{
    ErrorResponse, HealthResponse, RecommendationRequest, RecommendationResponse,
    SimilarPostingsRequest, SimilarPostingsResponse,
};
use crate::services::{CatalogClient, CatalogError};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<CatalogClient>,
    pub recommender: Recommender,
}

/// Configure all recommendation-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/recommendations", web::post().to(recommend_providers))
        .route("/postings/similar", web::post().to(similar_postings));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let catalog_healthy = state.catalog.health_check().await.unwrap_or(false);

    let status = if catalog_healthy { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Provider recommendations endpoint
///
/// POST /api/v1/recommendations
///
/// Request body:
/// ```json
/// {
///   "serviceId": "string",
///   "serviceName": "Catering",
///   "eventType": "wedding",
///   "location": "Auckland",
///   "budget": 2000,
///   "guestCount": 80,
///   "filters": { "verifiedOnly": true, "priceRange": "1000-5000" }
/// }
/// ```
async fn recommend_providers(
    state: web::Data<AppState>,
    req: web::Json<RecommendationRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for recommendation request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let request_id = uuid::Uuid::new_v4();
    tracing::info!(
        "[{}] Recommending providers for service '{}' ({} event)",
        request_id,
        req.service_name,
        req.event_type
    );

    let candidates = match state.catalog.fetch_providers(&req.service_name).await {
        Ok(candidates) => candidates,
        Err(e) => {
            tracing::error!("[{}] Failed to fetch providers: {}", request_id, e);
            return HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to fetch providers".to_string(),
                message: e.to_string(),
                status_code: 500,
            });
        }
    };

    tracing::debug!("[{}] Fetched {} candidates", request_id, candidates.len());

    let context = req.context();
    let result = state.recommender.recommend(&context, candidates, &req.filters);

    tracing::info!(
        "[{}] Returning {} recommendations (from {} candidates)",
        request_id,
        result.recommendations.len(),
        result.total_candidates
    );

    let total_results = result.recommendations.len();
    HttpResponse::Ok().json(RecommendationResponse {
        recommendations: result.recommendations,
        applied_filters: req.filters.clone(),
        total_results,
    })
}

/// Similar postings endpoint
///
/// POST /api/v1/postings/similar
///
/// Request body:
/// ```json
/// {
///   "referenceJobIds": ["job_1", "job_2"],
///   "limit": 10
/// }
/// ```
async fn similar_postings(
    state: web::Data<AppState>,
    req: web::Json<SimilarPostingsRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for similar-postings request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let request_id = uuid::Uuid::new_v4();

    let references = match state
        .catalog
        .fetch_postings_by_ids(&req.reference_job_ids)
        .await
    {
        Ok(refs) => refs,
        Err(CatalogError::NotFound(message)) => {
            // A reference set that resolves to nothing is a caller mistake.
            tracing::info!("[{}] Unknown reference postings: {}", request_id, message);
            return HttpResponse::BadRequest().json(ErrorResponse {
                error: "Unknown reference postings".to_string(),
                message,
                status_code: 400,
            });
        }
        Err(e) => {
            tracing::error!("[{}] Failed to fetch reference postings: {}", request_id, e);
            return HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to fetch reference postings".to_string(),
                message: e.to_string(),
                status_code: 500,
            });
        }
    };

    let candidates = match state.catalog.fetch_all_postings().await {
        Ok(postings) => postings,
        Err(e) => {
            tracing::error!("[{}] Failed to fetch posting pool: {}", request_id, e);
            return HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to fetch postings".to_string(),
                message: e.to_string(),
                status_code: 500,
            });
        }
    };

    let similar_jobs = find_similar(&references, candidates, req.limit as usize);

    tracing::info!(
        "[{}] Returning {} similar postings for {} references",
        request_id,
        similar_jobs.len(),
        references.len()
    );

    HttpResponse::Ok().json(SimilarPostingsResponse { similar_jobs })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_check_response() {
        let response = HealthResponse {
            status: "healthy".to_string(),
            version: "0.1.0".to_string(),
            timestamp: chrono::Utc::now(),
        };

        assert_eq!(response.status, "healthy");
    }
}

use serde::{Deserialize, Serialize};

use crate::models::domain::{RecommendationFilters, ScoredProvider, SimilarPosting};

/// Response for the recommendations endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationResponse {
    pub recommendations: Vec<ScoredProvider>,
    #[serde(rename = "appliedFilters")]
    pub applied_filters: RecommendationFilters,
    #[serde(rename = "totalResults")]
    pub total_results: usize,
}

/// Response for the similar-postings endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimilarPostingsResponse {
    #[serde(rename = "similarJobs")]
    pub similar_jobs: Vec<SimilarPosting>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

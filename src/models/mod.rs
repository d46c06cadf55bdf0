// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    JobPosting, PriceBucket, PriceRange, Priority, Provider, RecommendationFilters,
    RequestContext, ScoredProvider, ServiceOffering, ServiceStatus, SimilarPosting,
    SubscriptionTier,
};
pub use requests::{RecommendationRequest, SimilarPostingsRequest};
pub use responses::{ErrorResponse, HealthResponse, RecommendationResponse, SimilarPostingsResponse};

//! Vendormatch - provider recommendation service for the event-services
//! marketplace
//!
//! This library implements the matching and recommendation scoring engine:
//! a weighted-factor pipeline that ranks service providers against a
//! request, plus the posting-similarity variant built on the same scorer.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{classify_priority, find_similar, score_provider, Recommender};
pub use models::{
    JobPosting, Provider, RecommendationFilters, RecommendationRequest, RecommendationResponse,
    RequestContext, ScoredProvider, SimilarPosting,
};

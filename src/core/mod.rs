// Core engine exports
pub mod estimates;
pub mod features;
pub mod filters;
pub mod reasoning;
pub mod recommender;
pub mod scoring;
pub mod similarity;

pub use estimates::{estimate_cost, estimate_timeline};
pub use features::{extract, BudgetFit, ExperienceTier, MatchFeatures, RatingTier};
pub use filters::apply_filters;
pub use reasoning::{match_reasoning, similarity_reasons};
pub use recommender::{score_provider, RecommendationResult, Recommender};
pub use scoring::{classify_priority, weighted_score, Factor, SimilarityFeatures, SIMILARITY_CUTOFF};
pub use similarity::find_similar;

use crate::core::{
    estimates::{estimate_cost, estimate_timeline},
    features,
    filters::apply_filters,
    reasoning::match_reasoning,
    scoring::{classify_priority, weighted_score, PROVIDER_FACTORS},
};
use crate::models::{Provider, RecommendationFilters, RequestContext, ScoredProvider};

/// Result of the recommendation pipeline
#[derive(Debug)]
pub struct RecommendationResult {
    pub recommendations: Vec<ScoredProvider>,
    pub total_candidates: usize,
}

/// Recommendation orchestrator - runs the scoring pipeline over a
/// candidate list
///
/// # Pipeline stages
/// 1. Feature extraction + weighted scoring per candidate
/// 2. Reasoning, cost/timeline estimates and priority per candidate
/// 3. Sort by score with a deterministic tie-break
/// 4. Post-score filters (remove-only, order preserved)
#[derive(Debug, Clone)]
pub struct Recommender {
    workers: usize,
    parallel_threshold: usize,
}

impl Recommender {
    pub fn new(workers: usize) -> Self {
        Self {
            workers: workers.max(1),
            parallel_threshold: 256,
        }
    }

    /// Rank candidates for a request and apply the caller's filters.
    ///
    /// Scoring is pure per candidate, so the batch is mapped over a bounded
    /// set of scoped worker threads when it is large enough to matter.
    /// Returns the full filtered list; truncation is the caller's call.
    pub fn recommend(
        &self,
        context: &RequestContext,
        candidates: Vec<Provider>,
        filters: &RecommendationFilters,
    ) -> RecommendationResult {
        let total_candidates = candidates.len();

        let mut scored = self.score_all(context, &candidates);

        // Score descending, then review count descending, then id ascending
        // so identical inputs always rank identically.
        scored.sort_by(|a, b| {
            b.match_score
                .cmp(&a.match_score)
                .then_with(|| b.review_count.cmp(&a.review_count))
                .then_with(|| a.provider_id.cmp(&b.provider_id))
        });

        apply_filters(&mut scored, filters);

        RecommendationResult {
            recommendations: scored,
            total_candidates,
        }
    }

    fn score_all(&self, context: &RequestContext, candidates: &[Provider]) -> Vec<ScoredProvider> {
        if self.workers <= 1 || candidates.len() < self.parallel_threshold {
            return candidates.iter().map(|p| score_provider(p, context)).collect();
        }

        let chunk_size = candidates.len().div_ceil(self.workers);
        std::thread::scope(|scope| {
            let handles: Vec<_> = candidates
                .chunks(chunk_size)
                .map(|chunk| {
                    scope.spawn(move || {
                        chunk
                            .iter()
                            .map(|p| score_provider(p, context))
                            .collect::<Vec<_>>()
                    })
                })
                .collect();

            // Chunks rejoin in submission order, so the parallel path yields
            // the same sequence as the serial one.
            handles
                .into_iter()
                .flat_map(|handle| handle.join().expect("scoring worker panicked"))
                .collect()
        })
    }
}

impl Default for Recommender {
    fn default() -> Self {
        Self::new(4)
    }
}

/// Score one provider against the request. Pure: no I/O, no shared state,
/// same inputs always produce the same result.
pub fn score_provider(provider: &Provider, context: &RequestContext) -> ScoredProvider {
    let features = features::extract(provider, context);
    let match_score = weighted_score(PROVIDER_FACTORS, &features);

    ScoredProvider {
        provider_id: provider.provider_id.clone(),
        business_name: provider.business_name.clone(),
        location: provider.location.clone(),
        rating: provider.rating,
        review_count: provider.review_count,
        is_verified: provider.verified(),
        tier: provider.tier,
        match_score,
        reasoning: match_reasoning(provider, context, &features),
        estimated_cost: estimate_cost(provider, context),
        estimated_timeline: estimate_timeline(provider, context),
        availability: features.available,
        priority: classify_priority(match_score),
    }
}

use crate::core::reasoning::similarity_reasons;
use crate::core::scoring::{weighted_score, SimilarityFeatures, SIMILARITY_CUTOFF, SIMILARITY_FACTORS};
use crate::models::{JobPosting, SimilarPosting};

/// Rank candidate postings by similarity to a reference set.
///
/// Same pipeline shape as provider recommendations: score, cut off, sort
/// with a deterministic tie-break, truncate to the caller's limit.
pub fn find_similar(
    references: &[JobPosting],
    candidates: Vec<JobPosting>,
    limit: usize,
) -> Vec<SimilarPosting> {
    let mut similar: Vec<SimilarPosting> = candidates
        .into_iter()
        .filter(|posting| !references.iter().any(|r| r.job_id == posting.job_id))
        .filter_map(|posting| {
            let features = extract(&posting, references);
            let similarity = weighted_score(SIMILARITY_FACTORS, &features);
            if similarity > SIMILARITY_CUTOFF {
                let reasons = similarity_reasons(&posting, &features);
                Some(SimilarPosting {
                    job_id: posting.job_id,
                    title: posting.title,
                    category: posting.category,
                    location: posting.location,
                    job_type: posting.job_type,
                    similarity,
                    reasons,
                })
            } else {
                None
            }
        })
        .collect();

    similar.sort_by(|a, b| {
        b.similarity
            .cmp(&a.similarity)
            .then_with(|| a.job_id.cmp(&b.job_id))
    });
    similar.truncate(limit);
    similar
}

/// A signal fires when any posting in the reference set matches it.
pub fn extract(posting: &JobPosting, references: &[JobPosting]) -> SimilarityFeatures {
    SimilarityFeatures {
        category_match: references
            .iter()
            .any(|r| r.category.eq_ignore_ascii_case(&posting.category)),
        location_match: references
            .iter()
            .any(|r| !r.location.is_empty() && r.location.eq_ignore_ascii_case(&posting.location)),
        budget_overlap: references.iter().any(|r| r.budget.intersects(&posting.budget)),
        job_type_match: references
            .iter()
            .any(|r| r.job_type.eq_ignore_ascii_case(&posting.job_type)),
        remote_match: references.iter().any(|r| r.remote_allowed == posting.remote_allowed),
        title_token_match: references
            .iter()
            .any(|r| shares_title_token(&r.title, &posting.title)),
    }
}

/// True when the two titles share a word longer than three characters,
/// case-insensitive. Short words ("for", "the", "and") carry no signal.
fn shares_title_token(a: &str, b: &str) -> bool {
    let b_tokens: Vec<String> = b
        .split_whitespace()
        .filter(|w| w.len() > 3)
        .map(|w| w.to_lowercase())
        .collect();
    a.split_whitespace()
        .filter(|w| w.len() > 3)
        .any(|w| b_tokens.contains(&w.to_lowercase()))
}

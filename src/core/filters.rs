use crate::core::features::location_overlap;
use crate::models::{RecommendationFilters, ScoredProvider};

/// Apply the caller's post-score filters to an already-ranked list.
///
/// Filters only remove entries; the relative order established by the sort
/// is never touched. The price-bucket filter runs against the estimated
/// cost, not the provider's raw price range.
pub fn apply_filters(results: &mut Vec<ScoredProvider>, filters: &RecommendationFilters) {
    if filters.verified_only.unwrap_or(false) {
        results.retain(|r| r.is_verified);
    }

    if let Some(location) = filters.location.as_deref() {
        if !location.is_empty() {
            results.retain(|r| location_overlap(&r.location, Some(location)));
        }
    }

    if let Some(min_rating) = filters.min_rating {
        results.retain(|r| r.rating >= min_rating);
    }

    if let Some(available) = filters.availability {
        results.retain(|r| r.availability == available);
    }

    if let Some(bucket) = filters.price_range {
        results.retain(|r| bucket.contains(r.estimated_cost));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PriceBucket, Priority, SubscriptionTier};

    fn scored(id: &str, score: u8, rating: f64, cost: u64, verified: bool) -> ScoredProvider {
        ScoredProvider {
            provider_id: id.to_string(),
            business_name: format!("Provider {}", id),
            location: "Auckland".to_string(),
            rating,
            review_count: 10,
            is_verified: verified,
            tier: SubscriptionTier::Standard,
            match_score: score,
            reasoning: vec![],
            estimated_cost: cost,
            estimated_timeline: "2 weeks".to_string(),
            availability: true,
            priority: Priority::Medium,
        }
    }

    #[test]
    fn test_filters_preserve_order() {
        let mut results = vec![
            scored("a", 90, 4.8, 2000, true),
            scored("b", 80, 4.2, 2500, false),
            scored("c", 70, 4.6, 3000, true),
            scored("d", 60, 3.0, 800, true),
        ];
        let filters = RecommendationFilters {
            min_rating: Some(4.5),
            ..Default::default()
        };
        apply_filters(&mut results, &filters);

        let ids: Vec<&str> = results.iter().map(|r| r.provider_id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);
    }

    #[test]
    fn test_verified_only() {
        let mut results = vec![
            scored("a", 90, 4.8, 2000, false),
            scored("b", 80, 4.2, 2500, true),
        ];
        let filters = RecommendationFilters {
            verified_only: Some(true),
            ..Default::default()
        };
        apply_filters(&mut results, &filters);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].provider_id, "b");
    }

    #[test]
    fn test_price_bucket_uses_estimated_cost() {
        let mut results = vec![
            scored("a", 90, 4.8, 800, true),
            scored("b", 80, 4.2, 2500, true),
            scored("c", 70, 4.6, 12000, true),
        ];
        let filters = RecommendationFilters {
            price_range: Some(PriceBucket::From1000To5000),
            ..Default::default()
        };
        apply_filters(&mut results, &filters);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].provider_id, "b");
    }

    #[test]
    fn test_location_filter_substring() {
        let mut results = vec![scored("a", 90, 4.8, 2000, true)];
        results[0].location = "Auckland CBD".to_string();
        let filters = RecommendationFilters {
            location: Some("auckland".to_string()),
            ..Default::default()
        };
        apply_filters(&mut results, &filters);
        assert_eq!(results.len(), 1);

        let filters = RecommendationFilters {
            location: Some("Wellington".to_string()),
            ..Default::default()
        };
        apply_filters(&mut results, &filters);
        assert!(results.is_empty());
    }

    #[test]
    fn test_empty_filters_keep_everything() {
        let mut results = vec![
            scored("a", 90, 4.8, 2000, true),
            scored("b", 80, 4.2, 2500, false),
        ];
        apply_filters(&mut results, &RecommendationFilters::default());
        assert_eq!(results.len(), 2);
    }
}

use crate::core::features::{ExperienceTier, MatchFeatures, RatingTier};
use crate::core::scoring::SimilarityFeatures;
use crate::models::{JobPosting, Provider, RequestContext, SubscriptionTier};

/// Build the ordered justification list for a scored provider.
///
/// Order is fixed: service, rating, experience, availability, location,
/// verification badge, premium badge, review-count summary. Every sentence
/// is backed by a predicate that actually fired, and no sentence appears
/// twice; the review count in particular shows up only in the final
/// summary, never inside the experience line.
pub fn match_reasoning(
    provider: &Provider,
    context: &RequestContext,
    features: &MatchFeatures,
) -> Vec<String> {
    let mut reasons = Vec::new();

    if features.service_match {
        push_unique(
            &mut reasons,
            format!("Specializes in {} services", context.service_name),
        );
    }

    match features.rating {
        RatingTier::Excellent => push_unique(
            &mut reasons,
            format!("Excellent rating of {:.1} stars", provider.rating),
        ),
        RatingTier::High => push_unique(
            &mut reasons,
            format!("Highly rated at {:.1} stars", provider.rating),
        ),
        RatingTier::Fair => push_unique(
            &mut reasons,
            format!("Solid rating of {:.1} stars", provider.rating),
        ),
        RatingTier::Low => {
            push_unique(&mut reasons, format!("Rated {:.1} stars", provider.rating))
        }
        RatingTier::None => {}
    }

    match features.experience {
        ExperienceTier::Veteran => {
            push_unique(&mut reasons, "Extensive track record in the industry".to_string())
        }
        ExperienceTier::Experienced => {
            push_unique(&mut reasons, "Well-established service provider".to_string())
        }
        ExperienceTier::Some => {
            push_unique(&mut reasons, "Proven experience with past events".to_string())
        }
        // Baseline tier states nothing about the provider.
        ExperienceTier::New => {}
    }

    if features.available {
        push_unique(&mut reasons, "Currently available for bookings".to_string());
    }

    if features.location_overlap {
        push_unique(&mut reasons, format!("Located in {}", provider.location));
    }

    if provider.verified() {
        push_unique(&mut reasons, "Verified business".to_string());
    }

    if provider.tier == SubscriptionTier::Premium {
        push_unique(&mut reasons, "Premium partner".to_string());
    }

    if provider.review_count > 0 {
        push_unique(
            &mut reasons,
            format!("Backed by {} client reviews", provider.review_count),
        );
    }

    reasons
}

/// Ordered reasons for a similar posting, one per fired factor, in rule
/// table order.
pub fn similarity_reasons(posting: &JobPosting, features: &SimilarityFeatures) -> Vec<String> {
    let mut reasons = Vec::new();

    if features.category_match {
        push_unique(&mut reasons, format!("Same category: {}", posting.category));
    }
    if features.location_match {
        push_unique(&mut reasons, format!("Same location: {}", posting.location));
    }
    if features.budget_overlap {
        push_unique(&mut reasons, "Similar budget range".to_string());
    }
    if features.job_type_match {
        push_unique(&mut reasons, format!("Same job type: {}", posting.job_type));
    }
    if features.remote_match {
        push_unique(&mut reasons, "Matching remote preference".to_string());
    }
    if features.title_token_match {
        push_unique(&mut reasons, "Related title".to_string());
    }

    reasons
}

fn push_unique(reasons: &mut Vec<String>, sentence: String) {
    if !reasons.contains(&sentence) {
        reasons.push(sentence);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::features;
    use crate::models::{PriceRange, ServiceOffering, ServiceStatus};

    fn provider() -> Provider {
        Provider {
            provider_id: "p1".to_string(),
            business_name: "Auckland Catering Co".to_string(),
            location: "Auckland".to_string(),
            services: vec![ServiceOffering {
                name: "Catering".to_string(),
                status: ServiceStatus::Available,
                price_range: Some(PriceRange { min: 1000, max: 3000 }),
            }],
            rating: 4.8,
            review_count: 60,
            is_verified: Some(true),
            tier: SubscriptionTier::Premium,
            last_active_at: None,
        }
    }

    fn context() -> RequestContext {
        RequestContext {
            service_id: "s1".to_string(),
            service_name: "Catering".to_string(),
            event_type: "wedding".to_string(),
            location: Some("Auckland".to_string()),
            budget: Some(2000),
            guest_count: Some(80),
            event_date: None,
        }
    }

    #[test]
    fn test_full_match_reasoning_order() {
        let provider = provider();
        let context = context();
        let feats = features::extract(&provider, &context);
        let reasons = match_reasoning(&provider, &context, &feats);

        assert_eq!(
            reasons,
            vec![
                "Specializes in Catering services",
                "Excellent rating of 4.8 stars",
                "Extensive track record in the industry",
                "Currently available for bookings",
                "Located in Auckland",
                "Verified business",
                "Premium partner",
                "Backed by 60 client reviews",
            ]
        );
    }

    #[test]
    fn test_no_duplicate_sentences() {
        let provider = provider();
        let context = context();
        let feats = features::extract(&provider, &context);
        let reasons = match_reasoning(&provider, &context, &feats);

        let mut deduped = reasons.clone();
        deduped.dedup();
        assert_eq!(reasons, deduped);
        // Review count appears exactly once across the whole list.
        let mentions = reasons.iter().filter(|r| r.contains("60")).count();
        assert_eq!(mentions, 1);
    }

    #[test]
    fn test_unmatched_provider_emits_no_unearned_facts() {
        let mut provider = provider();
        provider.rating = 2.0;
        provider.review_count = 0;
        provider.is_verified = Some(false);
        provider.tier = SubscriptionTier::Standard;
        provider.services[0].status = ServiceStatus::Busy;
        provider.location = "Wellington".to_string();
        provider.services[0].name = "Florist".to_string();

        let context = context();
        let feats = features::extract(&provider, &context);
        let reasons = match_reasoning(&provider, &context, &feats);
        assert!(reasons.is_empty());
    }
}

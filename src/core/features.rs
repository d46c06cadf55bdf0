use crate::models::{Provider, RequestContext};

/// Discretized signals extracted from one provider against one request.
///
/// Absent provider fields simply fail their predicate; extraction never
/// errors on a partially-populated record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchFeatures {
    pub service_match: bool,
    pub rating: RatingTier,
    pub experience: ExperienceTier,
    pub available: bool,
    pub location_overlap: bool,
    pub budget: BudgetFit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatingTier {
    Excellent,
    High,
    Fair,
    Low,
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExperienceTier {
    Veteran,
    Experienced,
    Some,
    New,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetFit {
    /// Budget falls inside the provider's primary price range.
    Exact,
    /// Within +/-20% of the range.
    Near,
    /// No budget supplied with the request.
    Unspecified,
    Miss,
}

/// Extract all scoring signals for one provider.
pub fn extract(provider: &Provider, context: &RequestContext) -> MatchFeatures {
    MatchFeatures {
        service_match: service_match(provider, &context.service_name),
        rating: rating_tier(provider.rating),
        experience: experience_tier(provider.review_count),
        available: provider.is_available(),
        location_overlap: location_overlap(&provider.location, context.location.as_deref()),
        budget: budget_fit(provider, context.budget),
    }
}

/// Case-insensitive substring match in either direction between the
/// requested service name and any offered service name.
pub fn service_match(provider: &Provider, service_name: &str) -> bool {
    let wanted = service_name.to_lowercase();
    if wanted.is_empty() {
        return false;
    }
    provider.services.iter().any(|s| {
        let offered = s.name.to_lowercase();
        !offered.is_empty() && (offered.contains(&wanted) || wanted.contains(&offered))
    })
}

pub fn rating_tier(rating: f64) -> RatingTier {
    if rating >= 4.5 {
        RatingTier::Excellent
    } else if rating >= 4.0 {
        RatingTier::High
    } else if rating >= 3.5 {
        RatingTier::Fair
    } else if rating >= 3.0 {
        RatingTier::Low
    } else {
        RatingTier::None
    }
}

/// Review count stands in for years of experience.
pub fn experience_tier(review_count: u32) -> ExperienceTier {
    if review_count >= 50 {
        ExperienceTier::Veteran
    } else if review_count >= 20 {
        ExperienceTier::Experienced
    } else if review_count >= 5 {
        ExperienceTier::Some
    } else {
        ExperienceTier::New
    }
}

/// Mutual case-insensitive substring containment between the two location
/// strings. No geocoding anywhere; free text is all we have.
pub fn location_overlap(provider_location: &str, context_location: Option<&str>) -> bool {
    let Some(wanted) = context_location else {
        return false;
    };
    let provider_loc = provider_location.to_lowercase();
    let wanted = wanted.to_lowercase();
    if provider_loc.is_empty() || wanted.is_empty() {
        return false;
    }
    provider_loc.contains(&wanted) || wanted.contains(&provider_loc)
}

pub fn budget_fit(provider: &Provider, budget: Option<u64>) -> BudgetFit {
    let Some(budget) = budget else {
        return BudgetFit::Unspecified;
    };
    match provider.price_range() {
        Some(range) if range.contains(budget) => BudgetFit::Exact,
        Some(range) if range.near(budget) => BudgetFit::Near,
        _ => BudgetFit::Miss,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PriceRange, ServiceOffering, ServiceStatus, SubscriptionTier};

    fn provider(services: Vec<&str>, rating: f64, reviews: u32, location: &str) -> Provider {
        Provider {
            provider_id: "p1".to_string(),
            business_name: "Test Co".to_string(),
            location: location.to_string(),
            services: services
                .into_iter()
                .map(|name| ServiceOffering {
                    name: name.to_string(),
                    status: ServiceStatus::Available,
                    price_range: Some(PriceRange { min: 1000, max: 3000 }),
                })
                .collect(),
            rating,
            review_count: reviews,
            is_verified: Some(true),
            tier: SubscriptionTier::Standard,
            last_active_at: None,
        }
    }

    #[test]
    fn test_service_match_either_direction() {
        let p = provider(vec!["Wedding Catering"], 4.0, 10, "Auckland");
        assert!(service_match(&p, "catering"));
        let p = provider(vec!["Catering"], 4.0, 10, "Auckland");
        assert!(service_match(&p, "wedding catering"));
        assert!(!service_match(&p, "photography"));
    }

    #[test]
    fn test_rating_tiers() {
        assert_eq!(rating_tier(4.5), RatingTier::Excellent);
        assert_eq!(rating_tier(4.49), RatingTier::High);
        assert_eq!(rating_tier(4.0), RatingTier::High);
        assert_eq!(rating_tier(3.5), RatingTier::Fair);
        assert_eq!(rating_tier(3.0), RatingTier::Low);
        assert_eq!(rating_tier(2.99), RatingTier::None);
        assert_eq!(rating_tier(0.0), RatingTier::None);
    }

    #[test]
    fn test_experience_tiers() {
        assert_eq!(experience_tier(50), ExperienceTier::Veteran);
        assert_eq!(experience_tier(49), ExperienceTier::Experienced);
        assert_eq!(experience_tier(20), ExperienceTier::Experienced);
        assert_eq!(experience_tier(5), ExperienceTier::Some);
        assert_eq!(experience_tier(4), ExperienceTier::New);
        assert_eq!(experience_tier(0), ExperienceTier::New);
    }

    #[test]
    fn test_location_overlap_mutual_substring() {
        assert!(location_overlap("Auckland", Some("auckland")));
        assert!(location_overlap("Auckland CBD", Some("Auckland")));
        assert!(location_overlap("Auckland", Some("Auckland CBD")));
        assert!(!location_overlap("Wellington", Some("Auckland")));
        assert!(!location_overlap("Auckland", None));
        assert!(!location_overlap("", Some("Auckland")));
    }

    #[test]
    fn test_budget_fit_tiers() {
        let p = provider(vec!["Catering"], 4.0, 10, "Auckland");
        assert_eq!(budget_fit(&p, Some(2000)), BudgetFit::Exact);
        assert_eq!(budget_fit(&p, Some(900)), BudgetFit::Near); // 1000 * 0.8 = 800
        assert_eq!(budget_fit(&p, Some(3500)), BudgetFit::Near); // 3000 * 1.2 = 3600
        assert_eq!(budget_fit(&p, Some(500)), BudgetFit::Miss);
        assert_eq!(budget_fit(&p, None), BudgetFit::Unspecified);
    }

    #[test]
    fn test_missing_price_range_is_miss() {
        let mut p = provider(vec!["Catering"], 4.0, 10, "Auckland");
        p.services[0].price_range = None;
        assert_eq!(budget_fit(&p, Some(2000)), BudgetFit::Miss);
        assert_eq!(budget_fit(&p, None), BudgetFit::Unspecified);
    }
}

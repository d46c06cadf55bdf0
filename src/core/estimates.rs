use crate::models::{Provider, RequestContext};

/// Estimate the cost of hiring a provider for this request.
///
/// Baseline is the midpoint of the provider's primary price range (0 when
/// absent), adjusted for guest count first and event type second.
pub fn estimate_cost(provider: &Provider, context: &RequestContext) -> u64 {
    let baseline = provider.price_range().map(|r| r.midpoint()).unwrap_or(0) as f64;

    let guest_multiplier = match context.guest_count {
        Some(guests) if guests > 100 => 1.2,
        Some(guests) if guests > 50 => 1.1,
        _ => 1.0,
    };

    let event_multiplier = match context.event_type.to_lowercase().as_str() {
        "wedding" => 1.3,
        "corporate" => 1.1,
        _ => 1.0,
    };

    (baseline * guest_multiplier * event_multiplier).round().max(0.0) as u64
}

/// Estimate lead time for a provider and format it as a human-readable
/// duration.
pub fn estimate_timeline(provider: &Provider, context: &RequestContext) -> String {
    let service = context.service_name.to_lowercase();
    let mut days: i64 = if service.contains("photography") {
        14
    } else if service.contains("catering") {
        21
    } else if service.contains("venue") {
        30
    } else {
        7
    };

    // Seasoned providers turn work around faster; newcomers need slack.
    // Each adjustment rounds before the next applies.
    if provider.review_count >= 50 {
        days = (days as f64 * 0.8).round() as i64;
    } else if provider.review_count < 5 {
        days = (days as f64 * 1.3).round() as i64;
    }

    if context.event_type.to_lowercase() == "wedding" {
        days = (days as f64 * 1.2).round() as i64;
    }

    format_timeline(days)
}

fn format_timeline(days: i64) -> String {
    if days < 7 {
        plural(days, "day")
    } else if days < 30 {
        plural((days as f64 / 7.0).round() as i64, "week")
    } else {
        plural((days as f64 / 30.0).round() as i64, "month")
    }
}

fn plural(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("1 {}", unit)
    } else {
        format!("{} {}s", count, unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PriceRange, ServiceOffering, ServiceStatus, SubscriptionTier};

    fn provider(reviews: u32, price_range: Option<PriceRange>) -> Provider {
        Provider {
            provider_id: "p1".to_string(),
            business_name: "Test Co".to_string(),
            location: "Auckland".to_string(),
            services: vec![ServiceOffering {
                name: "Catering".to_string(),
                status: ServiceStatus::Available,
                price_range,
            }],
            rating: 4.8,
            review_count: reviews,
            is_verified: Some(true),
            tier: SubscriptionTier::Standard,
            last_active_at: None,
        }
    }

    fn context(service: &str, event: &str, guests: Option<u32>) -> RequestContext {
        RequestContext {
            service_id: "s1".to_string(),
            service_name: service.to_string(),
            event_type: event.to_string(),
            location: None,
            budget: None,
            guest_count: guests,
            event_date: None,
        }
    }

    #[test]
    fn test_cost_wedding_with_guests() {
        // midpoint 2000, 80 guests -> x1.1, wedding -> x1.3
        let p = provider(60, Some(PriceRange { min: 1000, max: 3000 }));
        let ctx = context("Catering", "wedding", Some(80));
        assert_eq!(estimate_cost(&p, &ctx), 2860);
    }

    #[test]
    fn test_cost_large_corporate_event() {
        // midpoint 2000, 150 guests -> x1.2, corporate -> x1.1
        let p = provider(60, Some(PriceRange { min: 1000, max: 3000 }));
        let ctx = context("Catering", "corporate", Some(150));
        assert_eq!(estimate_cost(&p, &ctx), 2640);
    }

    #[test]
    fn test_cost_missing_price_range_is_zero() {
        let p = provider(60, None);
        let ctx = context("Catering", "wedding", Some(80));
        assert_eq!(estimate_cost(&p, &ctx), 0);
    }

    #[test]
    fn test_timeline_veteran_wedding_catering() {
        // 21 days -> x0.8 = 16.8 -> 17 -> x1.2 = 20.4 -> 20 -> "3 weeks"
        let p = provider(60, None);
        let ctx = context("Catering", "wedding", None);
        assert_eq!(estimate_timeline(&p, &ctx), "3 weeks");
    }

    #[test]
    fn test_timeline_new_provider_slower() {
        // 7 days -> x1.3 = 9.1 -> 9 -> "1 week"
        let p = provider(2, None);
        let ctx = context("Florist", "corporate", None);
        assert_eq!(estimate_timeline(&p, &ctx), "1 week");
    }

    #[test]
    fn test_timeline_day_format() {
        // 7 days -> veteran x0.8 = 5.6 -> 6 -> "6 days"
        let p = provider(60, None);
        let ctx = context("Florist", "corporate", None);
        assert_eq!(estimate_timeline(&p, &ctx), "6 days");
    }

    #[test]
    fn test_timeline_month_format() {
        // venue 30 days, no adjustments -> "1 month"
        let p = provider(20, None);
        let ctx = context("Venue", "corporate", None);
        assert_eq!(estimate_timeline(&p, &ctx), "1 month");
    }

    #[test]
    fn test_timeline_formats_only() {
        let services = ["Photography", "Catering", "Venue", "Florist"];
        let events = ["wedding", "corporate", "birthday"];
        for reviews in [0, 10, 60] {
            for service in services {
                for event in events {
                    let p = provider(reviews, None);
                    let ctx = context(service, event, None);
                    let timeline = estimate_timeline(&p, &ctx);
                    let ok = timeline.ends_with("day")
                        || timeline.ends_with("days")
                        || timeline.ends_with("week")
                        || timeline.ends_with("weeks")
                        || timeline.ends_with("month")
                        || timeline.ends_with("months");
                    assert!(ok, "unexpected timeline format: {}", timeline);
                }
            }
        }
    }
}

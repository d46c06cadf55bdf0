use serde::{Deserialize, Deserializer, Serialize};
use validator::Validate;

use crate::models::domain::{RecommendationFilters, RequestContext};

/// Request for ranked provider recommendations
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RecommendationRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "service_id", rename = "serviceId")]
    pub service_id: String,
    #[validate(length(min = 1))]
    #[serde(alias = "service_name", rename = "serviceName")]
    pub service_name: String,
    #[validate(length(min = 1))]
    #[serde(alias = "event_type", rename = "eventType")]
    pub event_type: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "lenient_u64")]
    pub budget: Option<u64>,
    #[serde(default, deserialize_with = "lenient_u32")]
    #[serde(alias = "guest_count", rename = "guestCount")]
    pub guest_count: Option<u32>,
    #[serde(default)]
    #[serde(alias = "event_date", rename = "eventDate")]
    pub event_date: Option<chrono::NaiveDate>,
    #[serde(default)]
    pub filters: RecommendationFilters,
}

impl RecommendationRequest {
    pub fn context(&self) -> RequestContext {
        RequestContext {
            service_id: self.service_id.clone(),
            service_name: self.service_name.clone(),
            event_type: self.event_type.clone(),
            location: self.location.clone(),
            budget: self.budget,
            guest_count: self.guest_count,
            event_date: self.event_date,
        }
    }
}

/// Request for postings similar to a reference set
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SimilarPostingsRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "reference_job_ids", rename = "referenceJobIds")]
    pub reference_job_ids: Vec<String>,
    #[validate(range(min = 1, max = 50))]
    #[serde(default = "default_limit")]
    pub limit: u16,
}

fn default_limit() -> u16 {
    10
}

/// Accept a number, a numeric string, or anything else as "not supplied".
/// Clients send budget and guest count in inconsistent shapes; an invalid
/// value degrades to None instead of failing the whole request.
fn lenient_u64<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(coerce_u64))
}

fn lenient_u32<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value
        .as_ref()
        .and_then(coerce_u64)
        .and_then(|n| u32::try_from(n).ok()))
}

fn coerce_u64(value: &serde_json::Value) -> Option<u64> {
    match value {
        serde_json::Value::Number(n) => n.as_u64().or_else(|| {
            // Fractional budgets arrive occasionally; truncate them.
            n.as_f64().filter(|f| *f >= 0.0).map(|f| f as u64)
        }),
        serde_json::Value::String(s) => s.trim().parse::<u64>().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_fields_validated() {
        let req = RecommendationRequest {
            service_id: String::new(),
            service_name: "Catering".to_string(),
            event_type: "wedding".to_string(),
            location: None,
            budget: None,
            guest_count: None,
            event_date: None,
            filters: RecommendationFilters::default(),
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_budget_accepts_numeric_string() {
        let req: RecommendationRequest = serde_json::from_str(
            r#"{"serviceId": "s1", "serviceName": "Catering", "eventType": "wedding", "budget": "2000"}"#,
        )
        .unwrap();
        assert_eq!(req.budget, Some(2000));
    }

    #[test]
    fn test_invalid_budget_treated_as_absent() {
        let req: RecommendationRequest = serde_json::from_str(
            r#"{"serviceId": "s1", "serviceName": "Catering", "eventType": "wedding", "budget": "a lot", "guestCount": true}"#,
        )
        .unwrap();
        assert_eq!(req.budget, None);
        assert_eq!(req.guest_count, None);
    }

    #[test]
    fn test_similar_postings_limit_bounds() {
        let req: SimilarPostingsRequest =
            serde_json::from_str(r#"{"referenceJobIds": ["j1"]}"#).unwrap();
        assert_eq!(req.limit, 10);
        assert!(req.validate().is_ok());

        let req = SimilarPostingsRequest {
            reference_job_ids: vec!["j1".to_string()],
            limit: 51,
        };
        assert!(req.validate().is_err());

        let req = SimilarPostingsRequest {
            reference_job_ids: vec![],
            limit: 10,
        };
        assert!(req.validate().is_err());
    }
}

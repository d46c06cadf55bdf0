use serde::{Deserialize, Serialize};

/// Service-provider record as returned by the catalog API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Provider {
    #[serde(rename = "providerId")]
    pub provider_id: String,
    #[serde(rename = "businessName")]
    pub business_name: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub services: Vec<ServiceOffering>,
    #[serde(default)]
    pub rating: f64,
    #[serde(rename = "reviewCount", default)]
    pub review_count: u32,
    #[serde(rename = "isVerified", default)]
    pub is_verified: Option<bool>,
    #[serde(default)]
    pub tier: SubscriptionTier,
    #[serde(rename = "lastActiveAt", default)]
    pub last_active_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl Provider {
    /// Helper to get is_verified as a bool, defaulting to false
    pub fn verified(&self) -> bool {
        self.is_verified.unwrap_or(false)
    }

    /// The primary service entry is the first one the provider lists.
    pub fn primary_service(&self) -> Option<&ServiceOffering> {
        self.services.first()
    }

    pub fn price_range(&self) -> Option<&PriceRange> {
        self.primary_service().and_then(|s| s.price_range.as_ref())
    }

    /// Availability is carried by the primary service entry's status.
    pub fn is_available(&self) -> bool {
        self.primary_service()
            .map(|s| s.status == ServiceStatus::Available)
            .unwrap_or(false)
    }
}

/// One service category a provider offers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceOffering {
    pub name: String,
    #[serde(default)]
    pub status: ServiceStatus,
    #[serde(rename = "priceRange", default)]
    pub price_range: Option<PriceRange>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceStatus {
    Available,
    /// Unknown statuses from the catalog collapse to busy rather than
    /// failing deserialization.
    #[serde(other)]
    Busy,
}

impl Default for ServiceStatus {
    fn default() -> Self {
        ServiceStatus::Busy
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionTier {
    Premium,
    #[serde(other)]
    Standard,
}

impl Default for SubscriptionTier {
    fn default() -> Self {
        SubscriptionTier::Standard
    }
}

/// Price range in whole currency units
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: u64,
    pub max: u64,
}

impl PriceRange {
    pub fn midpoint(&self) -> u64 {
        (self.min + self.max) / 2
    }

    pub fn contains(&self, amount: u64) -> bool {
        amount >= self.min && amount <= self.max
    }

    /// Within +/-20% of the range on either side.
    pub fn near(&self, amount: u64) -> bool {
        let amount = amount as f64;
        amount >= self.min as f64 * 0.8 && amount <= self.max as f64 * 1.2
    }

    pub fn intersects(&self, other: &PriceRange) -> bool {
        self.min <= other.max && other.min <= self.max
    }
}

/// The request being matched against: what the caller wants and where
#[derive(Debug, Clone)]
pub struct RequestContext {
    pub service_id: String,
    pub service_name: String,
    pub event_type: String,
    pub location: Option<String>,
    pub budget: Option<u64>,
    pub guest_count: Option<u32>,
    pub event_date: Option<chrono::NaiveDate>,
}

/// Scored provider recommendation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredProvider {
    #[serde(rename = "providerId")]
    pub provider_id: String,
    #[serde(rename = "businessName")]
    pub business_name: String,
    pub location: String,
    pub rating: f64,
    #[serde(rename = "reviewCount")]
    pub review_count: u32,
    #[serde(rename = "isVerified")]
    pub is_verified: bool,
    pub tier: SubscriptionTier,
    #[serde(rename = "matchScore")]
    pub match_score: u8,
    pub reasoning: Vec<String>,
    #[serde(rename = "estimatedCost")]
    pub estimated_cost: u64,
    #[serde(rename = "estimatedTimeline")]
    pub estimated_timeline: String,
    pub availability: bool,
    pub priority: Priority,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

/// Post-score filters applied to an already-ranked list
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecommendationFilters {
    #[serde(default)]
    pub location: Option<String>,
    #[serde(rename = "priceRange", default)]
    pub price_range: Option<PriceBucket>,
    #[serde(rename = "minRating", default)]
    pub min_rating: Option<f64>,
    #[serde(default)]
    pub availability: Option<bool>,
    #[serde(rename = "verifiedOnly", default)]
    pub verified_only: Option<bool>,
}

/// Price bucket for the estimated-cost filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PriceBucket {
    #[serde(rename = "under-1000")]
    Under1000,
    #[serde(rename = "1000-5000")]
    From1000To5000,
    #[serde(rename = "5000-10000")]
    From5000To10000,
    #[serde(rename = "over-10000")]
    Over10000,
}

impl PriceBucket {
    pub fn contains(&self, cost: u64) -> bool {
        match self {
            PriceBucket::Under1000 => cost < 1000,
            PriceBucket::From1000To5000 => (1000..=5000).contains(&cost),
            PriceBucket::From5000To10000 => (5000..=10000).contains(&cost),
            PriceBucket::Over10000 => cost > 10000,
        }
    }
}

/// Job posting record used by the similarity variant
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobPosting {
    #[serde(rename = "jobId")]
    pub job_id: String,
    pub title: String,
    pub category: String,
    #[serde(default)]
    pub location: String,
    pub budget: PriceRange,
    #[serde(rename = "jobType")]
    pub job_type: String,
    #[serde(rename = "remoteAllowed", default)]
    pub remote_allowed: bool,
}

/// Posting scored against a reference set
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimilarPosting {
    #[serde(rename = "jobId")]
    pub job_id: String,
    pub title: String,
    pub category: String,
    pub location: String,
    #[serde(rename = "jobType")]
    pub job_type: String,
    pub similarity: u8,
    pub reasons: Vec<String>,
}

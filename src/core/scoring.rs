use crate::core::features::{BudgetFit, ExperienceTier, MatchFeatures, RatingTier};
use crate::models::Priority;

/// One row of a rule table: a named factor and the points it contributes
/// for a given feature set. Points are already weighted; the scoring loop
/// just sums them.
pub struct Factor<F> {
    pub name: &'static str,
    pub points: fn(&F) -> f64,
}

/// Sum a rule table over a feature set, round to the nearest integer and
/// clamp to [0, 100].
pub fn weighted_score<F>(table: &[Factor<F>], features: &F) -> u8 {
    let total: f64 = table.iter().map(|factor| (factor.points)(features)).sum();
    total.round().clamp(0.0, 100.0) as u8
}

// Provider rule table. Full-tier weights sum to exactly 100 so a provider
// matching every factor at its top tier scores 100.
pub const SERVICE_MATCH_POINTS: f64 = 40.0;
pub const AVAILABLE_POINTS: f64 = 10.0;
pub const BUSY_POINTS: f64 = 5.0;
pub const LOCATION_OVERLAP_POINTS: f64 = 10.0;
pub const LOCATION_DEFAULT_POINTS: f64 = 5.0;
pub const BUDGET_EXACT_POINTS: f64 = 5.0;
pub const BUDGET_NEAR_POINTS: f64 = 3.0;
pub const BUDGET_DEFAULT_POINTS: f64 = 2.5;

pub const PROVIDER_FACTORS: &[Factor<MatchFeatures>] = &[
    Factor { name: "service", points: service_points },
    Factor { name: "rating", points: rating_points },
    Factor { name: "experience", points: experience_points },
    Factor { name: "availability", points: availability_points },
    Factor { name: "location", points: location_points },
    Factor { name: "budget", points: budget_points },
];

fn service_points(features: &MatchFeatures) -> f64 {
    if features.service_match {
        SERVICE_MATCH_POINTS
    } else {
        0.0
    }
}

pub fn rating_points_for(tier: RatingTier) -> f64 {
    match tier {
        RatingTier::Excellent => 20.0,
        RatingTier::High => 15.0,
        RatingTier::Fair => 10.0,
        RatingTier::Low => 5.0,
        RatingTier::None => 0.0,
    }
}

fn rating_points(features: &MatchFeatures) -> f64 {
    rating_points_for(features.rating)
}

pub fn experience_points_for(tier: ExperienceTier) -> f64 {
    match tier {
        ExperienceTier::Veteran => 15.0,
        ExperienceTier::Experienced => 12.0,
        ExperienceTier::Some => 8.0,
        ExperienceTier::New => 3.0,
    }
}

fn experience_points(features: &MatchFeatures) -> f64 {
    experience_points_for(features.experience)
}

// Busy providers keep partial credit; unavailability is a soft signal.
fn availability_points(features: &MatchFeatures) -> f64 {
    if features.available {
        AVAILABLE_POINTS
    } else {
        BUSY_POINTS
    }
}

// Default credit applies both when no location was supplied and when the
// strings simply don't overlap.
fn location_points(features: &MatchFeatures) -> f64 {
    if features.location_overlap {
        LOCATION_OVERLAP_POINTS
    } else {
        LOCATION_DEFAULT_POINTS
    }
}

fn budget_points(features: &MatchFeatures) -> f64 {
    match features.budget {
        BudgetFit::Exact => BUDGET_EXACT_POINTS,
        BudgetFit::Near => BUDGET_NEAR_POINTS,
        BudgetFit::Unspecified => BUDGET_DEFAULT_POINTS,
        BudgetFit::Miss => 0.0,
    }
}

/// Signals for the posting-similarity variant, computed against the whole
/// reference set (any reference posting matching counts).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimilarityFeatures {
    pub category_match: bool,
    pub location_match: bool,
    pub budget_overlap: bool,
    pub job_type_match: bool,
    pub remote_match: bool,
    pub title_token_match: bool,
}

// Similarity rule table. Base weights sum to 100; the title-token bonus can
// push the raw sum to 105, which the scoring loop caps back to 100.
pub const CATEGORY_MATCH_POINTS: f64 = 40.0;
pub const LOCATION_MATCH_POINTS: f64 = 25.0;
pub const BUDGET_OVERLAP_POINTS: f64 = 20.0;
pub const JOB_TYPE_MATCH_POINTS: f64 = 10.0;
pub const REMOTE_MATCH_POINTS: f64 = 5.0;
pub const TITLE_TOKEN_BONUS: f64 = 5.0;

/// Postings at or below this similarity never appear in results.
pub const SIMILARITY_CUTOFF: u8 = 30;

pub const SIMILARITY_FACTORS: &[Factor<SimilarityFeatures>] = &[
    Factor { name: "category", points: category_points },
    Factor { name: "location", points: sim_location_points },
    Factor { name: "budget", points: budget_overlap_points },
    Factor { name: "job_type", points: job_type_points },
    Factor { name: "remote", points: remote_points },
    Factor { name: "title", points: title_points },
];

fn category_points(features: &SimilarityFeatures) -> f64 {
    if features.category_match {
        CATEGORY_MATCH_POINTS
    } else {
        0.0
    }
}

fn sim_location_points(features: &SimilarityFeatures) -> f64 {
    if features.location_match {
        LOCATION_MATCH_POINTS
    } else {
        0.0
    }
}

fn budget_overlap_points(features: &SimilarityFeatures) -> f64 {
    if features.budget_overlap {
        BUDGET_OVERLAP_POINTS
    } else {
        0.0
    }
}

fn job_type_points(features: &SimilarityFeatures) -> f64 {
    if features.job_type_match {
        JOB_TYPE_MATCH_POINTS
    } else {
        0.0
    }
}

fn remote_points(features: &SimilarityFeatures) -> f64 {
    if features.remote_match {
        REMOTE_MATCH_POINTS
    } else {
        0.0
    }
}

fn title_points(features: &SimilarityFeatures) -> f64 {
    if features.title_token_match {
        TITLE_TOKEN_BONUS
    } else {
        0.0
    }
}

/// Map a final match score to a coarse priority tier. Lower boundaries are
/// inclusive: 84 is medium, 85 is high.
#[inline]
pub fn classify_priority(score: u8) -> Priority {
    if score >= 85 {
        Priority::High
    } else if score >= 65 {
        Priority::Medium
    } else {
        Priority::Low
    }
}

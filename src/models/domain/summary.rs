use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct StorySummary {
    #[validate(length(min = 1))]
    pub title: String,

    #[validate(nested)]
    pub feedback: FeedbackSet,
}

/// One feedback text per performance tier. All five must be present for a
/// document to be usable.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackSet {
    #[validate(length(min = 1))]
    pub excellent: String,

    #[validate(length(min = 1))]
    pub very_good: String,

    #[validate(length(min = 1))]
    pub good: String,

    #[validate(length(min = 1))]
    pub needs_improvement: String,

    #[validate(length(min = 1))]
    pub beginner: String,
}

impl FeedbackSet {
    pub fn for_tier(&self, tier: ScoreTier) -> &str {
        match tier {
            ScoreTier::Excellent => &self.excellent,
            ScoreTier::VeryGood => &self.very_good,
            ScoreTier::Good => &self.good,
            ScoreTier::NeedsImprovement => &self.needs_improvement,
            ScoreTier::Beginner => &self.beginner,
        }
    }
}

/// Performance bracket derived from the share of correctly answered
/// questions. Variants are declared worst-first so the derived `Ord` ranks
/// `Beginner < NeedsImprovement < Good < VeryGood < Excellent`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ScoreTier {
    Beginner,
    NeedsImprovement,
    Good,
    VeryGood,
    Excellent,
}

impl ScoreTier {
    pub fn name(&self) -> &'static str {
        match self {
            ScoreTier::Excellent => "excellent",
            ScoreTier::VeryGood => "veryGood",
            ScoreTier::Good => "good",
            ScoreTier::NeedsImprovement => "needsImprovement",
            ScoreTier::Beginner => "beginner",
        }
    }
}

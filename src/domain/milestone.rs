use std::fmt;

use chrono::NaiveDate;
use serde::Serialize;

/// One aggregation period. Calendar policies key buckets by UTC date,
/// the event-epoch policy by a zero-based day offset. A run never mixes
/// the two variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(untagged)]
pub enum BucketKey {
    DayIndex(i64),
    Date(NaiveDate),
}

impl fmt::Display for BucketKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BucketKey::DayIndex(index) => write!(f, "Day {}", index + 1),
            BucketKey::Date(date) => write!(f, "{}", date.format("%Y-%m-%d")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMilestone {
    pub team_id: i64,
    pub team_name: String,
    pub daily_total: i64,
    pub cumulative_total: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hourly_breakdown: Option<[i64; 24]>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Milestone {
    pub day: BucketKey,
    pub teams: Vec<TeamMilestone>,
    pub day_total: i64,
    pub cumulative_total: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MilestoneReport {
    pub milestones: Vec<Milestone>,
}

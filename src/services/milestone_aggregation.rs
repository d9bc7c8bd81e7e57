use std::collections::{BTreeMap, HashMap};

use chrono::{DateTime, Timelike, Utc};
use thiserror::Error;

use crate::domain::milestone::{BucketKey, Milestone, MilestoneReport, TeamMilestone};
use crate::domain::submission::Submission;

#[derive(Error, Debug)]
pub enum BucketPolicyError {
    #[error("day start hour must be below 24, got {0}")]
    InvalidHourOffset(u32),
    #[error("invalid event start instant: {0}")]
    InvalidEventStart(String),
    #[error("event start and day start hour are mutually exclusive")]
    ConflictingOptions,
}

/// How submission timestamps map onto leaderboard buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BucketPolicy {
    /// UTC calendar date.
    CalendarDay,
    /// UTC calendar date, but timestamps before `hour_offset` o'clock
    /// count towards the previous date. Models an event whose day rolls
    /// over at a non-midnight hour.
    CalendarDayWithOffset { hour_offset: u32 },
    /// Zero-based day offset from a fixed event start. Timestamps before
    /// the epoch land in negative buckets.
    DayIndexFrom { epoch: DateTime<Utc> },
}

impl BucketPolicy {
    /// Resolves the policy from the CLI options. With neither option the
    /// plain calendar-day policy applies.
    pub fn from_options(
        event_start: Option<&str>,
        day_start_hour: Option<u32>,
    ) -> Result<Self, BucketPolicyError> {
        match (event_start, day_start_hour) {
            (Some(_), Some(_)) => Err(BucketPolicyError::ConflictingOptions),
            (Some(start), None) => {
                let epoch = DateTime::parse_from_rfc3339(start)
                    .map_err(|_| BucketPolicyError::InvalidEventStart(start.to_string()))?
                    .with_timezone(&Utc);
                Ok(BucketPolicy::DayIndexFrom { epoch })
            }
            (None, Some(hour_offset)) => {
                if hour_offset >= 24 {
                    return Err(BucketPolicyError::InvalidHourOffset(hour_offset));
                }
                Ok(BucketPolicy::CalendarDayWithOffset { hour_offset })
            }
            (None, None) => Ok(BucketPolicy::CalendarDay),
        }
    }

    fn bucket_key(&self, created_at: DateTime<Utc>) -> BucketKey {
        match self {
            BucketPolicy::CalendarDay => BucketKey::Date(created_at.date_naive()),
            BucketPolicy::CalendarDayWithOffset { hour_offset } => {
                let date = created_at.date_naive();
                if created_at.hour() < *hour_offset {
                    BucketKey::Date(date.pred_opt().unwrap_or(date))
                } else {
                    BucketKey::Date(date)
                }
            }
            BucketPolicy::DayIndexFrom { epoch } => {
                let seconds = (created_at - *epoch).num_seconds();
                BucketKey::DayIndex(seconds.div_euclid(86_400))
            }
        }
    }

    /// Hour slot within the bucket, 0..24, measured from the bucket's
    /// start instant.
    fn hour_in_bucket(&self, created_at: DateTime<Utc>) -> usize {
        match self {
            BucketPolicy::CalendarDay => created_at.hour() as usize,
            BucketPolicy::CalendarDayWithOffset { hour_offset } => {
                ((24 + created_at.hour() - hour_offset % 24) % 24) as usize
            }
            BucketPolicy::DayIndexFrom { epoch } => {
                let seconds = (created_at - *epoch).num_seconds();
                seconds.div_euclid(3_600).rem_euclid(24) as usize
            }
        }
    }
}

struct TeamAccumulator {
    team_name: String,
    daily_total: i64,
    hourly: [i64; 24],
}

/// Buckets submissions by day and team and walks the buckets in
/// chronological order, carrying per-team and overall running totals.
///
/// The caller supplies approved submissions only; this function does not
/// look at `status` and will happily sum whatever it is given. A stored
/// value that no longer parses contributes 0 rather than failing the
/// whole leaderboard. Teams without activity in a bucket are omitted
/// from that bucket, not zero-filled.
pub fn aggregate_milestones(
    submissions: &[Submission],
    policy: BucketPolicy,
    include_hourly: bool,
) -> MilestoneReport {
    let mut buckets: BTreeMap<BucketKey, BTreeMap<i64, TeamAccumulator>> = BTreeMap::new();

    for submission in submissions {
        let value = submission.value.parse::<i64>().unwrap_or(0);
        let key = policy.bucket_key(submission.created_at);
        let hour = policy.hour_in_bucket(submission.created_at);

        let team = buckets
            .entry(key)
            .or_default()
            .entry(submission.team.id)
            .or_insert_with(|| TeamAccumulator {
                team_name: submission.team.name.clone(),
                daily_total: 0,
                hourly: [0; 24],
            });
        team.daily_total += value;
        team.hourly[hour] += value;
    }

    let mut cumulative_by_team: HashMap<i64, i64> = HashMap::new();
    let mut cumulative_overall = 0;
    let mut milestones = Vec::with_capacity(buckets.len());

    for (day, teams) in buckets {
        let mut day_total = 0;
        let entries: Vec<TeamMilestone> = teams
            .into_iter()
            .map(|(team_id, accumulator)| {
                let cumulative = cumulative_by_team.entry(team_id).or_insert(0);
                *cumulative += accumulator.daily_total;
                day_total += accumulator.daily_total;
                TeamMilestone {
                    team_id,
                    team_name: accumulator.team_name,
                    daily_total: accumulator.daily_total,
                    cumulative_total: *cumulative,
                    hourly_breakdown: include_hourly.then_some(accumulator.hourly),
                }
            })
            .collect();

        cumulative_overall += day_total;
        milestones.push(Milestone {
            day,
            teams: entries,
            day_total,
            cumulative_total: cumulative_overall,
        });
    }

    MilestoneReport { milestones }
}

use std::cell::Cell;

use chrono::{DateTime, TimeDelta, TimeZone, Utc};

use crate::domain::submission::{Submission, SubmissionStatus, TeamRef};
use crate::services::ttl_cache::Clock;

pub fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .unwrap()
}

pub fn build_submission(
    id: i64,
    value: &str,
    created_at: DateTime<Utc>,
    team_id: i64,
    team_name: &str,
) -> Submission {
    Submission {
        id,
        name: Some("Drop".to_string()),
        value: value.to_string(),
        rsn: None,
        created_at,
        team: TeamRef {
            id: team_id,
            name: team_name.to_string(),
        },
        status: SubmissionStatus::Approved,
    }
}

pub fn build_member_submission(
    id: i64,
    value: &str,
    created_at: DateTime<Utc>,
    team_id: i64,
    team_name: &str,
    rsn: &str,
) -> Submission {
    let mut submission = build_submission(id, value, created_at, team_id, team_name);
    submission.rsn = Some(rsn.to_string());
    submission
}

/// Hand-cranked clock for cache expiry tests.
pub struct ManualClock {
    now: Cell<DateTime<Utc>>,
}

impl ManualClock {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            now: Cell::new(start),
        }
    }

    pub fn advance(&self, delta: TimeDelta) {
        self.now.set(self.now.get() + delta);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        self.now.get()
    }
}

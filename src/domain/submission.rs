use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionStatus {
    Pending,
    Approved,
    Rejected,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamRef {
    pub id: i64,
    pub name: String,
}

/// One scored item handed in by a participant. `value` holds the integer
/// quantity as normalized at intake time; it is stored as a string and
/// parsed back to a number before aggregation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub id: i64,
    pub name: Option<String>,
    pub value: String,
    pub rsn: Option<String>,
    pub created_at: DateTime<Utc>,
    pub team: TeamRef,
    pub status: SubmissionStatus,
}

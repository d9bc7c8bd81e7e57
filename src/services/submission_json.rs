use std::io;

use chrono::{DateTime, Utc};
use serde::Deserialize;
use thiserror::Error;

use crate::domain::submission::{Submission, SubmissionStatus, TeamRef};

#[derive(Error, Debug)]
pub enum SubmissionJsonError {
    #[error("failed to read submission export: {0}")]
    Read(#[from] io::Error),
    #[error("failed to parse submission export: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid timestamp for submission {id}: {value}")]
    InvalidTimestamp { id: i64, value: String },
    #[error("submission {id} timestamp must be an RFC 3339 string or epoch milliseconds")]
    UnsupportedTimestamp { id: i64 },
    #[error("invalid status for submission {id}: {value}")]
    InvalidStatus { id: i64, value: String },
    #[error("submission {id} value must be a string or number")]
    InvalidValue { id: i64 },
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SubmissionRecord {
    id: i64,
    #[serde(default)]
    name: Option<String>,
    value: serde_json::Value,
    #[serde(default)]
    rsn: Option<String>,
    status: String,
    created_at: serde_json::Value,
    team: TeamRecord,
}

#[derive(Deserialize)]
struct TeamRecord {
    id: i64,
    name: String,
}

pub fn load_submissions_from_json_file(path: &str) -> Result<Vec<Submission>, SubmissionJsonError> {
    let contents = std::fs::read_to_string(path)?;
    deserialize_submissions_from_json_str(&contents)
}

pub fn deserialize_submissions_from_json_str(
    input: &str,
) -> Result<Vec<Submission>, SubmissionJsonError> {
    let records: Vec<SubmissionRecord> = serde_json::from_str(input)?;
    records.into_iter().map(submission_from_record).collect()
}

fn submission_from_record(record: SubmissionRecord) -> Result<Submission, SubmissionJsonError> {
    let created_at = parse_timestamp(record.id, record.created_at)?;
    let status = parse_status(record.id, &record.status)?;
    let value = match record.value {
        serde_json::Value::String(value) => value,
        serde_json::Value::Number(value) => value.to_string(),
        _ => return Err(SubmissionJsonError::InvalidValue { id: record.id }),
    };

    Ok(Submission {
        id: record.id,
        name: record.name,
        value,
        rsn: record.rsn,
        created_at,
        team: TeamRef {
            id: record.team.id,
            name: record.team.name,
        },
        status,
    })
}

// Exports carry RFC 3339 strings; older dumps used epoch milliseconds.
fn parse_timestamp(
    id: i64,
    value: serde_json::Value,
) -> Result<DateTime<Utc>, SubmissionJsonError> {
    match value {
        serde_json::Value::String(text) => DateTime::parse_from_rfc3339(&text)
            .map(|parsed| parsed.with_timezone(&Utc))
            .map_err(|_| SubmissionJsonError::InvalidTimestamp { id, value: text }),
        serde_json::Value::Number(millis) => millis
            .as_i64()
            .and_then(DateTime::from_timestamp_millis)
            .ok_or(SubmissionJsonError::InvalidTimestamp {
                id,
                value: millis.to_string(),
            }),
        _ => Err(SubmissionJsonError::UnsupportedTimestamp { id }),
    }
}

fn parse_status(id: i64, value: &str) -> Result<SubmissionStatus, SubmissionJsonError> {
    match value {
        "PENDING" => Ok(SubmissionStatus::Pending),
        "APPROVED" => Ok(SubmissionStatus::Approved),
        "REJECTED" => Ok(SubmissionStatus::Rejected),
        other => Err(SubmissionJsonError::InvalidStatus {
            id,
            value: other.to_string(),
        }),
    }
}

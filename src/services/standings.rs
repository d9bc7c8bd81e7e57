use std::collections::HashMap;

use serde::Serialize;

use crate::domain::submission::{Submission, SubmissionStatus};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberStanding {
    pub rsn: String,
    pub submission_total: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamStanding {
    pub team_id: i64,
    pub team_name: String,
    pub team_total: i64,
    pub members: Vec<MemberStanding>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StandingsReport {
    pub teams: Vec<TeamStanding>,
}

struct TeamAccumulator {
    team_name: String,
    team_total: i64,
    member_totals: HashMap<String, i64>,
}

/// Current team totals over approved submissions, best team first, with
/// per-member totals for everyone who submitted under an RSN.
/// Unlike the milestone aggregator this filters on status itself, since
/// standings are computed straight off a full export.
pub fn team_standings(submissions: &[Submission]) -> StandingsReport {
    let mut accumulators: HashMap<i64, TeamAccumulator> = HashMap::new();

    for submission in submissions {
        if submission.status != SubmissionStatus::Approved {
            continue;
        }
        let value = submission.value.parse::<i64>().unwrap_or(0);
        let team = accumulators
            .entry(submission.team.id)
            .or_insert_with(|| TeamAccumulator {
                team_name: submission.team.name.clone(),
                team_total: 0,
                member_totals: HashMap::new(),
            });
        team.team_total += value;
        if let Some(rsn) = &submission.rsn {
            *team.member_totals.entry(rsn.clone()).or_insert(0) += value;
        }
    }

    let mut teams: Vec<TeamStanding> = accumulators
        .into_iter()
        .map(|(team_id, accumulator)| {
            let mut members: Vec<MemberStanding> = accumulator
                .member_totals
                .into_iter()
                .map(|(rsn, submission_total)| MemberStanding {
                    rsn,
                    submission_total,
                })
                .collect();
            members.sort_by(|a, b| {
                b.submission_total
                    .cmp(&a.submission_total)
                    .then_with(|| a.rsn.cmp(&b.rsn))
            });
            TeamStanding {
                team_id,
                team_name: accumulator.team_name,
                team_total: accumulator.team_total,
                members,
            }
        })
        .collect();
    teams.sort_by(|a, b| {
        b.team_total
            .cmp(&a.team_total)
            .then_with(|| a.team_id.cmp(&b.team_id))
    });

    StandingsReport { teams }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{at, build_member_submission, build_submission};

    #[test]
    fn teams_rank_by_approved_totals() {
        let mut pending = build_submission(4, "999", at(2025, 5, 16, 15, 0), 1, "Bandos");
        pending.status = SubmissionStatus::Pending;
        let submissions = vec![
            build_submission(1, "100", at(2025, 5, 16, 12, 0), 1, "Bandos"),
            build_submission(2, "300", at(2025, 5, 16, 13, 0), 2, "Zamorak"),
            build_submission(3, "50", at(2025, 5, 16, 14, 0), 1, "Bandos"),
            pending,
        ];

        let report = team_standings(&submissions);
        assert_eq!(report.teams.len(), 2);
        assert_eq!(report.teams[0].team_name, "Zamorak");
        assert_eq!(report.teams[0].team_total, 300);
        assert_eq!(report.teams[1].team_name, "Bandos");
        assert_eq!(report.teams[1].team_total, 150);
    }

    #[test]
    fn members_rank_within_their_team() {
        let submissions = vec![
            build_member_submission(1, "100", at(2025, 5, 16, 12, 0), 1, "Bandos", "ruto"),
            build_member_submission(2, "400", at(2025, 5, 16, 13, 0), 1, "Bandos", "sniken"),
            build_member_submission(3, "200", at(2025, 5, 16, 14, 0), 1, "Bandos", "ruto"),
        ];

        let report = team_standings(&submissions);
        let members = &report.teams[0].members;
        assert_eq!(members.len(), 2);
        assert_eq!(members[0].rsn, "sniken");
        assert_eq!(members[0].submission_total, 400);
        assert_eq!(members[1].rsn, "ruto");
        assert_eq!(members[1].submission_total, 300);
    }

    #[test]
    fn submissions_without_an_rsn_still_count_for_the_team() {
        let submissions = vec![build_submission(1, "100", at(2025, 5, 16, 12, 0), 1, "Bandos")];

        let report = team_standings(&submissions);
        assert_eq!(report.teams[0].team_total, 100);
        assert!(report.teams[0].members.is_empty());
    }

    #[test]
    fn no_submissions_mean_no_teams() {
        let report = team_standings(&[]);
        assert!(report.teams.is_empty());
    }
}

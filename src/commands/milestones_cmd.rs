use crate::commands::base_commands::Commands;
use crate::domain::submission::{Submission, SubmissionStatus};
use crate::services::milestone_aggregation::{aggregate_milestones, BucketPolicy};
use crate::services::submission_json::load_submissions_from_json_file;

pub async fn milestones_command(cmd: Commands) {
    if let Commands::Milestones {
        input,
        output,
        day_start_hour,
        event_start,
        hourly,
    } = cmd
    {
        let policy = match BucketPolicy::from_options(event_start.as_deref(), day_start_hour) {
            Ok(policy) => policy,
            Err(e) => {
                eprintln!("Invalid bucketing options: {e}");
                return;
            }
        };

        let submissions = match load_submissions_from_json_file(&input) {
            Ok(submissions) => submissions,
            Err(e) => {
                eprintln!("Failed to load submissions: {e}");
                return;
            }
        };

        let approved: Vec<Submission> = submissions
            .into_iter()
            .filter(|submission| submission.status == SubmissionStatus::Approved)
            .collect();

        let report = aggregate_milestones(&approved, policy, hourly);
        let json = match serde_json::to_string_pretty(&report) {
            Ok(json) => json,
            Err(e) => {
                eprintln!("Failed to serialize milestone report: {e}");
                return;
            }
        };

        if let Err(e) = tokio::fs::write(&output, json).await {
            eprintln!("Failed to write output file: {e}");
        } else {
            println!("Milestone report written to {output}");
        }
    }
}

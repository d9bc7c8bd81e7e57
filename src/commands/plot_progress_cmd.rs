use crate::commands::base_commands::Commands;
use crate::domain::submission::{Submission, SubmissionStatus};
use crate::services::milestone_aggregation::{aggregate_milestones, BucketPolicy};
use crate::services::progress_plot::plot_progress_png;
use crate::services::submission_json::load_submissions_from_json_file;

pub async fn plot_progress_command(cmd: Commands) {
    if let Commands::PlotProgress {
        input,
        output,
        day_start_hour,
        event_start,
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

        let report = aggregate_milestones(&approved, policy, false);
        match plot_progress_png(&output, &report).await {
            Ok(()) => println!("Progress chart written to {output}"),
            Err(e) => eprintln!("Failed to plot progress: {e}"),
        }
    }
}

use crate::commands::base_commands::Commands;
use crate::commands::report_format::format_standings_report;
use crate::services::standings::team_standings;
use crate::services::submission_json::load_submissions_from_json_file;

pub async fn standings_command(cmd: Commands) {
    if let Commands::Standings { input, output } = cmd {
        let submissions = match load_submissions_from_json_file(&input) {
            Ok(submissions) => submissions,
            Err(e) => {
                eprintln!("Failed to load submissions: {e}");
                return;
            }
        };

        let report = team_standings(&submissions);
        match output {
            Some(output) => {
                let json = match serde_json::to_string_pretty(&report) {
                    Ok(json) => json,
                    Err(e) => {
                        eprintln!("Failed to serialize standings: {e}");
                        return;
                    }
                };
                if let Err(e) = tokio::fs::write(&output, json).await {
                    eprintln!("Failed to write output file: {e}");
                } else {
                    println!("Standings written to {output}");
                }
            }
            None => println!("{}", format_standings_report(&report)),
        }
    }
}

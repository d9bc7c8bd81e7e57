use crate::services::standings::StandingsReport;
use crate::services::value_format::format_value_output;

fn display_total(total: i64) -> String {
    format_value_output(total as f64).unwrap_or_else(|| total.to_string())
}

pub fn format_standings_report(report: &StandingsReport) -> String {
    let mut lines = Vec::new();
    lines.push("Team Standings".to_string());

    if report.teams.is_empty() {
        lines.push("No approved submissions yet".to_string());
        return lines.join("\n");
    }

    lines.push("Rank | Team | Total".to_string());
    lines.push("-----|------|------".to_string());
    for (index, team) in report.teams.iter().enumerate() {
        lines.push(format!(
            "{rank} | {name} | {total}",
            rank = index + 1,
            name = team.team_name,
            total = display_total(team.team_total)
        ));
        for member in &team.members {
            lines.push(format!(
                "  - {rsn} | {total}",
                rsn = member.rsn,
                total = display_total(member.submission_total)
            ));
        }
    }

    lines.join("\n")
}

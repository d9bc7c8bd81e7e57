use plotters::prelude::*;
use thiserror::Error;

use crate::domain::milestone::MilestoneReport;

#[derive(Error, Debug)]
pub enum ProgressPlotError {
    #[error("milestone report is empty")]
    EmptyReport,
    #[error("failed to render progress plot: {0}")]
    Plot(String),
}

/// Renders per-team cumulative totals as a line chart. Buckets where a
/// team had no activity carry its previous cumulative forward, so the
/// line stays flat instead of dropping to zero.
pub async fn plot_progress_png(
    output_path: &str,
    report: &MilestoneReport,
) -> Result<(), ProgressPlotError> {
    if report.milestones.is_empty() {
        return Err(ProgressPlotError::EmptyReport);
    }
    let output_path = output_path.to_string();
    let report = report.clone();
    tokio::task::spawn_blocking(move || render_progress_png(&output_path, &report))
        .await
        .map_err(|e| ProgressPlotError::Plot(e.to_string()))??;
    Ok(())
}

struct TeamSeries {
    team_name: String,
    cumulative: Vec<i64>,
}

fn team_series(report: &MilestoneReport) -> Vec<TeamSeries> {
    let mut team_ids: Vec<i64> = Vec::new();
    for milestone in &report.milestones {
        for team in &milestone.teams {
            if !team_ids.contains(&team.team_id) {
                team_ids.push(team.team_id);
            }
        }
    }

    team_ids
        .into_iter()
        .map(|team_id| {
            let mut team_name = String::new();
            let mut cumulative = Vec::with_capacity(report.milestones.len());
            let mut last = 0;
            for milestone in &report.milestones {
                if let Some(team) = milestone.teams.iter().find(|team| team.team_id == team_id) {
                    last = team.cumulative_total;
                    team_name = team.team_name.clone();
                }
                cumulative.push(last);
            }
            TeamSeries {
                team_name,
                cumulative,
            }
        })
        .collect()
}

fn render_progress_png(
    output_path: &str,
    report: &MilestoneReport,
) -> Result<(), ProgressPlotError> {
    let series = team_series(report);
    let max_total = series
        .iter()
        .flat_map(|team| team.cumulative.iter().copied())
        .max()
        .unwrap_or(0);
    let max_y = max_total.max(1);
    let max_x = (report.milestones.len() as i32 - 1).max(1);

    let root = BitMapBackend::new(output_path, (900, 600)).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| ProgressPlotError::Plot(e.to_string()))?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption("Team Progress", ("sans-serif", 30))
        .x_label_area_size(55)
        .y_label_area_size(85)
        .build_cartesian_2d(0..max_x, 0..max_y)
        .map_err(|e| ProgressPlotError::Plot(e.to_string()))?;

    let label_count = report.milestones.len().min(10).max(1);
    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc("Day")
        .y_desc("Cumulative total")
        .label_style(("sans-serif", 18))
        .axis_desc_style(("sans-serif", 22))
        .x_labels(label_count)
        .x_label_formatter(&|index| {
            if *index < 0 {
                return String::new();
            }
            report
                .milestones
                .get(*index as usize)
                .map(|milestone| milestone.day.to_string())
                .unwrap_or_default()
        })
        .draw()
        .map_err(|e| ProgressPlotError::Plot(e.to_string()))?;

    for (index, team) in series.iter().enumerate() {
        let color = Palette99::pick(index);
        chart
            .draw_series(LineSeries::new(
                team.cumulative
                    .iter()
                    .enumerate()
                    .map(|(bucket, total)| (bucket as i32, *total)),
                color.stroke_width(2),
            ))
            .map_err(|e| ProgressPlotError::Plot(e.to_string()))?
            .label(team.team_name.clone())
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2))
            });
    }

    chart
        .configure_series_labels()
        .border_style(&BLACK)
        .background_style(&WHITE.mix(0.8))
        .draw()
        .map_err(|e| ProgressPlotError::Plot(e.to_string()))?;

    root.present()
        .map_err(|e| ProgressPlotError::Plot(e.to_string()))?;
    Ok(())
}

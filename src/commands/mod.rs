pub mod base_commands;
pub mod fetch_hiscores_cmd;
pub mod gains_cmd;
pub mod milestones_cmd;
pub mod plot_progress_cmd;
pub mod prices_cmd;
pub mod report_format;
pub mod standings_cmd;
pub mod value_cmd;

mod commands;
mod domain;
mod services;
#[cfg(test)]
mod test_support;

use clap::{CommandFactory, Parser};

use crate::commands::base_commands::{CliArgs, Commands};
use crate::commands::fetch_hiscores_cmd::fetch_hiscores_command;
use crate::commands::gains_cmd::gains_command;
use crate::commands::milestones_cmd::milestones_command;
use crate::commands::plot_progress_cmd::plot_progress_command;
use crate::commands::prices_cmd::prices_command;
use crate::commands::standings_cmd::standings_command;
use crate::commands::value_cmd::value_command;

#[tokio::main]
async fn main() {
    let args = CliArgs::parse();
    match args.command {
        cmd @ Commands::Milestones { .. } => milestones_command(cmd).await,
        cmd @ Commands::Standings { .. } => standings_command(cmd).await,
        cmd @ Commands::Value { .. } => value_command(cmd),
        cmd @ Commands::FetchHiscores { .. } => fetch_hiscores_command(cmd).await,
        cmd @ Commands::Gains { .. } => gains_command(cmd).await,
        cmd @ Commands::Prices { .. } => prices_command(cmd).await,
        cmd @ Commands::PlotProgress { .. } => plot_progress_command(cmd).await,
        Commands::Completions { shell } => {
            let mut command = CliArgs::command();
            clap_complete::generate(shell, &mut command, "clanboard", &mut std::io::stdout());
        }
    }
}

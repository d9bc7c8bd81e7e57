use std::path::Path;

use crate::commands::base_commands::Commands;
use crate::services::efficiency::RateTables;
use crate::services::event_config::EventConfig;
use crate::services::hiscore_diff::{player_gains, GainsReport};
use crate::services::snapshot_store::{list_snapshots, read_snapshot};

pub async fn gains_command(cmd: Commands) {
    if let Commands::Gains { config, output } = cmd {
        let config = match EventConfig::from_yaml_file(&config) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Failed to parse event config: {e}");
                return;
            }
        };

        let snapshots = match list_snapshots(Path::new(&config.snapshot_dir)) {
            Ok(snapshots) => snapshots,
            Err(e) => {
                eprintln!("Failed to list snapshots: {e}");
                return;
            }
        };
        if snapshots.len() < 2 {
            eprintln!("Need at least two snapshots to compute gains");
            return;
        }

        let start_data = match read_snapshot(&snapshots[0].path) {
            Ok(data) => data,
            Err(e) => {
                eprintln!("Failed to read start snapshot: {e}");
                return;
            }
        };
        let end_data = match read_snapshot(&snapshots[snapshots.len() - 1].path) {
            Ok(data) => data,
            Err(e) => {
                eprintln!("Failed to read end snapshot: {e}");
                return;
            }
        };

        let rates = match RateTables::load(Path::new(&config.rates_dir)) {
            Ok(rates) => rates,
            Err(e) => {
                eprintln!("Failed to load rate tables: {e}");
                return;
            }
        };

        let mut players = Vec::new();
        for participant in &config.participants {
            for rsn in participant.rsns() {
                let gains = player_gains(
                    &rsn,
                    participant.alias.as_deref(),
                    &start_data,
                    &end_data,
                    rates.for_account(participant.account_type),
                );
                match gains {
                    Some(gains) => players.push(gains),
                    None => eprintln!("No end snapshot for {rsn}, skipping"),
                }
            }
        }

        let report = GainsReport { players };
        let json = match serde_json::to_string_pretty(&report) {
            Ok(json) => json,
            Err(e) => {
                eprintln!("Failed to serialize gains report: {e}");
                return;
            }
        };
        if let Err(e) = tokio::fs::write(&output, json).await {
            eprintln!("Failed to write output file: {e}");
        } else {
            println!("Gains report written to {output}");
        }
    }
}

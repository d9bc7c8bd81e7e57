use std::path::Path;
use std::time::Duration;

use chrono::Utc;

use crate::commands::base_commands::Commands;
use crate::services::event_config::EventConfig;
use crate::services::hiscore_api::{HiscoreApiClient, HiscoreApiError};
use crate::services::snapshot_store::{player_file, snapshot_dir_name, write_player};

pub async fn fetch_hiscores_command(cmd: Commands) {
    if let Commands::FetchHiscores { config } = cmd {
        let config = match EventConfig::from_yaml_file(&config) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Failed to parse event config: {e}");
                return;
            }
        };

        let client = match HiscoreApiClient::new(&config.hiscore_base_url) {
            Ok(client) => client,
            Err(e) => {
                eprintln!("Failed to create hiscore client: {e}");
                return;
            }
        };
        let client = client.with_retry_delay(Duration::from_secs(config.retry_delay_secs));

        let rsns: Vec<String> = config
            .participants
            .iter()
            .flat_map(|participant| participant.rsns())
            .collect();
        let snapshot_dir =
            Path::new(&config.snapshot_dir).join(snapshot_dir_name(Utc::now().naive_utc()));

        println!(
            "Fetching hiscores for {} accounts registered for {}",
            rsns.len(),
            config.name
        );
        for (index, rsn) in rsns.iter().enumerate() {
            println!("[{}/{}] Checking {rsn}", index + 1, rsns.len());
            if player_file(&snapshot_dir, rsn).exists() {
                println!("Snapshot already exists for {rsn}");
                continue;
            }
            match client.fetch_player(rsn).await {
                Ok(snapshot) => {
                    if let Err(e) = write_player(&snapshot_dir, rsn, &snapshot) {
                        eprintln!("Failed to write snapshot for {rsn}: {e}");
                    }
                }
                Err(HiscoreApiError::PlayerNotFound(rsn)) => {
                    eprintln!("{rsn} is not on the hiscores, skipping");
                }
                Err(e) => {
                    eprintln!("Failed to fetch hiscores for {rsn}: {e}");
                }
            }
        }
        println!("Snapshot written to {}", snapshot_dir.display());
    }
}

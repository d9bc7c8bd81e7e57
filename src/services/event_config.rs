use std::io;

use serde::Deserialize;
use thiserror::Error;

use crate::domain::hiscore::AccountType;

pub const DEFAULT_HISCORE_URL: &str =
    "https://secure.runescape.com/m=hiscore_oldschool/index_lite.json";
pub const DEFAULT_PRICES_URL: &str = "https://prices.runescape.wiki/api/v1/osrs/latest";

#[derive(Error, Debug)]
pub enum EventConfigError {
    #[error("failed to read event config: {0}")]
    Read(#[from] io::Error),
    #[error("failed to parse event config: {0}")]
    Parse(#[from] serde_yaml::Error),
}

#[derive(Debug, Clone, Deserialize)]
pub struct Participant {
    pub rsn: String,
    #[serde(default)]
    pub account_type: AccountType,
    /// Current name of a renamed account; looked up in the end snapshot
    /// when the original RSN is missing.
    #[serde(default)]
    pub alias: Option<String>,
}

impl Participant {
    /// Participants can register several accounts as a comma-separated
    /// list; every name is tracked separately.
    pub fn rsns(&self) -> impl Iterator<Item = String> + '_ {
        self.rsn
            .split(',')
            .map(|rsn| rsn.trim().to_lowercase())
            .filter(|rsn| !rsn.is_empty())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TrackedItem {
    pub id: u32,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EventConfig {
    pub name: String,
    pub participants: Vec<Participant>,
    pub tracked_items: Vec<TrackedItem>,
    pub hiscore_base_url: String,
    pub prices_url: String,
    pub snapshot_dir: String,
    pub rates_dir: String,
    pub retry_delay_secs: u64,
}

impl Default for EventConfig {
    fn default() -> Self {
        Self {
            name: String::new(),
            participants: Vec::new(),
            tracked_items: Vec::new(),
            hiscore_base_url: DEFAULT_HISCORE_URL.to_string(),
            prices_url: DEFAULT_PRICES_URL.to_string(),
            snapshot_dir: "hiscore_logs".to_string(),
            rates_dir: "rates".to_string(),
            retry_delay_secs: 20,
        }
    }
}

impl EventConfig {
    pub fn from_yaml_file(filepath: &str) -> Result<Self, EventConfigError> {
        let contents = std::fs::read_to_string(filepath)?;
        let config: EventConfig = serde_yaml::from_str(&contents)?;
        Ok(config)
    }
}

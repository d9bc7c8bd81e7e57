use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    #[default]
    Main,
    Iron,
}

impl AccountType {
    pub fn file_prefix(&self) -> &'static str {
        match self {
            AccountType::Main => "main",
            AccountType::Iron => "iron",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillStat {
    #[serde(default)]
    pub rank: i64,
    #[serde(default)]
    pub level: i64,
    #[serde(default)]
    pub xp: i64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinigameStat {
    #[serde(default)]
    pub rank: i64,
    #[serde(default)]
    pub score: i64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BossStat {
    #[serde(default)]
    pub rank: i64,
    #[serde(default)]
    pub kills: i64,
}

/// One player's stats at a point in time, as written into a snapshot
/// directory. The same shape doubles as a delta between two snapshots.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    #[serde(default)]
    pub skills: BTreeMap<String, SkillStat>,
    #[serde(default)]
    pub minigames: BTreeMap<String, MinigameStat>,
    #[serde(default)]
    pub bosses: BTreeMap<String, BossStat>,
}

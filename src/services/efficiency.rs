use std::collections::BTreeMap;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::hiscore::{AccountType, BossStat, SkillStat};

#[derive(Error, Debug)]
pub enum EfficiencyError {
    #[error("failed to read rate table: {0}")]
    Read(#[from] io::Error),
    #[error("failed to parse rate table: {0}")]
    Parse(#[from] serde_json::Error),
}

/// One skill's training methods, slowest to fastest. Only the last
/// (current meta) method's rate is used.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillRates {
    pub skill: String,
    #[serde(default)]
    pub methods: Vec<SkillMethod>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillMethod {
    #[serde(default)]
    pub start_exp: i64,
    #[serde(default)]
    pub rate: f64,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BossRate {
    pub boss: String,
    #[serde(default)]
    pub rate: f64,
}

/// Efficient-hours score with a per-entry breakdown, everything rounded
/// to two decimals for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Efficiency {
    pub total: f64,
    pub breakdown: BTreeMap<String, f64>,
}

#[derive(Debug, Clone)]
pub struct RateSet {
    pub ehp: Vec<SkillRates>,
    pub ehb: Vec<BossRate>,
}

/// Rate tables for every account type, loaded once per run from
/// `<dir>/<type>_ehp.json` and `<dir>/<type>_ehb.json`.
#[derive(Debug, Clone)]
pub struct RateTables {
    main: RateSet,
    iron: RateSet,
}

impl RateTables {
    pub fn load(dir: &Path) -> Result<Self, EfficiencyError> {
        Ok(Self {
            main: load_rate_set(dir, AccountType::Main)?,
            iron: load_rate_set(dir, AccountType::Iron)?,
        })
    }

    pub fn for_account(&self, account_type: AccountType) -> &RateSet {
        match account_type {
            AccountType::Main => &self.main,
            AccountType::Iron => &self.iron,
        }
    }
}

fn load_rate_set(dir: &Path, account_type: AccountType) -> Result<RateSet, EfficiencyError> {
    let prefix = account_type.file_prefix();
    let ehp_contents = std::fs::read_to_string(dir.join(format!("{prefix}_ehp.json")))?;
    let ehb_contents = std::fs::read_to_string(dir.join(format!("{prefix}_ehb.json")))?;
    Ok(RateSet {
        ehp: serde_json::from_str(&ehp_contents)?,
        ehb: serde_json::from_str(&ehb_contents)?,
    })
}

/// Efficient hours played over gained xp: for every skill in the rate
/// table, gained xp divided by the last method's rate. Skills with no
/// usable rate are skipped; skills the player never trained still show
/// up with 0.00.
pub fn calculate_ehp(rates: &[SkillRates], skills: &BTreeMap<String, SkillStat>) -> Efficiency {
    let mut breakdown = BTreeMap::new();
    let mut total = 0.0;

    for entry in rates {
        let rate = entry.methods.last().map(|method| method.rate).unwrap_or(0.0);
        if rate <= 0.0 {
            continue;
        }
        let xp = skills.get(&entry.skill).map(|stat| stat.xp).unwrap_or(0);
        let ehp = xp as f64 / rate;
        breakdown.insert(entry.skill.clone(), round2(ehp));
        total += ehp;
    }

    Efficiency {
        total: round2(total),
        breakdown,
    }
}

/// Efficient hours bossed over gained kills. Boss keys in stat dumps are
/// matched against the rate table's snake_case names.
pub fn calculate_ehb(rates: &[BossRate], bosses: &BTreeMap<String, BossStat>) -> Efficiency {
    let mut breakdown = BTreeMap::new();
    let mut total = 0.0;

    for entry in rates {
        if entry.rate <= 0.0 {
            continue;
        }
        for (key, stat) in bosses {
            if snakeify(key) == entry.boss {
                let ehb = stat.kills as f64 / entry.rate;
                breakdown.insert(key.clone(), round2(ehb));
                total += ehb;
            }
        }
    }

    Efficiency {
        total: round2(total),
        breakdown,
    }
}

/// Normalizes a stat key to the rate tables' snake_case naming:
/// "Alchemical Hydra" and "alchemicalHydra" both become
/// "alchemical_hydra".
pub fn snakeify(name: &str) -> String {
    let mut result = String::with_capacity(name.len());
    let mut previous_lower = false;
    let mut previous_separator = true;

    for character in name.chars() {
        if character.is_alphanumeric() {
            if character.is_uppercase() && previous_lower && !previous_separator {
                result.push('_');
            }
            for lowered in character.to_lowercase() {
                result.push(lowered);
            }
            previous_lower = character.is_lowercase() || character.is_numeric();
            previous_separator = false;
        } else {
            if !previous_separator {
                result.push('_');
            }
            previous_lower = false;
            previous_separator = true;
        }
    }

    result.trim_end_matches('_').to_string()
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::hiscore::{BossStat, MinigameStat, PlayerSnapshot, SkillStat};
use crate::services::efficiency::{calculate_ehb, calculate_ehp, Efficiency, RateSet};

/// One player's movement between the earliest and latest snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerGains {
    pub rsn: String,
    pub diff: PlayerSnapshot,
    pub ehb: Efficiency,
    pub ehp: Efficiency,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GainsReport {
    pub players: Vec<PlayerGains>,
}

/// Subtracts the start snapshot from the end snapshot. Keys present in
/// the end snapshot drive the result; a stat missing at the start counts
/// as 0, so new unlocks show their full value.
pub fn diff_snapshots(start: &PlayerSnapshot, end: &PlayerSnapshot) -> PlayerSnapshot {
    PlayerSnapshot {
        skills: diff_skills(&start.skills, &end.skills),
        minigames: diff_minigames(&start.minigames, &end.minigames),
        bosses: diff_bosses(&start.bosses, &end.bosses),
    }
}

fn diff_skills(
    start: &BTreeMap<String, SkillStat>,
    end: &BTreeMap<String, SkillStat>,
) -> BTreeMap<String, SkillStat> {
    end.iter()
        .map(|(key, stat)| {
            let before = start.get(key).copied().unwrap_or_default();
            (
                key.clone(),
                SkillStat {
                    rank: stat.rank - before.rank,
                    level: stat.level - before.level,
                    xp: stat.xp - before.xp,
                },
            )
        })
        .collect()
}

fn diff_minigames(
    start: &BTreeMap<String, MinigameStat>,
    end: &BTreeMap<String, MinigameStat>,
) -> BTreeMap<String, MinigameStat> {
    end.iter()
        .map(|(key, stat)| {
            let before = start.get(key).copied().unwrap_or_default();
            (
                key.clone(),
                MinigameStat {
                    rank: stat.rank - before.rank,
                    score: stat.score - before.score,
                },
            )
        })
        .collect()
}

fn diff_bosses(
    start: &BTreeMap<String, BossStat>,
    end: &BTreeMap<String, BossStat>,
) -> BTreeMap<String, BossStat> {
    end.iter()
        .map(|(key, stat)| {
            let before = start.get(key).copied().unwrap_or_default();
            (
                key.clone(),
                BossStat {
                    rank: stat.rank - before.rank,
                    kills: stat.kills - before.kills,
                },
            )
        })
        .collect()
}

/// Builds one player's gains. A player missing from the start snapshot
/// diffs against zero; a player missing from the end snapshot (under
/// their RSN or a configured alias) has nothing to report.
pub fn player_gains(
    rsn: &str,
    alias: Option<&str>,
    start_data: &BTreeMap<String, PlayerSnapshot>,
    end_data: &BTreeMap<String, PlayerSnapshot>,
    rates: &RateSet,
) -> Option<PlayerGains> {
    let empty = PlayerSnapshot::default();
    let start = start_data.get(rsn).unwrap_or(&empty);
    let end = end_data
        .get(rsn)
        .or_else(|| alias.and_then(|alias| end_data.get(alias)))?;

    let diff = diff_snapshots(start, end);
    let ehb = calculate_ehb(&rates.ehb, &diff.bosses);
    let ehp = calculate_ehp(&rates.ehp, &diff.skills);

    Some(PlayerGains {
        rsn: rsn.to_string(),
        diff,
        ehb,
        ehp,
    })
}

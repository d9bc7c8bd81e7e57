use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use thiserror::Error;

use crate::domain::hiscore::PlayerSnapshot;

/// Snapshot directories are named after their capture time, minute
/// precision: `2025-05-16_12-00`.
pub const SNAPSHOT_DIR_FORMAT: &str = "%Y-%m-%d_%H-%M";

#[derive(Error, Debug)]
pub enum SnapshotStoreError {
    #[error("failed to access snapshot store: {0}")]
    Io(#[from] io::Error),
    #[error("failed to serialize snapshot: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("no snapshots found in {0}")]
    NoSnapshots(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotRef {
    pub timestamp: NaiveDateTime,
    pub path: PathBuf,
}

pub fn snapshot_dir_name(timestamp: NaiveDateTime) -> String {
    timestamp.format(SNAPSHOT_DIR_FORMAT).to_string()
}

pub fn player_file(snapshot_dir: &Path, rsn: &str) -> PathBuf {
    snapshot_dir.join(format!("{rsn}.json"))
}

/// Lists snapshot directories sorted by capture time, oldest first.
/// Entries whose name does not parse as a snapshot timestamp are
/// ignored.
pub fn list_snapshots(store_dir: &Path) -> Result<Vec<SnapshotRef>, SnapshotStoreError> {
    let mut snapshots = Vec::new();
    for entry in std::fs::read_dir(store_dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_dir() {
            continue;
        }
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            continue;
        };
        if let Ok(timestamp) = NaiveDateTime::parse_from_str(name, SNAPSHOT_DIR_FORMAT) {
            snapshots.push(SnapshotRef {
                timestamp,
                path: entry.path(),
            });
        }
    }
    snapshots.sort_by_key(|snapshot| snapshot.timestamp);
    if snapshots.is_empty() {
        return Err(SnapshotStoreError::NoSnapshots(
            store_dir.display().to_string(),
        ));
    }
    Ok(snapshots)
}

/// Reads every player file in one snapshot directory, keyed by RSN.
/// A file that no longer parses is skipped with a warning so one
/// corrupt dump cannot take the whole report down.
pub fn read_snapshot(
    snapshot_dir: &Path,
) -> Result<BTreeMap<String, PlayerSnapshot>, SnapshotStoreError> {
    let mut players = BTreeMap::new();
    for entry in std::fs::read_dir(snapshot_dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.extension().and_then(|extension| extension.to_str()) != Some("json") {
            continue;
        }
        let Some(rsn) = path.file_stem().and_then(|stem| stem.to_str()) else {
            continue;
        };
        let contents = std::fs::read_to_string(&path)?;
        match serde_json::from_str::<PlayerSnapshot>(&contents) {
            Ok(snapshot) => {
                players.insert(rsn.to_string(), snapshot);
            }
            Err(error) => {
                eprintln!("Skipping unreadable snapshot file {}: {error}", path.display());
            }
        }
    }
    Ok(players)
}

pub fn write_player(
    snapshot_dir: &Path,
    rsn: &str,
    snapshot: &PlayerSnapshot,
) -> Result<(), SnapshotStoreError> {
    std::fs::create_dir_all(snapshot_dir)?;
    let contents = serde_json::to_string_pretty(snapshot)?;
    std::fs::write(player_file(snapshot_dir, rsn), contents)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::hiscore::SkillStat;
    use assert_fs::prelude::*;

    fn sample_snapshot(xp: i64) -> PlayerSnapshot {
        let mut snapshot = PlayerSnapshot::default();
        snapshot.skills.insert(
            "attack".to_string(),
            SkillStat {
                rank: 100,
                level: 90,
                xp,
            },
        );
        snapshot
    }

    #[test]
    fn snapshots_list_in_chronological_order() {
        let store = assert_fs::TempDir::new().unwrap();
        store.child("2025-05-20_12-00").create_dir_all().unwrap();
        store.child("2025-05-16_16-00").create_dir_all().unwrap();
        store.child("2025-05-18_00-30").create_dir_all().unwrap();
        store.child("notes").create_dir_all().unwrap();
        store.child("2025-05-19.json").touch().unwrap();

        let snapshots = list_snapshots(store.path()).unwrap();
        let names: Vec<String> = snapshots
            .iter()
            .map(|snapshot| snapshot_dir_name(snapshot.timestamp))
            .collect();
        assert_eq!(
            names,
            ["2025-05-16_16-00", "2025-05-18_00-30", "2025-05-20_12-00"]
        );
    }

    #[test]
    fn empty_store_is_an_error() {
        let store = assert_fs::TempDir::new().unwrap();
        store.child("junk").create_dir_all().unwrap();

        let error = list_snapshots(store.path()).unwrap_err();
        assert!(matches!(error, SnapshotStoreError::NoSnapshots(_)));
    }

    #[test]
    fn written_players_round_trip_through_read() {
        let store = assert_fs::TempDir::new().unwrap();
        let snapshot_dir = store.path().join("2025-05-16_16-00");

        write_player(&snapshot_dir, "ruto", &sample_snapshot(1000)).unwrap();
        write_player(&snapshot_dir, "pepper fe", &sample_snapshot(2000)).unwrap();

        let players = read_snapshot(&snapshot_dir).unwrap();
        assert_eq!(players.len(), 2);
        assert_eq!(players["ruto"].skills["attack"].xp, 1000);
        assert_eq!(players["pepper fe"].skills["attack"].xp, 2000);
    }

    #[test]
    fn corrupt_player_files_are_skipped() {
        let store = assert_fs::TempDir::new().unwrap();
        let snapshot_dir = store.path().join("2025-05-16_16-00");
        write_player(&snapshot_dir, "ruto", &sample_snapshot(1000)).unwrap();
        store
            .child("2025-05-16_16-00/broken.json")
            .write_str("{not json")
            .unwrap();

        let players = read_snapshot(&snapshot_dir).unwrap();
        assert_eq!(players.len(), 1);
        assert!(players.contains_key("ruto"));
    }
}

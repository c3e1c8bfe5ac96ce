// JSON snapshots of fetched league data, so reports can be rebuilt offline.

use std::path::{Path, PathBuf};

use benchwarmer_core::{CoreError, TeamRecord};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("failed to access snapshot {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid snapshot JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("snapshot {path} contains an invalid team: {source}")]
    InvalidTeam { path: PathBuf, source: CoreError },
}

/// Every team record for one league, as of `fetched_at`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub fetched_at: DateTime<Utc>,
    pub league_id: String,
    pub season: String,
    pub teams: Vec<TeamRecord>,
}

impl Snapshot {
    pub fn new(league_id: impl Into<String>, season: impl Into<String>, teams: Vec<TeamRecord>) -> Self {
        Snapshot {
            fetched_at: Utc::now(),
            league_id: league_id.into(),
            season: season.into(),
            teams,
        }
    }
}

/// Write `snapshot` as pretty-printed JSON, creating parent directories.
pub fn save_snapshot(path: &Path, snapshot: &Snapshot) -> Result<(), SnapshotError> {
    let io_err = |source| SnapshotError::Io {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(io_err)?;
    }
    let json = serde_json::to_string_pretty(snapshot).map_err(|source| SnapshotError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    std::fs::write(path, json).map_err(io_err)
}

/// Read a snapshot and validate every team in it.
pub fn load_snapshot(path: &Path) -> Result<Snapshot, SnapshotError> {
    let text = std::fs::read_to_string(path).map_err(|source| SnapshotError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let snapshot: Snapshot = serde_json::from_str(&text).map_err(|source| SnapshotError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    for team in &snapshot.teams {
        team.validate().map_err(|source| SnapshotError::InvalidTeam {
            path: path.to_path_buf(),
            source,
        })?;
    }
    Ok(snapshot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use benchwarmer_core::Player;

    fn scratch_file(tag: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("benchwarmer-snapshot-{tag}-{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        dir.join("nested").join("rosters.json")
    }

    fn sample() -> Snapshot {
        Snapshot::new(
            "L1",
            "2025",
            vec![TeamRecord {
                id: 1,
                name: "Gridiron Gang".into(),
                points_for: 1502.25,
                points_against: 1440.8,
                max_points: 1799.62,
                players: vec![Player::new("4046", "Patrick Mahomes", &["QB"], 16, 320.0)],
            }],
        )
    }

    #[test]
    fn save_then_load_preserves_teams() {
        let path = scratch_file("save");
        let snapshot = sample();
        save_snapshot(&path, &snapshot).unwrap();
        let loaded = load_snapshot(&path).unwrap();
        assert_eq!(loaded, snapshot);
    }

    #[test]
    fn missing_file_is_io_error() {
        let path = scratch_file("missing");
        assert!(matches!(load_snapshot(&path), Err(SnapshotError::Io { .. })));
    }

    #[test]
    fn team_missing_points_for_is_rejected() {
        let path = scratch_file("malformed");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(
            &path,
            r#"{"fetched_at":"2025-12-30T12:00:00Z","league_id":"L1","season":"2025",
                "teams":[{"id":1,"name":"Broken","points_against":1.0,"max_points":2.0,"players":[]}]}"#,
        )
        .unwrap();
        match load_snapshot(&path) {
            Err(SnapshotError::Json { source, .. }) => {
                assert!(source.to_string().contains("points_for"), "{source}")
            }
            other => panic!("expected Json error, got {other:?}"),
        }
    }
}

// Where team records come from: the live Sleeper API or a saved snapshot.

use std::path::PathBuf;

use anyhow::Context;
use async_trait::async_trait;
use benchwarmer_core::TeamRecord;
use benchwarmer_sleeper::SleeperClient;
use tracing::info;

use crate::snapshot::load_snapshot;

/// A provider of the league's team records.
#[async_trait]
pub trait TeamSource: Send + Sync {
    async fn load_teams(&self) -> anyhow::Result<Vec<TeamRecord>>;
}

/// Live rosters and stats from Sleeper.
pub struct SleeperSource {
    client: SleeperClient,
}

impl SleeperSource {
    pub fn new(client: SleeperClient) -> Self {
        SleeperSource { client }
    }
}

#[async_trait]
impl TeamSource for SleeperSource {
    async fn load_teams(&self) -> anyhow::Result<Vec<TeamRecord>> {
        let league = &self.client.settings().league_id;
        info!(%league, "fetching league from Sleeper");
        self.client
            .fetch_teams()
            .await
            .with_context(|| format!("failed to fetch league {league} from Sleeper"))
    }
}

/// Team records from a previously saved snapshot file.
pub struct SnapshotSource {
    path: PathBuf,
}

impl SnapshotSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        SnapshotSource { path: path.into() }
    }
}

#[async_trait]
impl TeamSource for SnapshotSource {
    async fn load_teams(&self) -> anyhow::Result<Vec<TeamRecord>> {
        let snapshot = load_snapshot(&self.path)?;
        info!(
            path = %self.path.display(),
            teams = snapshot.teams.len(),
            fetched_at = %snapshot.fetched_at,
            "loaded snapshot"
        );
        Ok(snapshot.teams)
    }
}

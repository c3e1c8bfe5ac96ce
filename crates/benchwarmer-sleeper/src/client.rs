// HTTP client for the Sleeper league and stats endpoints.

use std::collections::HashMap;
use std::time::Duration;

use benchwarmer_core::{Player, TeamRecord};
use futures_util::stream::{self, StreamExt};
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

use crate::convert::{player_from_stats, team_from_roster, ScoringFormat};
use crate::error::SleeperError;
use crate::types::{SleeperPlayerStats, SleeperRoster};

// ---------------------------------------------------------------------------
// Settings
// ---------------------------------------------------------------------------

pub const DEFAULT_API_BASE: &str = "https://api.sleeper.app/v1";
pub const DEFAULT_STATS_BASE: &str = "https://api.sleeper.com";

/// Everything the client needs to pull one league's season.
#[derive(Debug, Clone)]
pub struct SleeperSettings {
    pub api_base: String,
    pub stats_base: String,
    pub league_id: String,
    pub season: String,
    pub season_type: String,
    pub scoring: ScoringFormat,
    /// Maximum number of player stat requests in flight at once.
    pub concurrency: usize,
    pub timeout: Duration,
    /// Display names keyed by roster ID.
    pub team_names: HashMap<u32, String>,
}

impl SleeperSettings {
    pub fn new(league_id: impl Into<String>, season: impl Into<String>) -> Self {
        SleeperSettings {
            api_base: DEFAULT_API_BASE.to_string(),
            stats_base: DEFAULT_STATS_BASE.to_string(),
            league_id: league_id.into(),
            season: season.into(),
            season_type: "regular".to_string(),
            scoring: ScoringFormat::default(),
            concurrency: 8,
            timeout: Duration::from_secs(30),
            team_names: HashMap::new(),
        }
    }

    /// Configured name for a roster, or `Roster {id}`.
    pub fn team_name(&self, roster_id: u32) -> String {
        self.team_names
            .get(&roster_id)
            .cloned()
            .unwrap_or_else(|| format!("Roster {roster_id}"))
    }

    pub fn rosters_url(&self) -> String {
        format!(
            "{}/league/{}/rosters",
            self.api_base.trim_end_matches('/'),
            self.league_id
        )
    }

    pub fn player_stats_url(&self, player_id: &str) -> String {
        format!(
            "{}/stats/nfl/player/{}?season_type={}&season={}",
            self.stats_base.trim_end_matches('/'),
            player_id,
            self.season_type,
            self.season
        )
    }
}

// ---------------------------------------------------------------------------
// SleeperClient
// ---------------------------------------------------------------------------

pub struct SleeperClient {
    http: reqwest::Client,
    settings: SleeperSettings,
}

impl SleeperClient {
    pub fn new(settings: SleeperSettings) -> Result<Self, SleeperError> {
        let http = reqwest::Client::builder()
            .timeout(settings.timeout)
            .build()
            .map_err(SleeperError::Client)?;
        Ok(SleeperClient { http, settings })
    }

    pub fn settings(&self) -> &SleeperSettings {
        &self.settings
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, SleeperError> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|source| SleeperError::Http {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(SleeperError::Status {
                url: url.to_string(),
                status,
            });
        }

        let body = response.bytes().await.map_err(|source| SleeperError::Http {
            url: url.to_string(),
            source,
        })?;
        serde_json::from_slice(&body).map_err(|source| SleeperError::Decode {
            url: url.to_string(),
            source,
        })
    }

    /// All rosters in the configured league.
    pub async fn fetch_rosters(&self) -> Result<Vec<SleeperRoster>, SleeperError> {
        let url = self.settings.rosters_url();
        let rosters: Vec<SleeperRoster> = self.get_json(&url).await?;
        info!(league = %self.settings.league_id, count = rosters.len(), "fetched rosters");
        Ok(rosters)
    }

    /// Season stats for one player. Sleeper answers `null` for players it has
    /// no stats record for, which maps to `Ok(None)`.
    pub async fn fetch_player(&self, player_id: &str) -> Result<Option<Player>, SleeperError> {
        let url = self.settings.player_stats_url(player_id);
        let raw: Option<SleeperPlayerStats> = self.get_json(&url).await?;
        Ok(raw.map(|r| player_from_stats(&r, self.settings.scoring)))
    }

    /// Resolve every player on a roster into a team record. Player lookups
    /// run concurrently, but the resulting list keeps roster order.
    pub async fn fetch_team(&self, roster: &SleeperRoster) -> Result<TeamRecord, SleeperError> {
        let ids: Vec<String> = roster.players.clone().unwrap_or_default();
        let concurrency = self.settings.concurrency.max(1);

        let results: Vec<(String, Result<Option<Player>, SleeperError>)> = stream::iter(ids)
            .map(|id| async move {
                let result = self.fetch_player(&id).await;
                (id, result)
            })
            .buffered(concurrency)
            .collect()
            .await;

        let mut players = Vec::with_capacity(results.len());
        for (id, result) in results {
            match result? {
                Some(player) => players.push(player),
                None => warn!(player_id = %id, roster = roster.roster_id, "player data not found; skipping"),
            }
        }

        let name = self.settings.team_name(roster.roster_id);
        debug!(roster = roster.roster_id, team = %name, players = players.len(), "resolved roster");
        team_from_roster(roster, name, players)
    }

    /// Fetch every roster and resolve it into a team record, in the order
    /// Sleeper lists the rosters.
    pub async fn fetch_teams(&self) -> Result<Vec<TeamRecord>, SleeperError> {
        let rosters = self.fetch_rosters().await?;
        let mut teams = Vec::with_capacity(rosters.len());
        for roster in &rosters {
            teams.push(self.fetch_team(roster).await?);
        }
        info!(teams = teams.len(), "fetched all teams");
        Ok(teams)
    }
}

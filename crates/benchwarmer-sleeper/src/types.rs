// Raw Sleeper API payloads.
//
// Only the fields the report uses are modeled; everything else in the
// responses is ignored by serde.

use serde::Deserialize;

/// One entry of `GET /league/{league_id}/rosters`.
#[derive(Debug, Clone, Deserialize)]
pub struct SleeperRoster {
    pub roster_id: u32,
    #[serde(default)]
    pub owner_id: Option<String>,
    /// Every player ID on the roster (starters and reserves). Sleeper sends
    /// `null` for an empty roster.
    #[serde(default)]
    pub players: Option<Vec<String>>,
    pub settings: RosterSettings,
}

/// Season totals. Sleeper splits each scalar into a whole part and a
/// separate decimal part (`fpts` + `fpts_decimal`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RosterSettings {
    #[serde(default)]
    pub wins: u32,
    #[serde(default)]
    pub losses: u32,
    #[serde(default)]
    pub ties: u32,
    pub fpts: Option<i64>,
    pub fpts_decimal: Option<i64>,
    pub fpts_against: Option<i64>,
    pub fpts_against_decimal: Option<i64>,
    /// Potential (max) points.
    pub ppts: Option<i64>,
    pub ppts_decimal: Option<i64>,
}

/// Response of `GET /stats/nfl/player/{player_id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct SleeperPlayerStats {
    pub player_id: String,
    pub player: SleeperPlayerInfo,
    #[serde(default)]
    pub stats: SeasonStats,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SleeperPlayerInfo {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub fantasy_positions: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SeasonStats {
    pub gp: Option<f64>,
    pub pts_half_ppr: Option<f64>,
    pub pts_ppr: Option<f64>,
    pub pts_std: Option<f64>,
}

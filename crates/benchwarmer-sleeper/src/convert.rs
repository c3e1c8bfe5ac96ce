// Conversion from raw Sleeper payloads to the engine's team records.

use benchwarmer_core::{Player, TeamId, TeamRecord};
use serde::Deserialize;

use crate::error::SleeperError;
use crate::types::{SeasonStats, SleeperPlayerStats, SleeperRoster};

/// Which season point total counts as a player's score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringFormat {
    #[default]
    HalfPpr,
    Ppr,
    Std,
}

impl ScoringFormat {
    pub fn points(&self, stats: &SeasonStats) -> Option<f64> {
        match self {
            ScoringFormat::HalfPpr => stats.pts_half_ppr,
            ScoringFormat::Ppr => stats.pts_ppr,
            ScoringFormat::Std => stats.pts_std,
        }
    }
}

/// Join Sleeper's split whole/decimal fields the way the site displays
/// them: `1502` and `25` read as `1502.25`.
pub fn combine_decimal(
    roster_id: u32,
    field: &'static str,
    whole: Option<i64>,
    decimal: Option<i64>,
) -> Result<f64, SleeperError> {
    let whole = whole.ok_or(SleeperError::MissingField { roster_id, field })?;
    let text = format!("{whole}.{}", decimal.unwrap_or(0));
    text.parse::<f64>()
        .map_err(|_| SleeperError::MalformedNumber {
            roster_id,
            field,
            value: text,
        })
}

/// Build a player from a stats lookup. Missing games or points count as 0.
pub fn player_from_stats(raw: &SleeperPlayerStats, scoring: ScoringFormat) -> Player {
    let games = raw.stats.gp.unwrap_or(0.0).max(0.0).round() as u32;
    Player {
        id: raw.player_id.clone(),
        name: format!("{} {}", raw.player.first_name, raw.player.last_name)
            .trim()
            .to_string(),
        positions: raw.player.fantasy_positions.clone().unwrap_or_default(),
        games_played: games,
        total_points: scoring.points(&raw.stats).unwrap_or(0.0),
    }
}

/// Build a team record from a roster and its already-resolved players.
///
/// Fails when the roster lacks any of its season totals.
pub fn team_from_roster(
    roster: &SleeperRoster,
    name: String,
    players: Vec<Player>,
) -> Result<TeamRecord, SleeperError> {
    let id: TeamId = roster.roster_id;
    let s = &roster.settings;
    Ok(TeamRecord {
        id,
        name,
        points_for: combine_decimal(id, "fpts", s.fpts, s.fpts_decimal)?,
        points_against: combine_decimal(id, "fpts_against", s.fpts_against, s.fpts_against_decimal)?,
        max_points: combine_decimal(id, "ppts", s.ppts, s.ppts_decimal)?,
        players,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{RosterSettings, SleeperPlayerInfo};

    fn stats(gp: Option<f64>, half: Option<f64>, full: Option<f64>) -> SleeperPlayerStats {
        SleeperPlayerStats {
            player_id: "4046".into(),
            player: SleeperPlayerInfo {
                first_name: "Patrick".into(),
                last_name: "Mahomes".into(),
                fantasy_positions: Some(vec!["QB".into()]),
            },
            stats: SeasonStats {
                gp,
                pts_half_ppr: half,
                pts_ppr: full,
                pts_std: None,
            },
        }
    }

    fn roster(settings: RosterSettings) -> SleeperRoster {
        SleeperRoster {
            roster_id: 7,
            owner_id: None,
            players: None,
            settings,
        }
    }

    #[test]
    fn decimals_are_joined_textually() {
        assert_eq!(combine_decimal(1, "fpts", Some(1502), Some(25)).unwrap(), 1502.25);
        assert_eq!(combine_decimal(1, "fpts", Some(140), Some(5)).unwrap(), 140.5);
        assert_eq!(combine_decimal(1, "fpts", Some(99), None).unwrap(), 99.0);
    }

    #[test]
    fn missing_whole_part_is_an_error() {
        let err = combine_decimal(3, "ppts", None, Some(10)).unwrap_err();
        assert!(matches!(err, SleeperError::MissingField { roster_id: 3, field: "ppts" }));
    }

    #[test]
    fn negative_decimal_is_malformed() {
        let err = combine_decimal(3, "fpts", Some(10), Some(-4)).unwrap_err();
        assert!(matches!(err, SleeperError::MalformedNumber { .. }));
    }

    #[test]
    fn player_uses_configured_scoring() {
        let raw = stats(Some(16.0), Some(320.0), Some(340.0));
        let half = player_from_stats(&raw, ScoringFormat::HalfPpr);
        assert_eq!(half.name, "Patrick Mahomes");
        assert_eq!(half.positions, vec!["QB".to_string()]);
        assert!((half.avg_points_per_game() - 20.0).abs() < 1e-9);

        let ppr = player_from_stats(&raw, ScoringFormat::Ppr);
        assert!((ppr.avg_points_per_game() - 21.25).abs() < 1e-9);
    }

    #[test]
    fn player_with_missing_stats_scores_zero() {
        let raw = stats(None, None, None);
        let p = player_from_stats(&raw, ScoringFormat::HalfPpr);
        assert_eq!(p.games_played, 0);
        assert_eq!(p.avg_points_per_game(), 0.0);

        let std_only = player_from_stats(&stats(Some(4.0), Some(40.0), None), ScoringFormat::Std);
        assert_eq!(std_only.total_points, 0.0);
    }

    #[test]
    fn team_from_complete_roster() {
        let r = roster(RosterSettings {
            fpts: Some(1502),
            fpts_decimal: Some(25),
            fpts_against: Some(1440),
            fpts_against_decimal: Some(8),
            ppts: Some(1799),
            ppts_decimal: Some(62),
            ..Default::default()
        });
        let team = team_from_roster(&r, "Dynasty Dawgs".into(), vec![]).unwrap();
        assert_eq!(team.id, 7);
        assert_eq!(team.points_for, 1502.25);
        assert_eq!(team.points_against, 1440.8);
        assert_eq!(team.max_points, 1799.62);
    }

    #[test]
    fn team_without_points_for_fails() {
        let r = roster(RosterSettings {
            fpts_against: Some(1),
            ppts: Some(2),
            ..Default::default()
        });
        let err = team_from_roster(&r, "Preseason".into(), vec![]).unwrap_err();
        assert!(matches!(err, SleeperError::MissingField { field: "fpts", .. }));
    }
}

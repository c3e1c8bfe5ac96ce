// Player records: identity, eligible positions, and season scoring.

use serde::{Deserialize, Serialize};

/// A rostered player and their season scoring line.
///
/// Eligible positions are kept in source order; the first entry is the
/// player's primary position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Data-source player ID. Unique within a team's roster.
    pub id: String,
    pub name: String,
    /// Fantasy-eligible positions, e.g. `["WR", "TE"]`.
    pub positions: Vec<String>,
    #[serde(default)]
    pub games_played: u32,
    /// Season fantasy points under the league's scoring format.
    #[serde(default)]
    pub total_points: f64,
}

impl Player {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        positions: &[&str],
        games_played: u32,
        total_points: f64,
    ) -> Self {
        Player {
            id: id.into(),
            name: name.into(),
            positions: positions.iter().map(|p| p.to_string()).collect(),
            games_played,
            total_points,
        }
    }

    /// Average fantasy points per game played.
    ///
    /// A player with no games, or without a usable point total, scores 0.
    pub fn avg_points_per_game(&self) -> f64 {
        if self.games_played == 0 || !self.total_points.is_finite() {
            return 0.0;
        }
        self.total_points / f64::from(self.games_played)
    }

    /// Whether `position` appears in this player's eligibility list.
    pub fn is_eligible_at(&self, position: &str) -> bool {
        self.positions.iter().any(|p| p == position)
    }

    /// The first listed eligible position, if any.
    pub fn primary_position(&self) -> Option<&str> {
        self.positions.first().map(String::as_str)
    }
}

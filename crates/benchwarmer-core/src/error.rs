// Error types for the lineup engine.

use thiserror::Error;

use crate::team::TeamId;

/// Structural problems with the league input. Per-player and per-slot
/// degeneracies (missing scores, unfillable slots) are never errors.
#[derive(Debug, Error, PartialEq)]
pub enum CoreError {
    #[error("team {team} has an invalid `{field}`: {value}")]
    InvalidMetric {
        team: TeamId,
        field: &'static str,
        value: f64,
    },

    #[error("team id {0} appears more than once in the league")]
    DuplicateTeam(TeamId),
}

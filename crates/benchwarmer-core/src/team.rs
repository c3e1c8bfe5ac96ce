// Team records: season results plus the full player list.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::player::Player;

/// League-assigned roster identifier.
pub type TeamId = u32;

/// A team's season totals and roster, as supplied by the data source.
///
/// `points_for`, `points_against` and `max_points` are required: a record
/// missing any of them fails to deserialize rather than defaulting, since a
/// substituted total would corrupt every ranking built on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamRecord {
    pub id: TeamId,
    pub name: String,
    pub points_for: f64,
    pub points_against: f64,
    /// Best possible season total, as reported by the league host.
    pub max_points: f64,
    #[serde(default)]
    pub players: Vec<Player>,
}

impl TeamRecord {
    /// Reject records whose season metrics are not finite numbers.
    pub fn validate(&self) -> Result<(), CoreError> {
        let metrics = [
            ("points_for", self.points_for),
            ("points_against", self.points_against),
            ("max_points", self.max_points),
        ];
        for (field, value) in metrics {
            if !value.is_finite() {
                return Err(CoreError::InvalidMetric {
                    team: self.id,
                    field,
                    value,
                });
            }
        }
        Ok(())
    }

    /// Points-for as a percentage of max points. A zero max is treated as 1.
    pub fn percent_of_max(&self) -> f64 {
        let denominator = if self.max_points == 0.0 {
            1.0
        } else {
            self.max_points
        };
        self.points_for / denominator * 100.0
    }
}

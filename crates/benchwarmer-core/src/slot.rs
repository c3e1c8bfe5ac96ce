// Starting-lineup slots and the position buckets they aggregate into.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::player::Player;

/// Maximum number of players kept on an ideal lineup's bench.
pub const BENCH_SIZE: usize = 5;

// ---------------------------------------------------------------------------
// Slot
// ---------------------------------------------------------------------------

/// One of the ten fixed starting-lineup slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Slot {
    Qb,
    Rb1,
    Rb2,
    Wr1,
    Wr2,
    Wr3,
    Te,
    Flex1,
    Flex2,
    SuperFlex,
}

impl Slot {
    /// Slots in lineup listing order.
    pub const DISPLAY_ORDER: [Slot; 10] = [
        Slot::Qb,
        Slot::Rb1,
        Slot::Rb2,
        Slot::Wr1,
        Slot::Wr2,
        Slot::Wr3,
        Slot::Te,
        Slot::Flex1,
        Slot::Flex2,
        Slot::SuperFlex,
    ];

    /// Slots in the order the allocator fills them. SUPER_FLEX is resolved
    /// before FLEX1/FLEX2 so it gets first claim on the best remaining player
    /// of any position.
    pub const FILL_ORDER: [Slot; 10] = [
        Slot::Qb,
        Slot::Rb1,
        Slot::Rb2,
        Slot::Wr1,
        Slot::Wr2,
        Slot::Wr3,
        Slot::Te,
        Slot::SuperFlex,
        Slot::Flex1,
        Slot::Flex2,
    ];

    /// Whether `player` may start in this slot.
    pub fn accepts(&self, player: &Player) -> bool {
        match self {
            Slot::Qb => player.is_eligible_at("QB"),
            Slot::Rb1 | Slot::Rb2 => player.is_eligible_at("RB"),
            Slot::Wr1 | Slot::Wr2 | Slot::Wr3 => player.is_eligible_at("WR"),
            Slot::Te => player.is_eligible_at("TE"),
            Slot::Flex1 | Slot::Flex2 => !player.is_eligible_at("QB"),
            Slot::SuperFlex => true,
        }
    }

    /// The aggregation bucket this slot rolls into.
    pub fn bucket(&self) -> PositionBucket {
        match self {
            Slot::Qb => PositionBucket::Qb,
            Slot::Rb1 | Slot::Rb2 => PositionBucket::Rb,
            Slot::Wr1 | Slot::Wr2 | Slot::Wr3 => PositionBucket::Wr,
            Slot::Te => PositionBucket::Te,
            Slot::Flex1 | Slot::Flex2 => PositionBucket::Flex,
            Slot::SuperFlex => PositionBucket::SuperFlex,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Slot::Qb => "QB",
            Slot::Rb1 => "RB1",
            Slot::Rb2 => "RB2",
            Slot::Wr1 => "WR1",
            Slot::Wr2 => "WR2",
            Slot::Wr3 => "WR3",
            Slot::Te => "TE",
            Slot::Flex1 => "FLEX1",
            Slot::Flex2 => "FLEX2",
            Slot::SuperFlex => "SUPER_FLEX",
        }
    }

    /// Slot label with the ordinal stripped (`RB1` -> `RB`).
    pub fn group_label(&self) -> &'static str {
        self.bucket().label()
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// PositionBucket
// ---------------------------------------------------------------------------

/// Aggregation category for league averages and position ranks.
///
/// SUPER_FLEX is its own bucket and is never merged into QB.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PositionBucket {
    Qb,
    Rb,
    Wr,
    Te,
    Flex,
    SuperFlex,
}

impl PositionBucket {
    pub const ALL: [PositionBucket; 6] = [
        PositionBucket::Qb,
        PositionBucket::Rb,
        PositionBucket::Wr,
        PositionBucket::Te,
        PositionBucket::Flex,
        PositionBucket::SuperFlex,
    ];

    /// Parse a bucket label. Only the six bucket names are recognized, so
    /// positions like "K" or "DEF" yield `None`.
    pub fn from_position(s: &str) -> Option<Self> {
        match s {
            "QB" => Some(PositionBucket::Qb),
            "RB" => Some(PositionBucket::Rb),
            "WR" => Some(PositionBucket::Wr),
            "TE" => Some(PositionBucket::Te),
            "FLEX" => Some(PositionBucket::Flex),
            "SUPER_FLEX" => Some(PositionBucket::SuperFlex),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PositionBucket::Qb => "QB",
            PositionBucket::Rb => "RB",
            PositionBucket::Wr => "WR",
            PositionBucket::Te => "TE",
            PositionBucket::Flex => "FLEX",
            PositionBucket::SuperFlex => "SUPER_FLEX",
        }
    }

    /// Dense index into per-bucket arrays; matches the order of `ALL`.
    pub fn index(&self) -> usize {
        match self {
            PositionBucket::Qb => 0,
            PositionBucket::Rb => 1,
            PositionBucket::Wr => 2,
            PositionBucket::Te => 3,
            PositionBucket::Flex => 4,
            PositionBucket::SuperFlex => 5,
        }
    }

    /// Number of starting slots that roll into this bucket.
    pub fn slot_count(&self) -> usize {
        Slot::DISPLAY_ORDER
            .iter()
            .filter(|s| s.bucket() == *self)
            .count()
    }
}

impl fmt::Display for PositionBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

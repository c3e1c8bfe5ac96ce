// Ideal-lineup allocation: greedy, slot-by-slot best-available assignment.

use std::cmp::Ordering;
use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::player::Player;
use crate::slot::{PositionBucket, Slot, BENCH_SIZE};

/// A starting slot and the player allocated to it. `None` means no eligible
/// player remained when the slot was filled; such a slot scores 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineupSlot {
    pub slot: Slot,
    pub player: Option<Player>,
}

impl LineupSlot {
    pub fn score(&self) -> f64 {
        self.player
            .as_ref()
            .map_or(0.0, Player::avg_points_per_game)
    }

    pub fn is_filled(&self) -> bool {
        self.player.is_some()
    }
}

/// A team's best-possible lineup: one entry per starting slot (in
/// `Slot::DISPLAY_ORDER`) plus up to `BENCH_SIZE` bench players, best first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdealLineup {
    pub starters: Vec<LineupSlot>,
    pub bench: Vec<Player>,
}

impl IdealLineup {
    /// The allocation entry for `slot`.
    pub fn slot(&self, slot: Slot) -> Option<&LineupSlot> {
        self.starters.iter().find(|s| s.slot == slot)
    }

    /// The player starting in `slot`, if the slot was filled.
    pub fn player_at(&self, slot: Slot) -> Option<&Player> {
        self.slot(slot).and_then(|s| s.player.as_ref())
    }

    /// Starting entries that roll into `bucket`, filled or not.
    pub fn starters_in(&self, bucket: PositionBucket) -> impl Iterator<Item = &LineupSlot> {
        self.starters.iter().filter(move |s| s.slot.bucket() == bucket)
    }

    /// Sum of starter scores; empty slots contribute 0.
    pub fn starters_total(&self) -> f64 {
        self.starters.iter().map(LineupSlot::score).sum()
    }

    /// Every allocated player, starters first, then bench.
    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.starters
            .iter()
            .filter_map(|s| s.player.as_ref())
            .chain(self.bench.iter())
    }
}

/// Order two players best-first by points per game.
fn by_score_desc(a: &Player, b: &Player) -> Ordering {
    b.avg_points_per_game()
        .partial_cmp(&a.avg_points_per_game())
        .unwrap_or(Ordering::Equal)
}

/// Build the ideal lineup for a roster.
///
/// Slots are filled in `Slot::FILL_ORDER`. Each slot takes the highest
/// scoring player not yet used whose eligibility satisfies the slot; equal
/// scores resolve to the earlier player in `players`. A slot with no eligible
/// player is left empty without consuming anyone. The bench is then the top
/// `BENCH_SIZE` unused players; anyone beyond that is dropped.
///
/// Players are tracked by ID, so an ID never appears twice in the lineup.
pub fn allocate(players: &[Player]) -> IdealLineup {
    // Stable sort: ties keep roster order.
    let mut pool: Vec<&Player> = players.iter().collect();
    pool.sort_by(|a, b| by_score_desc(a, b));

    let mut used: HashSet<&str> = HashSet::new();
    let mut starters: Vec<LineupSlot> = Slot::DISPLAY_ORDER
        .iter()
        .map(|&slot| LineupSlot { slot, player: None })
        .collect();

    for slot in Slot::FILL_ORDER {
        let pick = pool
            .iter()
            .copied()
            .find(|p| !used.contains(p.id.as_str()) && slot.accepts(p));

        let Some(p) = pick else {
            debug!(slot = slot.label(), "no eligible player; slot left empty");
            continue;
        };
        debug!(slot = slot.label(), player = %p.name, ppg = p.avg_points_per_game(), "slot filled");
        used.insert(p.id.as_str());
        if let Some(entry) = starters.iter_mut().find(|s| s.slot == slot) {
            entry.player = Some(p.clone());
        }
    }

    let mut bench: Vec<Player> = Vec::with_capacity(BENCH_SIZE);
    for p in pool {
        if bench.len() == BENCH_SIZE {
            break;
        }
        if used.insert(p.id.as_str()) {
            bench.push(p.clone());
        }
    }

    IdealLineup { starters, bench }
}

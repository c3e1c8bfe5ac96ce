// League aggregation: per-team bucket totals and league-wide bucket averages.
//
// Pure reductions over a slice of finished lineups. Only starting slots are
// aggregated; the bench never contributes.

use serde::{Deserialize, Serialize};

use crate::lineup::IdealLineup;
use crate::player::Player;
use crate::slot::PositionBucket;

// ---------------------------------------------------------------------------
// Per-team bucket totals
// ---------------------------------------------------------------------------

/// Running total for one bucket on one team. `count` only counts filled
/// slots, so an empty slot adds 0 to the total without diluting the average.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BucketTally {
    pub total: f64,
    pub count: usize,
}

impl BucketTally {
    /// Mean score over filled slots, or 0 when none were filled.
    pub fn average(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.total / self.count as f64
        }
    }
}

/// A team's starter totals for every position bucket.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BucketTotals {
    tallies: [BucketTally; 6],
}

impl BucketTotals {
    /// Tally the starting slots of one lineup.
    pub fn from_lineup(lineup: &IdealLineup) -> Self {
        let mut totals = BucketTotals::default();
        for entry in &lineup.starters {
            let tally = &mut totals.tallies[entry.slot.bucket().index()];
            tally.total += entry.score();
            if entry.is_filled() {
                tally.count += 1;
            }
        }
        totals
    }

    pub fn get(&self, bucket: PositionBucket) -> BucketTally {
        self.tallies[bucket.index()]
    }

    pub fn total(&self, bucket: PositionBucket) -> f64 {
        self.get(bucket).total
    }

    /// Sum over all six buckets. The buckets partition the starting slots,
    /// so this is the lineup's starter total.
    pub fn ideal_total(&self) -> f64 {
        self.tallies.iter().map(|t| t.total).sum()
    }
}

// ---------------------------------------------------------------------------
// League averages
// ---------------------------------------------------------------------------

/// League-wide mean starter score for each position bucket.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LeagueAverages {
    by_bucket: [f64; 6],
}

impl LeagueAverages {
    /// Mean over every starting slot in the bucket across all lineups. Each
    /// slot is one sample, and an empty slot is a sample of 0.
    pub fn from_lineups(lineups: &[IdealLineup]) -> Self {
        let mut sums = [0.0_f64; 6];
        let mut samples = [0_usize; 6];

        for lineup in lineups {
            for entry in &lineup.starters {
                let idx = entry.slot.bucket().index();
                sums[idx] += entry.score();
                samples[idx] += 1;
            }
        }

        let mut by_bucket = [0.0_f64; 6];
        for idx in 0..by_bucket.len() {
            if samples[idx] > 0 {
                by_bucket[idx] = sums[idx] / samples[idx] as f64;
            }
        }
        LeagueAverages { by_bucket }
    }

    pub fn get(&self, bucket: PositionBucket) -> f64 {
        self.by_bucket[bucket.index()]
    }

    /// League average for a raw position string. Positions that are not one
    /// of the six buckets compare against 0.
    pub fn for_position(&self, position: &str) -> f64 {
        PositionBucket::from_position(position).map_or(0.0, |b| self.get(b))
    }
}

/// Aggregate every team's lineup into per-team bucket totals (in input
/// order) and the league averages.
pub fn aggregate(lineups: &[IdealLineup]) -> (LeagueAverages, Vec<BucketTotals>) {
    let averages = LeagueAverages::from_lineups(lineups);
    let totals = lineups.iter().map(BucketTotals::from_lineup).collect();
    (averages, totals)
}

// ---------------------------------------------------------------------------
// Bench quality
// ---------------------------------------------------------------------------

/// Mean distance between each bench player's score and the league average
/// for their primary position. An empty bench scores 0.
pub fn bench_quality(bench: &[Player], averages: &LeagueAverages) -> f64 {
    if bench.is_empty() {
        return 0.0;
    }
    let diffs: f64 = bench
        .iter()
        .map(|p| {
            let baseline = p
                .primary_position()
                .map_or(0.0, |pos| averages.for_position(pos));
            p.avg_points_per_game() - baseline
        })
        .sum();
    diffs / bench.len() as f64
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

// Ordinal team rankings by scalar metric.
//
// Every metric ranks all teams 1..=N with no shared ranks: teams are stably
// sorted by value, so equal values keep their input order.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::slot::PositionBucket;

/// Which end of a metric is better.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    /// Lower is better (rank 1 = smallest value).
    Ascending,
    /// Higher is better (rank 1 = largest value).
    Descending,
}

/// A per-team metric that the league report ranks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Metric {
    PointsFor,
    MaxPoints,
    PercentOfMax,
    PointsAgainst,
    Bucket(PositionBucket),
    IdealTotal,
    BenchQuality,
}

impl Metric {
    pub fn direction(&self) -> SortDirection {
        match self {
            Metric::PointsAgainst => SortDirection::Ascending,
            _ => SortDirection::Descending,
        }
    }
}

/// Rank `values` in the given direction.
///
/// Returns one 1-based rank per input value, in input order. The result is
/// always a permutation of `1..=values.len()`.
pub fn rank_values(values: &[f64], direction: SortDirection) -> Vec<usize> {
    let mut order: Vec<usize> = (0..values.len()).collect();
    // `sort_by` is stable, which is what makes tie order deterministic.
    order.sort_by(|&a, &b| {
        let cmp = values[a].partial_cmp(&values[b]).unwrap_or(Ordering::Equal);
        match direction {
            SortDirection::Ascending => cmp,
            SortDirection::Descending => cmp.reverse(),
        }
    });

    let mut ranks = vec![0; values.len()];
    for (position, &idx) in order.iter().enumerate() {
        ranks[idx] = position + 1;
    }
    ranks
}

/// Rank keyed entries, returning `(key, rank)` pairs in input order.
pub fn rank_by<K: Clone>(entries: &[(K, f64)], direction: SortDirection) -> Vec<(K, usize)> {
    let values: Vec<f64> = entries.iter().map(|(_, v)| *v).collect();
    entries
        .iter()
        .zip(rank_values(&values, direction))
        .map(|((key, _), rank)| (key.clone(), rank))
        .collect()
}

/// Every rank the league report shows for one team.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TeamRanks {
    pub points_for: usize,
    pub max_points: usize,
    pub percent_of_max: usize,
    pub points_against: usize,
    /// Indexed by `PositionBucket::index()`.
    pub buckets: [usize; 6],
    pub ideal_total: usize,
    pub bench_quality: usize,
}

impl TeamRanks {
    pub fn get(&self, metric: Metric) -> usize {
        match metric {
            Metric::PointsFor => self.points_for,
            Metric::MaxPoints => self.max_points,
            Metric::PercentOfMax => self.percent_of_max,
            Metric::PointsAgainst => self.points_against,
            Metric::Bucket(bucket) => self.buckets[bucket.index()],
            Metric::IdealTotal => self.ideal_total,
            Metric::BenchQuality => self.bench_quality,
        }
    }

    fn set(&mut self, metric: Metric, rank: usize) {
        match metric {
            Metric::PointsFor => self.points_for = rank,
            Metric::MaxPoints => self.max_points = rank,
            Metric::PercentOfMax => self.percent_of_max = rank,
            Metric::PointsAgainst => self.points_against = rank,
            Metric::Bucket(bucket) => self.buckets[bucket.index()] = rank,
            Metric::IdealTotal => self.ideal_total = rank,
            Metric::BenchQuality => self.bench_quality = rank,
        }
    }
}

/// All ranked metrics, in report order.
pub fn all_metrics() -> Vec<Metric> {
    let mut metrics = vec![
        Metric::PointsFor,
        Metric::MaxPoints,
        Metric::PercentOfMax,
        Metric::PointsAgainst,
    ];
    metrics.extend(PositionBucket::ALL.iter().map(|&b| Metric::Bucket(b)));
    metrics.push(Metric::IdealTotal);
    metrics.push(Metric::BenchQuality);
    metrics
}

/// Rank every team on every metric. `value` reads team `i`'s value for a
/// metric; the result holds one `TeamRanks` per team, in input order.
pub fn rank_league<F>(team_count: usize, value: F) -> Vec<TeamRanks>
where
    F: Fn(usize, Metric) -> f64,
{
    let mut ranks = vec![TeamRanks::default(); team_count];
    for metric in all_metrics() {
        let values: Vec<f64> = (0..team_count).map(|i| value(i, metric)).collect();
        for (team, rank) in rank_values(&values, metric.direction()).into_iter().enumerate() {
            ranks[team].set(metric, rank);
        }
    }
    ranks
}

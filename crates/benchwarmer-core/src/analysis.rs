// End-to-end league analysis: allocate → aggregate → bench quality → rank.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::CoreError;
use crate::league::{aggregate, bench_quality, BucketTotals, LeagueAverages};
use crate::lineup::{allocate, IdealLineup};
use crate::rank::{rank_league, Metric, TeamRanks};
use crate::team::TeamRecord;

/// Everything computed for a single team.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamAnalysis {
    pub record: TeamRecord,
    pub lineup: IdealLineup,
    pub totals: BucketTotals,
    pub ideal_total: f64,
    pub percent_of_max: f64,
    /// Mean bench score relative to league-average starters at the same
    /// primary position.
    pub bench_quality: f64,
    pub ranks: TeamRanks,
}

impl TeamAnalysis {
    /// This team's value for a ranked metric.
    pub fn metric(&self, metric: Metric) -> f64 {
        match metric {
            Metric::PointsFor => self.record.points_for,
            Metric::MaxPoints => self.record.max_points,
            Metric::PercentOfMax => self.percent_of_max,
            Metric::PointsAgainst => self.record.points_against,
            Metric::Bucket(bucket) => self.totals.total(bucket),
            Metric::IdealTotal => self.ideal_total,
            Metric::BenchQuality => self.bench_quality,
        }
    }
}

/// League-wide results, with teams in input order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeagueAnalysis {
    pub averages: LeagueAverages,
    pub avg_points_for: f64,
    pub avg_max_points: f64,
    pub teams: Vec<TeamAnalysis>,
}

impl LeagueAnalysis {
    pub fn team(&self, id: crate::team::TeamId) -> Option<&TeamAnalysis> {
        self.teams.iter().find(|t| t.record.id == id)
    }
}

fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, n) = values.fold((0.0, 0usize), |(s, n), v| (s + v, n + 1));
    if n == 0 {
        0.0
    } else {
        sum / n as f64
    }
}

/// Run the full pipeline over a league.
///
/// Each team is allocated independently; league averages are read only
/// after every team has been allocated. Fails on structurally invalid input
/// (non-finite season metrics, duplicate team ids). An empty league yields an
/// empty analysis.
pub fn analyze_league(teams: &[TeamRecord]) -> Result<LeagueAnalysis, CoreError> {
    let mut seen = HashSet::new();
    for team in teams {
        team.validate()?;
        if !seen.insert(team.id) {
            return Err(CoreError::DuplicateTeam(team.id));
        }
    }

    let lineups: Vec<IdealLineup> = teams
        .iter()
        .map(|team| {
            debug!(team = %team.name, players = team.players.len(), "allocating ideal lineup");
            allocate(&team.players)
        })
        .collect();

    let (averages, totals) = aggregate(&lineups);

    let mut analyses: Vec<TeamAnalysis> = teams
        .iter()
        .zip(lineups)
        .zip(totals)
        .map(|((record, lineup), totals)| TeamAnalysis {
            ideal_total: totals.ideal_total(),
            percent_of_max: record.percent_of_max(),
            bench_quality: bench_quality(&lineup.bench, &averages),
            record: record.clone(),
            lineup,
            totals,
            ranks: TeamRanks::default(),
        })
        .collect();

    let ranks = rank_league(analyses.len(), |i, metric| analyses[i].metric(metric));
    for (analysis, ranks) in analyses.iter_mut().zip(ranks) {
        analysis.ranks = ranks;
    }

    info!(teams = analyses.len(), "league analysis complete");

    Ok(LeagueAnalysis {
        averages,
        avg_points_for: mean(teams.iter().map(|t| t.points_for)),
        avg_max_points: mean(teams.iter().map(|t| t.max_points)),
        teams: analyses,
    })
}

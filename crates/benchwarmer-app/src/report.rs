// Markdown rendering of a league analysis.

use benchwarmer_core::analysis::{LeagueAnalysis, TeamAnalysis};
use benchwarmer_core::rank::Metric;
use benchwarmer_core::{PositionBucket, Slot};

/// Format a number with fixed decimals; non-finite values print as zero.
fn fmt_num(n: f64, digits: usize) -> String {
    if n.is_finite() {
        format!("{n:.digits$}")
    } else {
        format!("{:.digits$}", 0.0)
    }
}

/// Render the full league report.
pub fn render_report(analysis: &LeagueAnalysis, league_name: &str) -> String {
    let mut lines: Vec<String> = Vec::new();
    lines.push(format!("# Team report: {league_name}"));
    lines.push(String::new());
    lines.push(format!("Average Points For: {}", fmt_num(analysis.avg_points_for, 2)));
    lines.push(format!("Average Max Points: {}", fmt_num(analysis.avg_max_points, 2)));
    lines.push(String::new());
    lines.push("Average by position:".to_string());
    for bucket in PositionBucket::ALL {
        lines.push(format!("- {bucket}: {}", fmt_num(analysis.averages.get(bucket), 2)));
    }
    lines.push(String::new());

    for team in &analysis.teams {
        render_team(&mut lines, team);
    }

    lines.join("\n")
}

fn render_team(lines: &mut Vec<String>, team: &TeamAnalysis) {
    let record = &team.record;
    let ranks = &team.ranks;

    lines.push(format!("## {}", record.name));
    lines.push(format!(
        "Points For: {} (Rank {})",
        fmt_num(record.points_for, 2),
        ranks.points_for
    ));
    lines.push(format!(
        "Max Points: {} (Rank {})",
        fmt_num(record.max_points, 2),
        ranks.max_points
    ));
    lines.push(format!(
        "% of Max: {}% (Rank {})",
        fmt_num(team.percent_of_max, 1),
        ranks.percent_of_max
    ));
    lines.push(format!(
        "Points Against: {} (Rank {})",
        fmt_num(record.points_against, 2),
        ranks.points_against
    ));

    lines.push("Ideal roster:".to_string());
    for slot in Slot::DISPLAY_ORDER {
        let Some(entry) = team.lineup.slot(slot) else {
            continue;
        };
        let name = entry.player.as_ref().map_or("Empty", |p| p.name.as_str());
        lines.push(format!(
            "- {} - {} - {}",
            slot.group_label(),
            name,
            fmt_num(entry.score(), 2)
        ));
    }
    for player in &team.lineup.bench {
        lines.push(format!(
            "- BENCH-{} - {} - {}",
            player.primary_position().unwrap_or("UNK"),
            player.name,
            fmt_num(player.avg_points_per_game(), 2)
        ));
    }

    lines.push(String::new());
    lines.push("Position totals and averages:".to_string());
    for bucket in PositionBucket::ALL {
        let tally = team.totals.get(bucket);
        lines.push(format!(
            "- {bucket}: Total = {}, Count = {}, Average = {}",
            fmt_num(tally.total, 2),
            tally.count,
            fmt_num(tally.average(), 2)
        ));
    }

    lines.push(String::new());
    lines.push(format!(
        "AVG Bench Player Score Distance: {} (Rank {})",
        fmt_num(team.bench_quality, 2),
        ranks.bench_quality
    ));

    lines.push(String::new());
    let position_ranks: Vec<String> = PositionBucket::ALL
        .iter()
        .map(|&b| format!("{b} Rank - {}", ranks.get(Metric::Bucket(b))))
        .collect();
    lines.push(format!("Position Ranks: {}", position_ranks.join(", ")));
    lines.push(format!(
        "Ideal roster total (starting slots): {} (Rank {})",
        fmt_num(team.ideal_total, 2),
        ranks.ideal_total
    ));
    lines.push(String::new());
}

#[cfg(test)]
mod tests {
    use super::*;
    use benchwarmer_core::{analyze_league, Player, TeamRecord};

    fn league() -> Vec<TeamRecord> {
        vec![
            TeamRecord {
                id: 1,
                name: "Gridiron Gang".into(),
                points_for: 150.5,
                points_against: 130.0,
                max_points: 300.0,
                players: vec![
                    Player::new("qb", "Josh Allen", &["QB"], 1, 24.0),
                    Player::new("rb", "Bijan Robinson", &["RB"], 1, 18.5),
                    Player::new("k", "Brandon Aubrey", &["K"], 1, 9.0),
                ],
            },
            TeamRecord {
                id: 2,
                name: "Fourth and Long".into(),
                points_for: 140.0,
                points_against: 120.0,
                max_points: 0.0,
                players: vec![
                    Player::new("qb_a", "Lamar Jackson", &["QB"], 1, 20.0),
                    Player::new("qb_b", "Jalen Hurts", &["QB"], 1, 18.0),
                ],
            },
        ]
    }

    fn rendered() -> String {
        render_report(&analyze_league(&league()).unwrap(), "Test League")
    }

    #[test]
    fn fmt_num_rounds_and_guards_non_finite() {
        assert_eq!(fmt_num(1.005, 1), "1.0");
        assert_eq!(fmt_num(2.0 / 3.0, 2), "0.67");
        assert_eq!(fmt_num(f64::NAN, 2), "0.00");
        assert_eq!(fmt_num(f64::INFINITY, 1), "0.0");
    }

    #[test]
    fn header_lists_league_averages() {
        let report = rendered();
        assert!(report.starts_with("# Team report: Test League\n"));
        assert!(report.contains("Average Points For: 145.25"));
        assert!(report.contains("Average Max Points: 150.00"));
        assert!(report.contains("- QB: 22.00"));
        assert!(report.contains("- SUPER_FLEX: 13.50"));
    }

    #[test]
    fn team_section_shows_ranks_and_percent() {
        let report = rendered();
        assert!(report.contains("## Gridiron Gang\nPoints For: 150.50 (Rank 1)"));
        assert!(report.contains("% of Max: 50.2% (Rank 2)"));
        assert!(report.contains("% of Max: 14000.0% (Rank 1)"));
        assert!(report.contains("Points Against: 120.00 (Rank 1)"));
    }

    #[test]
    fn lineup_lists_empty_slots_and_bench() {
        let report = rendered();
        assert!(report.contains("- QB - Josh Allen - 24.00"));
        assert!(report.contains("- RB - Bijan Robinson - 18.50"));
        assert!(report.contains("- RB - Empty - 0.00"));
        assert!(report.contains("- SUPER_FLEX - Brandon Aubrey - 9.00"));
        assert!(report.contains("- SUPER_FLEX - Jalen Hurts - 18.00"));
        assert!(!report.contains("BENCH-"));
    }

    #[test]
    fn totals_ranks_and_ideal_total() {
        let report = rendered();
        assert!(report.contains("- RB: Total = 18.50, Count = 1, Average = 18.50"));
        assert!(report.contains("- WR: Total = 0.00, Count = 0, Average = 0.00"));
        assert!(report.contains(
            "Position Ranks: QB Rank - 1, RB Rank - 1, WR Rank - 1, TE Rank - 1, FLEX Rank - 1, SUPER_FLEX Rank - 2"
        ));
        assert!(report.contains("Ideal roster total (starting slots): 51.50 (Rank 1)"));
        assert!(report.contains("Ideal roster total (starting slots): 38.00 (Rank 2)"));
    }

    #[test]
    fn bench_rows_use_primary_position() {
        let mut teams = league();
        teams[1].players.push(Player::new("k2", "Jake Elliott", &["K"], 1, 7.0));
        teams[1].players.push(Player::new("k3", "Tyler Bass", &["K"], 1, 6.0));
        teams[1].players.push(Player::new("q3", "Backup", &["QB"], 1, 3.0));
        teams[1].players.push(Player::new("x", "Mystery", &[], 1, 1.0));
        let report = render_report(&analyze_league(&teams).unwrap(), "Test League");
        assert!(report.contains("- BENCH-QB - Backup - 3.00"));
        assert!(report.contains("- BENCH-UNK - Mystery - 1.00"));
        assert!(report.contains("- FLEX - Jake Elliott - 7.00"));
        assert!(report.contains("- FLEX - Tyler Bass - 6.00"));
    }
}

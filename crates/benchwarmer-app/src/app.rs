// Command dispatch: pull the league into a snapshot, render a report from a
// snapshot, or both in sequence.

use std::path::Path;
use std::str::FromStr;

use anyhow::{bail, Context};
use benchwarmer_core::analyze_league;
use benchwarmer_sleeper::SleeperClient;
use tracing::info;

use crate::config::Config;
use crate::report::render_report;
use crate::snapshot::{save_snapshot, Snapshot};
use crate::source::{SleeperSource, SnapshotSource, TeamSource};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Fetch rosters and player stats from Sleeper into the snapshot file.
    Fetch,
    /// Render the report from the snapshot file.
    Report,
    /// Fetch, then report.
    Run,
}

impl FromStr for Command {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fetch" => Ok(Command::Fetch),
            "report" => Ok(Command::Report),
            "run" => Ok(Command::Run),
            other => bail!("unknown command '{other}' (expected fetch, report or run)"),
        }
    }
}

/// Parse the command from the process arguments (program name excluded).
/// No argument means `run`.
pub fn parse_command<I, S>(args: I) -> anyhow::Result<Command>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut args = args.into_iter();
    let command = match args.next() {
        Some(arg) => arg.as_ref().parse()?,
        None => Command::Run,
    };
    if let Some(extra) = args.next() {
        bail!("unexpected argument '{}'", extra.as_ref());
    }
    Ok(command)
}

/// Load every team from `source` and save them as a snapshot.
pub async fn fetch_snapshot(
    source: &dyn TeamSource,
    config: &Config,
    snapshot_path: &Path,
) -> anyhow::Result<Snapshot> {
    let teams = source.load_teams().await?;
    let snapshot = Snapshot::new(&config.league.league_id, &config.league.season, teams);
    save_snapshot(snapshot_path, &snapshot)?;
    info!(
        path = %snapshot_path.display(),
        teams = snapshot.teams.len(),
        "snapshot saved"
    );
    Ok(snapshot)
}

/// Analyze the teams from `source` and render the markdown report.
pub async fn build_report(source: &dyn TeamSource, league_name: &str) -> anyhow::Result<String> {
    let teams = source.load_teams().await?;
    let analysis = analyze_league(&teams).context("league analysis failed")?;
    Ok(render_report(&analysis, league_name))
}

/// Build the report and write it to `report_path`.
pub async fn write_report(
    source: &dyn TeamSource,
    league_name: &str,
    report_path: &Path,
) -> anyhow::Result<()> {
    let report = build_report(source, league_name).await?;
    if let Some(parent) = report_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    std::fs::write(report_path, report)
        .with_context(|| format!("failed to write report to {}", report_path.display()))?;
    info!(path = %report_path.display(), "report written");
    Ok(())
}

/// Run `command` against the configured league.
pub async fn execute(command: Command, config: &Config) -> anyhow::Result<()> {
    let snapshot_path = Path::new(&config.output.snapshot_path);
    let report_path = Path::new(&config.output.report_path);

    if matches!(command, Command::Fetch | Command::Run) {
        let client = SleeperClient::new(config.sleeper_settings()?)
            .context("failed to build Sleeper client")?;
        fetch_snapshot(&SleeperSource::new(client), config, snapshot_path).await?;
    }

    if matches!(command, Command::Report | Command::Run) {
        let source = SnapshotSource::new(snapshot_path);
        write_report(&source, &config.league.name, report_path).await?;
    }

    Ok(())
}

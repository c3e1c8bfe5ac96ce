// Benchwarmer entry point.
//
// Startup sequence:
// 1. Initialize tracing (stderr, so stdout stays clean)
// 2. Parse the command (fetch | report | run, default run)
// 3. Load config, copying defaults on first run
// 4. Execute the command

use benchwarmer_app::app;
use benchwarmer_app::config;

use anyhow::Context;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing()?;

    let command = app::parse_command(std::env::args().skip(1))?;

    let config = config::load_config().context("failed to load configuration")?;
    info!(
        league = %config.league.name,
        league_id = %config.league.league_id,
        season = %config.league.season,
        ?command,
        "config loaded"
    );

    app::execute(command, &config).await?;
    info!("done");
    Ok(())
}

fn init_tracing() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("benchwarmer=info,warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    Ok(())
}

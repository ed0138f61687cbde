//! Jetcaster TV - remote-control composition root binary.

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "jetcaster_tv=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("Starting Jetcaster TV");

    let config = jetcaster_tv::infrastructure::config::load_runner_config()
        .context("loading runner config")?;

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    jetcaster_tv::runner::run(&config, stdin.lock(), stdout.lock())
}

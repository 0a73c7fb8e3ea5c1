use anyhow::{Context, Result};
use clap::Parser;
use stockroom::cli::Cli;
use stockroom::config::Args;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> Result<()> {
    init_tracing();

    let args = Args::parse();
    let store = args.store();
    tracing::info!(path = %store.path().display(), "using data file");

    let mut cli = Cli::stdio(store).context("failed to start console session")?;
    cli.run().context("console session ended unexpectedly")?;
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

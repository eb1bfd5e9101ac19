use std::io::{self, IsTerminal};

use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use jobwire::cli::{Cli, Command, pause};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so the console transcript on stdout stays clean.
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("jobwire=warn")),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .init();

    if let Some(Command::Completion(completion)) = &cli.command {
        return completion.run();
    }

    let config = cli.run.load_config()?;
    tracing::debug!(?config, "configuration loaded");

    let stdin = io::stdin();
    let pausing = config.pause_on_exit && stdin.is_terminal();
    jobwire::run_session(stdin.lock(), io::stdout().lock(), &config, pausing)?;

    if pausing {
        pause::wait_for_key()?;
    }
    Ok(())
}

//! tfbridge CLI.

use clap::Parser;
use tfbridge::cli::{Cli, dispatch};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();
    dispatch(cli.command)
}

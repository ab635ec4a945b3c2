use assetc::cli::{Cli, Commands};
use clap::Parser;
use miette::Result;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    match cli.command {
        Commands::Build(args) => assetc::cli::build::run(args)?,
        Commands::Validate(args) => assetc::cli::validate::run(args)?,
        Commands::Guard(args) => assetc::cli::guard::run(args)?,
        Commands::Completions(args) => assetc::cli::completions::run(args)?,
    }

    Ok(())
}

pub mod build;
pub mod completions;
pub mod guard;
pub mod validate;

use clap::{Parser, Subcommand};

/// assetc - Asset source emitter
#[derive(Parser, Debug)]
#[command(name = "assetc")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Log debug output (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Emit declaration and definition files from an asset manifest
    Build(build::BuildArgs),

    /// Validate an asset manifest without emitting
    Validate(validate::ValidateArgs),

    /// Print the include guard derived from a filename
    Guard(guard::GuardArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

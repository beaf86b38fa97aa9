mod build;
mod check;
mod completions;
mod init;

use build::BuildCommand;
use check::CheckCommand;
use clap::{Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use init::InitCommand;

/// Extension trait for exiting on configuration errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for typetrace_config::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "typetrace")]
#[command(version)]
#[command(about = "Generate type-safe analytics clients from your tracking plans")]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Build(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::Init(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate client code from the configured tracking plans
    #[command(alias = "b")]
    Build(BuildCommand),

    /// Validate the workspace configuration without generating code
    Check(CheckCommand),

    /// Create a typetrace.toml and a starter tracking plan
    Init(InitCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

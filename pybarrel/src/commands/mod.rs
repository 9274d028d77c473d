mod check;
mod completions;
mod generate;

use std::path::Path;

use check::CheckCommand;
use clap::{Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use generate::GenerateCommand;
use pybarrel_manifest::Manifest;

/// Extension trait for exiting on manifest errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for pybarrel_manifest::Result<T> {
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

/// Load the supplemental-globals manifest for a run.
///
/// An explicit --config path must parse, or the run aborts before any
/// source file is touched. The implicit `<dir>/pybarrel.toml` default may
/// be absent, which means an empty manifest.
pub(crate) fn load_manifest(dir: &Path, config: Option<&Path>) -> Manifest {
    match config {
        Some(path) => Manifest::from_file(path).unwrap_or_exit(),
        None => {
            let default = dir.join("pybarrel.toml");
            if default.exists() {
                Manifest::from_file(&default).unwrap_or_exit()
            } else {
                Manifest::default()
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "pybarrel")]
#[command(version)]
#[command(about = "Generate Python package initializers from module declarations")]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Generate(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Regenerate the package __init__.py
    Generate(GenerateCommand),

    /// Report what would be exported without writing anything
    Check(CheckCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

use std::path::PathBuf;

use clap::Args;
use eyre::Result;

use super::load_manifest;
use crate::{
    ops::{self, GenerateOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Package directory to scan (defaults to the current directory)
    #[arg(default_value = ".")]
    pub dir: PathBuf,

    /// Path to pybarrel.toml (defaults to <DIR>/pybarrel.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Preview the generated initializer without writing to disk
    #[arg(long)]
    pub dry_run: bool,

    /// Additional file names to exclude from discovery
    #[arg(long, value_name = "NAME")]
    pub exclude: Vec<String>,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let manifest = load_manifest(&self.dir, self.config.as_deref());

        let report = ops::generate(
            &manifest,
            GenerateOptions {
                dir: &self.dir,
                exclude: &self.exclude,
                dry_run: self.dry_run,
            },
        )?;

        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}

use std::path::PathBuf;

use clap::Args;
use eyre::Result;

use super::load_manifest;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    /// Package directory to scan (defaults to the current directory)
    #[arg(default_value = ".")]
    pub dir: PathBuf,

    /// Path to pybarrel.toml (defaults to <DIR>/pybarrel.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Additional file names to exclude from discovery
    #[arg(long, value_name = "NAME")]
    pub exclude: Vec<String>,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let manifest = load_manifest(&self.dir, self.config.as_deref());

        let report = ops::check(&manifest, &self.dir, &self.exclude)?;

        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}

//! Shared discovery and extraction pipeline.

use std::path::{Path, PathBuf};

use eyre::{Context, Result};
use indexmap::IndexMap;
use pybarrel_core::Declarations;
use pybarrel_extract::ModuleParser;
use pybarrel_manifest::Manifest;

use super::discover::discover;
use crate::reports::SkippedFile;

/// Extraction outcome: per-module declarations in discovery order, plus
/// the files skipped because they failed to parse.
pub struct Extraction {
    pub modules: IndexMap<PathBuf, Declarations>,
    pub skipped: Vec<SkippedFile>,
}

/// Discover the package's source files and extract their declarations.
///
/// The exclusion list is the manifest's `exclude` plus any extra names
/// from the command line. A file that fails to parse is recorded as
/// skipped and contributes no declarations; a file that cannot be read
/// aborts the run before anything is written.
pub fn extract_modules(manifest: &Manifest, dir: &Path, exclude: &[String]) -> Result<Extraction> {
    let mut excluded = manifest.exclude.clone();
    excluded.extend(exclude.iter().cloned());

    let files = discover(dir, &excluded)?;

    let mut parser = ModuleParser::new().wrap_err("failed to initialize the Python parser")?;
    let mut modules = IndexMap::new();
    let mut skipped = Vec::new();

    for path in files {
        let source = std::fs::read_to_string(&path)
            .wrap_err_with(|| format!("failed to read '{}'", path.display()))?;

        match parser.extract(&source) {
            Ok(decls) => {
                modules.insert(path, decls);
            }
            Err(err) => skipped.push(SkippedFile {
                path,
                reason: err.to_string(),
            }),
        }
    }

    Ok(Extraction { modules, skipped })
}

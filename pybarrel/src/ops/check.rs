//! Check operation - inspect what would be exported without writing.

use std::path::Path;

use eyre::Result;
use pybarrel_codegen::ExportManifest;
use pybarrel_manifest::Manifest;

use super::extract::extract_modules;
use crate::reports::{CheckReport, ModuleSummary};

/// Execute the check operation.
///
/// Runs the same discovery and extraction as generation and reports the
/// resulting export surface, without touching the initializer.
pub fn check(manifest: &Manifest, dir: &Path, exclude: &[String]) -> Result<CheckReport> {
    let extraction = extract_modules(manifest, dir, exclude)?;
    let export_manifest = ExportManifest::build(&extraction.modules, manifest);

    let modules = export_manifest
        .blocks()
        .iter()
        .map(|block| ModuleSummary {
            name: block.module().to_string(),
            export_count: block.exported().len(),
        })
        .collect();

    Ok(CheckReport {
        dir: dir.to_path_buf(),
        modules,
        export_count: export_manifest.exports().len(),
        skipped: extraction.skipped,
        duplicates: export_manifest.duplicates(),
    })
}

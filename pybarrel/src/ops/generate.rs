//! Generate operation - initializer generation from a package directory.

use std::path::Path;

use eyre::{Context, Result};
use pybarrel_codegen::{ExportManifest, InitPy};
use pybarrel_core::GeneratedFile;
use pybarrel_manifest::Manifest;

use super::extract::extract_modules;
use crate::reports::{GenerateReport, GenerationResult, PreviewResult, WrittenResult};

/// Options for the generate operation.
pub struct GenerateOptions<'a> {
    /// Package directory to scan and write into.
    pub dir: &'a Path,
    /// Extra file names to exclude from discovery.
    pub exclude: &'a [String],
    /// Whether to preview without writing the initializer.
    pub dry_run: bool,
}

/// Execute the generate operation.
///
/// Discovers source files, extracts their declarations (skipping files
/// that fail to parse), builds the export manifest, and writes or
/// previews the package initializer. The document is rendered in memory
/// first; on any fatal error the previous initializer stays untouched.
pub fn generate(manifest: &Manifest, opts: GenerateOptions) -> Result<GenerateReport> {
    let extraction = extract_modules(manifest, opts.dir, opts.exclude)?;

    let init = InitPy::new(ExportManifest::build(&extraction.modules, manifest));
    let module_count = init.manifest().module_count();
    let export_count = init.manifest().exports().len();
    let duplicates = init.manifest().duplicates();

    let result = if opts.dry_run {
        GenerationResult::Preview(PreviewResult {
            path: init.path(opts.dir),
            content: init.render(),
        })
    } else {
        let path = init
            .write(opts.dir)
            .wrap_err("failed to write the package initializer")?;
        GenerationResult::Written(WrittenResult { path })
    };

    Ok(GenerateReport {
        module_count,
        export_count,
        skipped: extraction.skipped,
        duplicates,
        result,
    })
}

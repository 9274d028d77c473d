//! __init__.py entry point generator.

use std::path::{Path, PathBuf};

use pybarrel_core::GeneratedFile;

use crate::ExportManifest;

/// The package's `__init__.py` file.
///
/// Rendered fully in memory and written in one call, so a previous
/// initializer is either replaced whole or left untouched.
pub struct InitPy {
    manifest: ExportManifest,
}

impl InitPy {
    pub fn new(manifest: ExportManifest) -> Self {
        Self { manifest }
    }

    /// The export manifest this file serializes.
    pub fn manifest(&self) -> &ExportManifest {
        &self.manifest
    }
}

impl GeneratedFile for InitPy {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("__init__.py")
    }

    fn render(&self) -> String {
        self.manifest.render()
    }
}

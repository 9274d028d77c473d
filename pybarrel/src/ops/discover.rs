//! Directory discovery.

use std::path::{Path, PathBuf};

use eyre::{Context, Result};

/// The generated file name, always withheld from discovery.
const INIT_FILE: &str = "__init__.py";

/// List the Python source files of a package directory.
///
/// Returns every regular `*.py` file directly in `dir`, excluding
/// `__init__.py` and any name on the exclusion list, sorted by path so
/// discovery order is stable across runs and platforms.
pub fn discover(dir: &Path, exclude: &[String]) -> Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(dir)
        .wrap_err_with(|| format!("failed to read directory '{}'", dir.display()))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry =
            entry.wrap_err_with(|| format!("failed to read directory '{}'", dir.display()))?;
        let path = entry.path();

        if !path.is_file() || path.extension().and_then(|ext| ext.to_str()) != Some("py") {
            continue;
        }

        let Some(name) = path.file_name().and_then(|name| name.to_str()) else {
            continue;
        };
        if name == INIT_FILE || exclude.iter().any(|excluded| excluded == name) {
            continue;
        }

        files.push(path);
    }

    files.sort();
    Ok(files)
}

//! Check command report data structures.

use std::path::PathBuf;

use super::generate::SkippedFile;
use super::output::{Output, Report};

/// Report data from the check operation.
#[derive(Debug)]
pub struct CheckReport {
    /// Package directory that was scanned.
    pub dir: PathBuf,

    /// Modules that would contribute an import block.
    pub modules: Vec<ModuleSummary>,

    /// Total exported names.
    pub export_count: usize,

    /// Files skipped because they failed to parse.
    pub skipped: Vec<SkippedFile>,

    /// Names exported by more than one module.
    pub duplicates: Vec<String>,
}

/// Per-module export summary.
#[derive(Debug)]
pub struct ModuleSummary {
    /// Bare module name.
    pub name: String,
    /// Number of names the module would export.
    pub export_count: usize,
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for skip in &self.skipped {
            out.warning(&format!("skipped {}: {}", skip.path.display(), skip.reason));
        }
        for name in &self.duplicates {
            out.warning(&format!("'{}' is exported by more than one module", name));
        }

        out.preformatted(&format!("✓ {} scans clean", self.dir.display()));
        out.newline();

        out.section(&format!("Modules ({})", self.modules.len()));
        for module in &self.modules {
            let label = if module.export_count == 1 {
                format!("{} (1 export)", module.name)
            } else {
                format!("{} ({} exports)", module.name, module.export_count)
            };
            out.list_item(&label);
        }
        out.newline();

        out.key_value("Exports", &self.export_count.to_string());
    }
}

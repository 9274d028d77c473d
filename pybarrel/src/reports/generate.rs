//! Generate command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from initializer generation.
#[derive(Debug)]
pub struct GenerateReport {
    /// Modules contributing an import block.
    pub module_count: usize,

    /// Total exported names.
    pub export_count: usize,

    /// Files skipped because they failed to parse.
    pub skipped: Vec<SkippedFile>,

    /// Names exported by more than one module.
    pub duplicates: Vec<String>,

    /// Generation result (file written or preview).
    pub result: GenerationResult,
}

/// A source file skipped during extraction.
#[derive(Debug)]
pub struct SkippedFile {
    /// Path of the skipped file.
    pub path: PathBuf,
    /// Why extraction failed.
    pub reason: String,
}

/// Result of initializer generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// The initializer was written to disk.
    Written(WrittenResult),
    /// Dry-run preview.
    Preview(PreviewResult),
}

/// Result when the initializer was written to disk.
#[derive(Debug)]
pub struct WrittenResult {
    /// Path of the regenerated initializer.
    pub path: PathBuf,
}

/// Result of a dry-run preview.
#[derive(Debug)]
pub struct PreviewResult {
    /// Path the initializer would be written to.
    pub path: PathBuf,
    /// Rendered document.
    pub content: String,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        self.render_warnings(out);

        match &self.result {
            GenerationResult::Written(written) => self.render_written(out, written),
            GenerationResult::Preview(preview) => self.render_preview(out, preview),
        }
    }
}

impl GenerateReport {
    fn render_warnings(&self, out: &mut dyn Output) {
        for skip in &self.skipped {
            out.warning(&format!("skipped {}: {}", skip.path.display(), skip.reason));
        }
        for name in &self.duplicates {
            out.warning(&format!("'{}' is exported by more than one module", name));
        }
    }

    fn render_written(&self, out: &mut dyn Output, written: &WrittenResult) {
        out.key_value("Modules", &self.module_count.to_string());
        out.key_value("Exports", &self.export_count.to_string());
        out.key_value("Generated", &written.path.display().to_string());
    }

    fn render_preview(&self, out: &mut dyn Output, preview: &PreviewResult) {
        out.divider(&preview.path.display().to_string());
        out.preformatted(&preview.content);

        out.divider("Summary");
        out.preformatted(&format!(
            "{} modules, {} exports would be written",
            self.module_count, self.export_count
        ));
    }
}

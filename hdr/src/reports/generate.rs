//! Generate command report data structures.

use hdrgen_codegen::GenerateResult;

use super::output::{Output, Report};

/// Report data from header and source generation.
#[derive(Debug)]
pub struct GenerateReport {
    pub api_name: String,
    /// Target API version, if the description sets one.
    pub target_version: Option<String>,
    pub category_count: usize,
    pub entity_count: usize,
    /// Lint warnings, already formatted.
    pub warnings: Vec<String>,
    pub result: GenerationResult,
}

/// Result of code generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// Files were written to disk (or found unchanged).
    Written(GenerateResult),
    /// Dry-run preview.
    Preview(Vec<PreviewFile>),
}

/// A file in preview mode.
#[derive(Debug)]
pub struct PreviewFile {
    /// File path, relative to the output directory.
    pub path: String,
    pub content: String,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        match &self.result {
            GenerationResult::Written(written) => self.render_written(out, written),
            GenerationResult::Preview(files) => self.render_preview(out, files),
        }
    }
}

impl GenerateReport {
    fn render_written(&self, out: &mut dyn Output, written: &GenerateResult) {
        for warning in &self.warnings {
            out.diagnostic(warning);
        }
        if !self.warnings.is_empty() {
            out.newline();
        }

        match &self.target_version {
            Some(version) => out.preformatted(&format!("{} (target {})", self.api_name, version)),
            None => out.preformatted(&self.api_name),
        }
        out.preformatted(&format!(
            "{} entities in {} categories",
            self.entity_count, self.category_count
        ));
        out.newline();

        if !written.written.is_empty() {
            out.section("Written");
            for path in &written.written {
                out.added_item(&path.display().to_string());
            }
        }
        if !written.unchanged.is_empty() {
            out.section("Unchanged");
            for path in &written.unchanged {
                out.list_item(&path.display().to_string());
            }
        }
    }

    fn render_preview(&self, out: &mut dyn Output, files: &[PreviewFile]) {
        for file in files {
            out.divider(&file.path);
            out.preformatted(&file.content);
        }

        out.divider("Summary");
        out.preformatted(&format!("{} files would be generated", files.len()));
    }
}

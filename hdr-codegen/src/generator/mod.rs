//! Whole-file generators built on the category pipeline and formatters.

mod header;
mod source;

use std::path::{Path, PathBuf};

use eyre::Result;
pub use header::HeaderGenerator;
use hdrgen_api::OutputConfig;
use hdrgen_core::{OutputFile, WriteResult};
pub use source::SourceGenerator;
use tracing::info;

use crate::category::{CategoryLine, UnfoldOptions, space_category, unfold_category};

/// A generator producing one or more output files from an API description.
pub trait Generator {
    /// Short name used in logs (e.g. "header").
    fn name(&self) -> &'static str;

    /// Render the files without touching the disk.
    ///
    /// Paths are relative to the output directory.
    fn preview(&self) -> Vec<OutputFile>;

    /// Render and write every file under `output_dir`.
    fn generate(&self, output_dir: &Path) -> Result<GenerateResult> {
        let mut result = GenerateResult::default();
        for file in self.preview() {
            let file = file.under(output_dir);
            match file.write()? {
                WriteResult::Written => result.written.push(file.path().to_path_buf()),
                WriteResult::Unchanged => result.unchanged.push(file.path().to_path_buf()),
            }
        }
        info!(
            generator = self.name(),
            written = result.written.len(),
            unchanged = result.unchanged.len(),
            "generated"
        );
        Ok(result)
    }
}

/// Files touched by [`Generator::generate`].
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct GenerateResult {
    /// Files whose content was written
    pub written: Vec<PathBuf>,
    /// Files left alone because their content was already current
    pub unchanged: Vec<PathBuf>,
}

impl GenerateResult {
    /// Fold another result into this one.
    pub fn merge(&mut self, other: GenerateResult) {
        self.written.extend(other.written);
        self.unchanged.extend(other.unchanged);
    }
}

/// Flatten categorized lines into a file section according to `output`.
///
/// With an empty banner, runs are only separated by blank lines. Category
/// sorting is stable and applies either way.
fn flatten(mut lines: Vec<CategoryLine>, output: &OutputConfig) -> Vec<String> {
    if output.banner.is_empty() {
        if output.sort_categories {
            lines.sort_by(|l, r| l.category.cmp(&r.category));
        }
        return space_category(lines).into_iter().map(|l| l.line).collect();
    }

    let mut options = UnfoldOptions::new().banner(output.banner.as_str());
    if output.sort_categories {
        options = options.sort_category(|l, r| l.category.cmp(&r.category));
    }
    unfold_category(lines, &options)
}

/// Append a section, separating it from what precedes with one blank line.
fn push_section(out: &mut Vec<String>, section: Vec<String>) {
    if section.is_empty() {
        return;
    }
    let starts_blank = section.first().is_some_and(|l| l.is_empty());
    let ends_blank = out.last().is_none_or(|l| l.is_empty());
    if !starts_blank && !ends_blank {
        out.push(String::new());
    }
    out.extend(section);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output(banner: &str, sort: bool) -> OutputConfig {
        OutputConfig {
            banner: banner.to_string(),
            category_guard: None,
            align_defines: true,
            sort_categories: sort,
        }
    }

    #[test]
    fn test_flatten_with_banner_sorted() {
        let lines = vec![
            CategoryLine::new("b", "b1"),
            CategoryLine::new("a", "a1"),
            CategoryLine::new("b", "b2"),
        ];
        assert_eq!(
            flatten(lines, &output("// {}", true)),
            vec!["", "// a", "", "a1", "", "// b", "", "b1", "b2"]
        );
    }

    #[test]
    fn test_flatten_without_banner() {
        let lines = vec![CategoryLine::new("a", "a1"), CategoryLine::new("b", "b1")];
        assert_eq!(flatten(lines, &output("", false)), vec!["a1", "", "b1", ""]);
    }

    #[test]
    fn test_flatten_without_banner_sorted() {
        let lines = vec![
            CategoryLine::new("b", "b1"),
            CategoryLine::new("a", "a1"),
            CategoryLine::new("b", "b2"),
        ];
        assert_eq!(
            flatten(lines, &output("", true)),
            vec!["a1", "", "b1", "b2", ""]
        );
    }

    #[test]
    fn test_push_section_separates() {
        let mut out = vec!["#define X".to_string()];
        push_section(&mut out, vec!["a".to_string()]);
        push_section(&mut out, vec![String::new(), "b".to_string()]);
        push_section(&mut out, Vec::new());
        assert_eq!(out, vec!["#define X", "", "a", "", "b"]);
    }
}

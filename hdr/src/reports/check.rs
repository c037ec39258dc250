//! Check command report data structures.

use std::path::PathBuf;

use hdrgen_codegen::{Diagnostic, lint::LintInfo};
use serde::Serialize;
use serde_json::json;

use super::output::{Output, Report};

/// Entity counts of one category.
#[derive(Debug, Clone, Serialize)]
pub struct CategorySummary {
    pub name: String,
    pub enumerants: usize,
    pub typedefs: usize,
    pub functions: usize,
}

/// Report data from API description linting.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the API description.
    pub api_path: PathBuf,
    pub api_name: String,
    pub target_version: Option<String>,
    pub diagnostics: Vec<Diagnostic>,
    /// Lints that were run.
    pub lints: Vec<LintInfo>,
    /// Categories in first-seen order.
    pub categories: Vec<CategorySummary>,
}

impl CheckReport {
    /// Whether the check passed (no errors).
    pub fn is_valid(&self) -> bool {
        !self.diagnostics.iter().any(|d| d.severity.is_error())
    }

    /// The report as a JSON document.
    pub fn to_json(&self) -> serde_json::Value {
        json!({
            "api": self.api_path.display().to_string(),
            "name": self.api_name,
            "version": self.target_version,
            "valid": self.is_valid(),
            "lints": self.lints,
            "diagnostics": self.diagnostics,
            "categories": self.categories,
        })
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for diag in &self.diagnostics {
            out.diagnostic(&diag.to_string());
        }
        if !self.diagnostics.is_empty() {
            out.newline();
        }

        if !self.is_valid() {
            return;
        }

        out.preformatted(&format!("✓ {} is valid", self.api_path.display()));
        out.newline();
        match &self.target_version {
            Some(version) => out.key_value(&self.api_name, &format!("target {}", version)),
            None => out.preformatted(&self.api_name),
        }

        out.section(&format!("Categories ({})", self.categories.len()));
        for category in &self.categories {
            out.key_value_indented(
                &category.name,
                &format!(
                    "{} enumerants, {} typedefs, {} functions",
                    category.enumerants, category.typedefs, category.functions
                ),
            );
        }
    }
}

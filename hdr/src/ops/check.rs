//! Check operation - API description linting.

use std::path::Path;

use hdrgen_api::Api;
use hdrgen_codegen::Linter;

use crate::reports::{CategorySummary, CheckReport};

/// Execute the check operation.
///
/// Runs every built-in lint and summarizes the API by category.
pub fn check(api: &Api, api_path: &Path) -> CheckReport {
    let linter = Linter::new();
    let categories = api
        .categories()
        .into_iter()
        .map(|(name, stats)| CategorySummary {
            name: if name.is_empty() { "(none)".to_string() } else { name.to_string() },
            enumerants: stats.enumerants,
            typedefs: stats.typedefs,
            functions: stats.functions,
        })
        .collect();

    CheckReport {
        api_path: api_path.to_path_buf(),
        api_name: api.api.name.clone(),
        target_version: api.api.version.map(|v| v.to_string()),
        diagnostics: linter.run(api),
        lints: linter.lint_info(),
        categories,
    }
}

//! Generate operation - header and source files from an API description.

use std::path::Path;

use eyre::{Context, Result, bail};
use hdrgen_api::Api;
use hdrgen_codegen::{Generator, HeaderGenerator, Linter, SourceGenerator};
use hdrgen_core::path_basename;
use tracing::{error, info, warn};

use crate::reports::{GenerateReport, GenerationResult, PreviewFile};

/// Options for the generate operation.
pub struct GenerateOptions<'a> {
    /// Output directory for generated files.
    pub output_dir: &'a Path,
    /// Header file name override.
    pub header: Option<&'a str>,
    /// Source file name override.
    pub source: Option<&'a str>,
    /// Whether to generate the source file next to the header.
    pub with_source: bool,
    /// Whether to preview without writing files.
    pub dry_run: bool,
    /// Comment placed at the top of every generated file.
    pub notice: String,
}

/// Execute the generate operation.
///
/// Lint errors abort generation; lint warnings are carried into the report.
pub fn generate(api: &Api, opts: GenerateOptions<'_>) -> Result<GenerateReport> {
    let diagnostics = Linter::new().run(api);
    let errors = diagnostics.iter().filter(|d| d.severity.is_error()).count();
    if errors > 0 {
        for diag in diagnostics.iter().filter(|d| d.severity.is_error()) {
            error!(lint = %diag.lint, location = ?diag.location, "{}", diag.message);
        }
        bail!(
            "API description has {} error(s); run `hdrgen check` for details",
            errors
        );
    }
    let warnings: Vec<String> = diagnostics
        .iter()
        .filter(|d| d.severity.is_warning())
        .map(|d| {
            warn!(lint = %d.lint, "{}", d.message);
            d.to_string()
        })
        .collect();

    let mut header = HeaderGenerator::new(api).notice(opts.notice.as_str());
    if let Some(name) = opts.header {
        header = header.file_name(name);
    }

    let mut generators: Vec<Box<dyn Generator + '_>> = vec![Box::new(header)];
    if opts.with_source {
        let mut source = SourceGenerator::new(api).notice(opts.notice.as_str());
        if let Some(name) = opts.header {
            source = source.header_name(path_basename(name));
        }
        if let Some(name) = opts.source {
            source = source.file_name(name);
        }
        generators.push(Box::new(source));
    }

    let result = if opts.dry_run {
        let files = generators
            .iter()
            .flat_map(|g| g.preview())
            .map(|f| PreviewFile {
                path: f.path().display().to_string(),
                content: f.content().to_string(),
            })
            .collect();
        GenerationResult::Preview(files)
    } else {
        let mut written = hdrgen_codegen::GenerateResult::default();
        for generator in &generators {
            let result = generator
                .generate(opts.output_dir)
                .wrap_err_with(|| format!("Failed to generate {}", generator.name()))?;
            written.merge(result);
        }
        info!(
            written = written.written.len(),
            unchanged = written.unchanged.len(),
            "generation finished"
        );
        GenerationResult::Written(written)
    };

    Ok(GenerateReport {
        api_name: api.api.name.clone(),
        target_version: api.api.version.map(|v| v.to_string()),
        category_count: api.categories().len(),
        entity_count: api.entity_count(),
        warnings,
        result,
    })
}

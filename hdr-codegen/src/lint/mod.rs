//! Lints over a parsed API description.
//!
//! Parsing already rejects malformed names; lints catch descriptions that
//! parse fine but would generate surprising output.

mod diagnostic;
pub mod lints;

pub use diagnostic::{Diagnostic, Severity};
use hdrgen_api::Api;
pub use lints::{DuplicateNameLint, FutureVersionLint, MissingValueLint};
use serde::Serialize;
use tracing::debug;

/// A lint that checks an API description for issues.
pub trait Lint: Send + Sync {
    /// The name of this lint (e.g. "duplicate-name").
    fn name(&self) -> &'static str;

    /// One-line description of what the lint checks.
    fn description(&self) -> &'static str;

    /// Check the API and add any diagnostics.
    fn check(&self, api: &Api, diagnostics: &mut Vec<Diagnostic>);

    fn info(&self) -> LintInfo {
        LintInfo {
            name: self.name(),
            description: self.description(),
        }
    }
}

/// Name and description of a lint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LintInfo {
    pub name: &'static str,
    pub description: &'static str,
}

/// Runs a set of lints over an API description.
pub struct Linter {
    lints: Vec<Box<dyn Lint>>,
}

impl Linter {
    /// A linter with every built-in lint.
    pub fn new() -> Self {
        Self {
            lints: vec![
                Box::new(DuplicateNameLint),
                Box::new(FutureVersionLint),
                Box::new(MissingValueLint),
            ],
        }
    }

    /// A linter with no lints.
    pub fn empty() -> Self {
        Self { lints: Vec::new() }
    }

    pub fn with_lint(mut self, lint: impl Lint + 'static) -> Self {
        self.lints.push(Box::new(lint));
        self
    }

    pub fn lint_info(&self) -> Vec<LintInfo> {
        self.lints.iter().map(|l| l.info()).collect()
    }

    /// Run every lint and collect their diagnostics in lint order.
    pub fn run(&self, api: &Api) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        for lint in &self.lints {
            let before = diagnostics.len();
            lint.check(api, &mut diagnostics);
            debug!(lint = lint.name(), found = diagnostics.len() - before, "lint finished");
        }
        diagnostics
    }
}

impl Default for Linter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(content: &str) -> Api {
        content.parse().expect("Failed to parse test API")
    }

    #[test]
    fn test_custom_lint() {
        struct AlwaysErrorLint;
        impl Lint for AlwaysErrorLint {
            fn name(&self) -> &'static str {
                "always-error"
            }
            fn description(&self) -> &'static str {
                "Always produces an error"
            }
            fn check(&self, _api: &Api, diagnostics: &mut Vec<Diagnostic>) {
                diagnostics.push(Diagnostic::error(self.name(), "forced error"));
            }
        }

        let api = parse("[api]\nname = \"gl\"\n");
        let diagnostics = Linter::empty().with_lint(AlwaysErrorLint).run(&api);
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].severity.is_error());
    }

    #[test]
    fn test_builtin_lints() {
        let names: Vec<&str> = Linter::new().lint_info().iter().map(|i| i.name).collect();
        assert_eq!(names, vec!["duplicate-name", "future-version", "missing-value"]);
    }

    #[test]
    fn test_clean_api_has_no_diagnostics() {
        let api = parse(
            r#"
            [api]
            name = "gl"
            version = "1.1"

            [[enumerants]]
            name = "GL_ONE"
            value = 1
        "#,
        );
        assert!(Linter::new().run(&api).is_empty());
    }
}

//! Lint for enumerants without a value.

use hdrgen_api::Api;

use crate::lint::{Diagnostic, Lint};

/// Lint that warns about enumerants that would become a bare `#define NAME`.
pub struct MissingValueLint;

impl Lint for MissingValueLint {
    fn name(&self) -> &'static str {
        "missing-value"
    }

    fn description(&self) -> &'static str {
        "Warn about enumerants without a value"
    }

    fn check(&self, api: &Api, diagnostics: &mut Vec<Diagnostic>) {
        for enumerant in api.enumerants.iter().filter(|e| e.value.is_empty()) {
            diagnostics.push(
                Diagnostic::warning(
                    self.name(),
                    format!("enumerant '{}' has no value", enumerant.name),
                )
                .at(format!("enumerants.{}", enumerant.name)),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_value() {
        let api: Api = r#"
            [api]
            name = "gl"

            [[enumerants]]
            name = "GL_ZERO"
            value = 0

            [[enumerants]]
            name = "GL_EMPTY"
        "#
        .parse()
        .expect("Failed to parse test API");

        let mut diagnostics = Vec::new();
        MissingValueLint.check(&api, &mut diagnostics);

        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].message.contains("GL_EMPTY"));
        assert!(diagnostics[0].severity.is_warning());
    }
}

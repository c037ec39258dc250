//! Lint for names declared twice.

use std::collections::HashMap;

use hdrgen_api::Api;

use crate::lint::{Diagnostic, Lint};

/// Lint that errors when an enumerant, typedef or function name repeats.
///
/// Enumerants, typedefs and functions share the C global namespace, so a
/// name may appear only once across all three lists.
pub struct DuplicateNameLint;

impl Lint for DuplicateNameLint {
    fn name(&self) -> &'static str {
        "duplicate-name"
    }

    fn description(&self) -> &'static str {
        "Detect names declared more than once"
    }

    fn check(&self, api: &Api, diagnostics: &mut Vec<Diagnostic>) {
        let names = api
            .enumerants
            .iter()
            .map(|e| ("enumerants", e.name.as_str()))
            .chain(api.typedefs.iter().map(|t| ("typedefs", t.name.as_str())))
            .chain(api.functions.iter().map(|f| ("functions", f.name.as_str())));

        let mut seen: HashMap<&str, &str> = HashMap::new();
        for (list, name) in names {
            if let Some(first) = seen.get(name) {
                diagnostics.push(
                    Diagnostic::error(
                        self.name(),
                        format!("'{}' is already declared in {}", name, first),
                    )
                    .at(format!("{}.{}", list, name)),
                );
            } else {
                seen.insert(name, list);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(content: &str) -> Vec<Diagnostic> {
        let api: Api = content.parse().expect("Failed to parse test API");
        let mut diagnostics = Vec::new();
        DuplicateNameLint.check(&api, &mut diagnostics);
        diagnostics
    }

    #[test]
    fn test_no_duplicates() {
        let diagnostics = check(
            r#"
            [api]
            name = "gl"

            [[enumerants]]
            name = "GL_ONE"

            [[functions]]
            name = "glClear"
        "#,
        );
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_duplicate_across_lists() {
        let diagnostics = check(
            r#"
            [api]
            name = "gl"

            [[typedefs]]
            name = "GLenum"
            type = "unsigned int"

            [[functions]]
            name = "GLenum"

            [[functions]]
            name = "GLenum"
        "#,
        );
        assert_eq!(diagnostics.len(), 2);
        assert!(diagnostics[0].severity.is_error());
        assert_eq!(diagnostics[0].location.as_deref(), Some("functions.GLenum"));
        assert!(diagnostics[0].message.contains("typedefs"));
    }
}

//! Root API description and its configuration sections.

use hdrgen_core::Version;
use indexmap::IndexMap;
use serde::Deserialize;

use crate::{Enumerant, Function, Typedef};

/// Root of an API description file.
#[derive(Debug, Clone, Deserialize)]
pub struct Api {
    /// API metadata
    pub api: ApiConfig,

    /// Output formatting options
    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub enumerants: Vec<Enumerant>,

    #[serde(default)]
    pub typedefs: Vec<Typedef>,

    #[serde(default)]
    pub functions: Vec<Function>,
}

/// The `[api]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ApiConfig {
    /// Prefix for generated symbols and default file names (e.g. `gl`)
    pub name: String,

    /// Target version; entities introduced later are left out
    pub version: Option<Version>,

    /// Include guard macro for the generated header
    pub include_guard: Option<String>,

    /// Headers included by both generated files
    #[serde(default)]
    pub includes: Vec<String>,

    /// Calling convention inserted into function pointer typedefs
    pub call: Option<String>,

    /// Emit C declarations (`void` for empty parameter lists, no default arguments)
    #[serde(default)]
    pub c_mode: bool,
}

impl ApiConfig {
    /// Include guard, derived from the API name when not configured.
    pub fn include_guard(&self) -> String {
        match &self.include_guard {
            Some(guard) => guard.clone(),
            None => format!("__{}_API_H__", self.name.to_uppercase()),
        }
    }
}

/// The `[output]` section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct OutputConfig {
    /// Comment placed before each category, `{}` stands for the category name
    pub banner: String,

    /// Guard opening each category of `#define`s, `{}` stands for the category name
    pub category_guard: Option<String>,

    /// Column-align `#define` names and values within a category
    pub align_defines: bool,

    /// Order category sections alphabetically instead of by first appearance
    pub sort_categories: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            banner: "/* {} */".to_string(),
            category_guard: None,
            align_defines: true,
            sort_categories: false,
        }
    }
}

/// Number of entities of each kind in one category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CategoryStats {
    pub enumerants: usize,
    pub typedefs: usize,
    pub functions: usize,
}

impl CategoryStats {
    pub fn total(&self) -> usize {
        self.enumerants + self.typedefs + self.functions
    }
}

impl Api {
    /// Per-category entity counts, in order of first appearance.
    ///
    /// Uncategorized entities are counted under the empty string.
    pub fn categories(&self) -> IndexMap<&str, CategoryStats> {
        let mut stats: IndexMap<&str, CategoryStats> = IndexMap::new();
        for enumerant in &self.enumerants {
            stats.entry(enumerant.category.as_str()).or_default().enumerants += 1;
        }
        for typedef in &self.typedefs {
            stats.entry(typedef.category.as_str()).or_default().typedefs += 1;
        }
        for function in &self.functions {
            stats.entry(function.category.as_str()).or_default().functions += 1;
        }
        stats
    }

    /// Total number of entities in the description.
    pub fn entity_count(&self) -> usize {
        self.enumerants.len() + self.typedefs.len() + self.functions.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(content: &str) -> Api {
        toml::from_str(content).expect("Failed to parse test API")
    }

    #[test]
    fn test_output_defaults() {
        let api = parse("[api]\nname = \"gl\"");
        assert_eq!(api.output, OutputConfig::default());
        assert_eq!(api.output.banner, "/* {} */");
        assert!(api.output.align_defines);
        assert!(!api.api.c_mode);
    }

    #[test]
    fn test_include_guard() {
        let api = parse("[api]\nname = \"gl\"");
        assert_eq!(api.api.include_guard(), "__GL_API_H__");

        let api = parse("[api]\nname = \"gl\"\ninclude-guard = \"__REGAL_H__\"");
        assert_eq!(api.api.include_guard(), "__REGAL_H__");
    }

    #[test]
    fn test_categories_first_seen_order() {
        let api = parse(
            r#"
            [api]
            name = "gl"

            [[enumerants]]
            name = "GL_B"
            category = "B"

            [[enumerants]]
            name = "GL_A"
            category = "A"

            [[enumerants]]
            name = "GL_B2"
            category = "B"

            [[functions]]
            name = "glA"
            category = "A"

            [[functions]]
            name = "glLoose"
            "#,
        );

        let stats = api.categories();
        let names: Vec<&str> = stats.keys().copied().collect();
        assert_eq!(names, vec!["B", "A", ""]);
        assert_eq!(stats["B"].enumerants, 2);
        assert_eq!(stats["A"].total(), 2);
        assert_eq!(stats[""].functions, 1);
        assert_eq!(api.entity_count(), 5);
    }
}

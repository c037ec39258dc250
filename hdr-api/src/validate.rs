//! Name checks applied while loading an API description.

use std::sync::Arc;

use miette::SourceSpan;

use crate::{Result, error::SourceContext};

/// Where in the description a check is running, plus the text to point into.
///
/// `ctx.push("functions").push("glClear")` scopes the checks for that
/// function's parameters; errors then mention `functions.glClear`.
#[derive(Debug, Clone)]
pub struct ParseContext<'a> {
    source: Arc<SourceContext>,
    path: Vec<&'a str>,
}

impl<'a> ParseContext<'a> {
    pub fn new(src: &str, filename: &str) -> Self {
        Self {
            source: Arc::new(SourceContext::new(src, filename)),
            path: Vec::new(),
        }
    }

    pub fn source_context(&self) -> &SourceContext {
        &self.source
    }

    /// A child context one level deeper.
    pub fn push(&self, segment: &'a str) -> Self {
        let path = self.path.iter().copied().chain([segment]).collect();
        Self {
            source: self.source.clone(),
            path,
        }
    }

    pub fn path_string(&self) -> String {
        self.path.join(".")
    }

    /// `kind`, qualified by the current path when there is one:
    /// `parameter in 'functions.glClear'`.
    pub fn context_for(&self, kind: &str) -> String {
        match self.path.as_slice() {
            [] => kind.to_string(),
            _ => format!("{kind} in '{}'", self.path_string()),
        }
    }

    pub fn find_span(&self, name: &str) -> Option<SourceSpan> {
        find_name_span(self.source.src(), name)
    }

    /// Validate that a name is a usable C identifier.
    pub fn validate_name(&self, name: &str, kind: &str) -> Result<()> {
        if is_c_keyword(name) {
            return Err(self.source.reserved_keyword_error(
                name,
                self.context_for(kind),
                self.find_span(name),
            ));
        }

        if let Some(reason) = validate_identifier(name) {
            return Err(self.source.invalid_identifier_error(
                name,
                self.context_for(kind),
                reason,
                self.find_span(name),
            ));
        }

        Ok(())
    }
}

/// Names the generated C/C++ code cannot use.
pub(crate) const C_KEYWORDS: &[&str] = &[
    // C89/C99
    "auto", "break", "case", "char", "const", "continue", "default", "do", "double", "else",
    "enum", "extern", "float", "for", "goto", "if", "inline", "int", "long", "register",
    "restrict", "return", "short", "signed", "sizeof", "static", "struct", "switch", "typedef",
    "union", "unsigned", "void", "volatile", "while",
    // C++
    "bool", "catch", "class", "const_cast", "delete", "dynamic_cast", "explicit", "false",
    "friend", "mutable", "namespace", "new", "operator", "private", "protected", "public",
    "reinterpret_cast", "static_cast", "template", "this", "throw", "true", "try", "typeid",
    "typename", "using", "virtual",
];

pub(crate) fn is_c_keyword(name: &str) -> bool {
    C_KEYWORDS.contains(&name)
}

/// Locate the value of a `name = "..."` key in the TOML text.
///
/// Matches single or double quotes, with or without spaces around `=`.
/// Returns `None` rather than guess when no exact key is found.
pub(crate) fn find_name_span(src: &str, name: &str) -> Option<SourceSpan> {
    for sep in [" = ", "="] {
        for quote in ['"', '\''] {
            let needle = format!("name{sep}{quote}{name}{quote}");
            if let Some(pos) = src.find(&needle) {
                let start = pos + needle.len() - name.len() - 1;
                return Some((start, name.len()).into());
            }
        }
    }
    None
}

/// Why `name` is not a C identifier, or `None` when it is one.
pub(crate) fn validate_identifier(name: &str) -> Option<&'static str> {
    let Some(first) = name.chars().next() else {
        return Some("name cannot be empty");
    };
    let is_ident_char = |c: char| c == '_' || c.is_ascii_alphanumeric();
    if first.is_ascii_digit() || !is_ident_char(first) {
        Some("name must start with a letter or underscore")
    } else if !name.chars().all(is_ident_char) {
        Some("name must contain only letters, numbers, and underscores")
    } else {
        None
    }
}

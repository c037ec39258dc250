//! Code blocks that are either one multi-line string or a list of lines.

use crate::utils::{indent_lines, indent_text, list_to_string};

/// A block of generated code.
///
/// Transformations over blocks keep the caller's representation: a
/// [`CodeBlock::Text`] goes in and a [`CodeBlock::Text`] comes out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodeBlock {
    /// A single string, usually newline-terminated.
    Text(String),
    /// An ordered list of lines without terminators.
    Lines(Vec<String>),
}

impl CodeBlock {
    /// Whether this block is in line-list form.
    pub fn is_lines(&self) -> bool {
        matches!(self, Self::Lines(_))
    }

    /// Indent every line by `prefix`, trimming trailing whitespace.
    pub fn indent(&self, prefix: &str) -> Self {
        match self {
            Self::Text(text) => Self::Text(indent_text(text, prefix)),
            Self::Lines(lines) => Self::Lines(indent_lines(lines, prefix)),
        }
    }

    /// Consume the block and return it as a single string.
    pub fn into_text(self) -> String {
        match self {
            Self::Text(text) => text,
            Self::Lines(lines) => list_to_string(&lines),
        }
    }

    /// Consume the block and return it as a list of lines.
    pub fn into_lines(self) -> Vec<String> {
        match self {
            Self::Text(text) => text.lines().map(str::to_string).collect(),
            Self::Lines(lines) => lines,
        }
    }
}

impl From<String> for CodeBlock {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&str> for CodeBlock {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<Vec<String>> for CodeBlock {
    fn from(lines: Vec<String>) -> Self {
        Self::Lines(lines)
    }
}

impl From<Vec<&str>> for CodeBlock {
    fn from(lines: Vec<&str>) -> Self {
        Self::Lines(lines.into_iter().map(str::to_string).collect())
    }
}

impl<const N: usize> From<[&str; N]> for CodeBlock {
    fn from(lines: [&str; N]) -> Self {
        Self::Lines(lines.into_iter().map(str::to_string).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indent_preserves_shape() {
        let text = CodeBlock::from("a;\nb;\n").indent("  ");
        assert_eq!(text, CodeBlock::Text("  a;\n  b;\n".to_string()));

        let lines = CodeBlock::from(["a;", "", "b;"]).indent("  ");
        assert_eq!(lines, CodeBlock::from(["  a;", "", "  b;"]));
    }

    #[test]
    fn test_into_text_and_lines() {
        assert_eq!(CodeBlock::from(["a", "b"]).into_text(), "a\nb\n");
        assert_eq!(CodeBlock::Lines(Vec::new()).into_text(), "");
        assert_eq!(CodeBlock::from("a\nb\n").into_lines(), vec!["a", "b"]);
        assert!(CodeBlock::from(["a"]).is_lines());
    }
}

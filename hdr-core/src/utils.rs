//! Line-oriented string helpers used throughout code generation.

/// One level of indentation in generated C/C++ code.
pub const DEFAULT_INDENT: &str = "  ";

/// Prefix every line with `prefix`, trimming trailing whitespace from each result.
pub fn indent_lines<S: AsRef<str>>(lines: &[S], prefix: &str) -> Vec<String> {
    lines
        .iter()
        .map(|line| format!("{}{}", prefix, line.as_ref()).trim_end().to_string())
        .collect()
}

/// Prefix every `\n`-separated line of `code` with `prefix`.
///
/// Blank lines come out empty, so a trailing newline is preserved as-is.
pub fn indent_text(code: &str, prefix: &str) -> String {
    let lines: Vec<&str> = code.split('\n').collect();
    indent_lines(&lines, prefix).join("\n")
}

/// Join lines with newlines and terminate with one trailing newline (e.g. ["a", "b"] -> "a\nb\n")
///
/// An empty list produces an empty string.
pub fn list_to_string<S: AsRef<str>>(lines: &[S]) -> String {
    if lines.is_empty() {
        return String::new();
    }

    let mut result = String::new();
    for line in lines {
        result.push_str(line.as_ref());
        result.push('\n');
    }
    result
}

/// Substitute `value` for the first `{}` in `template` (e.g. "/* {} */" -> "/* GL_VERSION_1_1 */")
///
/// A template without a placeholder is returned unchanged.
pub fn fill_template(template: &str, value: &str) -> String {
    template.replacen("{}", value, 1)
}

/// Collapse runs of spaces and tabs in an expression (e.g. "a  b\t\tc" -> "a b c")
///
/// Leading and trailing whitespace is trimmed first. Collapsing repeats until
/// nothing changes, so the result is stable under repeated application.
pub fn strip_all(expr: &str) -> String {
    let mut current = expr.trim().to_string();
    loop {
        let next = current.replace("  ", " ").replace("\t\t", " ");
        if next == current {
            return next;
        }
        current = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indent_lines() {
        assert_eq!(indent_lines(&["a", "b"], "  "), vec!["  a", "  b"]);
        assert_eq!(indent_lines(&["a", ""], "  "), vec!["  a", ""]);
        assert_eq!(indent_lines(&["x  "], "\t"), vec!["\tx"]);
        assert!(indent_lines::<&str>(&[], "  ").is_empty());
    }

    #[test]
    fn test_indent_text() {
        assert_eq!(indent_text("a\nb", "  "), "  a\n  b");
        assert_eq!(indent_text("return 0;\n", "  "), "  return 0;\n");
        assert_eq!(indent_text("", "  "), "");
        assert_eq!(indent_text("a\n\nb", "// "), "// a\n//\n// b");
    }

    #[test]
    fn test_list_to_string() {
        assert_eq!(list_to_string::<&str>(&[]), "");
        assert_eq!(list_to_string(&["a", "b"]), "a\nb\n");
        assert_eq!(list_to_string(&[""]), "\n");
    }

    #[test]
    fn test_fill_template() {
        assert_eq!(fill_template("/* {} */", "GL_ARB_foo"), "/* GL_ARB_foo */");
        assert_eq!(fill_template("#if 1", "GL_ARB_foo"), "#if 1");
        assert_eq!(fill_template("{} {}", "x"), "x {}");
    }

    #[test]
    fn test_strip_all() {
        assert_eq!(strip_all("a  b\t\tc"), "a b c");
        assert_eq!(strip_all("  defined(FOO)   &&  BAR "), "defined(FOO) && BAR");
        assert_eq!(strip_all("a        b"), "a b");
        assert_eq!(strip_all("a\tb"), "a\tb");
        assert_eq!(strip_all(""), "");
    }

    #[test]
    fn test_strip_all_idempotent() {
        for input in ["a  b\t\tc", "  x \t\t\t y  ", "plain", "a\t\t\t\tb"] {
            let once = strip_all(input);
            assert_eq!(strip_all(&once), once);
        }
    }
}

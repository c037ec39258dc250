//! `#include` lines.

/// An `#include` directive; bare names get angle brackets.
pub fn include_code(header: &str) -> String {
    if header.contains('<') || header.contains('"') {
        format!("#include {header}")
    } else {
        format!("#include <{header}>")
    }
}

/// One newline-terminated `#include` per non-blank header.
pub fn header_code<S: AsRef<str>>(headers: &[S]) -> String {
    headers
        .iter()
        .map(|header| header.as_ref().trim())
        .filter(|header| !header.is_empty())
        .map(|header| include_code(header) + "\n")
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_include_code() {
        assert_eq!(include_code("GL/gl.h"), "#include <GL/gl.h>");
        assert_eq!(include_code("\"RegalUtil.h\""), "#include \"RegalUtil.h\"");
        assert_eq!(include_code("<stddef.h>"), "#include <stddef.h>");
    }

    #[test]
    fn test_header_code_skips_blank() {
        assert_eq!(
            header_code(&[" GL/gl.h ", "", "  ", "\"x.h\""]),
            "#include <GL/gl.h>\n#include \"x.h\"\n"
        );
        assert_eq!(header_code::<&str>(&[]), "");
    }
}

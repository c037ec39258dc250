//! C type spelling.

/// A type followed by the separator a declarator needs.
///
/// Types ending in `*` or `&` bind directly to the name; others get a space.
pub fn type_code(ty: &str) -> String {
    let ty = ty.trim();
    match ty.chars().last() {
        None => String::new(),
        Some('*' | '&') => ty.to_string(),
        Some(_) => format!("{ty} "),
    }
}

/// Position of a trailing array suffix such as `[4]` or `[2][2]`.
fn array_start(ty: &str) -> Option<usize> {
    if ty.ends_with(']') { ty.find('[') } else { None }
}

/// [`type_code`] with any trailing array suffix removed.
pub fn type_sans_array_code(ty: &str) -> String {
    match array_start(ty) {
        Some(start) => type_code(&ty[..start]),
        None => type_code(ty),
    }
}

/// The trailing array suffix of a type, or an empty string.
pub fn type_array_code(ty: &str) -> &str {
    match array_start(ty) {
        Some(start) => ty[start..].trim(),
        None => "",
    }
}

/// Drop one pair of enclosing parentheses (e.g. `(4)` -> `4`).
///
/// Expressions containing `<` or `?` are left alone, since their
/// parentheses usually guard precedence in a `<<` sequence.
pub fn expression_simplify(code: &str) -> &str {
    if code.contains('<') || code.contains('?') {
        return code;
    }
    code.strip_prefix('(')
        .and_then(|inner| inner.strip_suffix(')'))
        .unwrap_or(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_code() {
        assert_eq!(type_code(" GLenum "), "GLenum ");
        assert_eq!(type_code("const GLubyte *"), "const GLubyte *");
        assert_eq!(type_code("Foo &"), "Foo &");
        assert_eq!(type_code("   "), "");
    }

    #[test]
    fn test_array_split() {
        assert_eq!(type_sans_array_code("const GLfloat [4]"), "const GLfloat ");
        assert_eq!(type_array_code("const GLfloat [4]"), "[4]");
        assert_eq!(type_array_code("GLint[2][2]"), "[2][2]");
        assert_eq!(type_sans_array_code("GLint"), "GLint ");
        assert_eq!(type_array_code("GLint"), "");
    }

    #[test]
    fn test_expression_simplify() {
        assert_eq!(expression_simplify("(4)"), "4");
        assert_eq!(expression_simplify("(1<<2)"), "(1<<2)");
        assert_eq!(expression_simplify("(a?b:c)"), "(a?b:c)");
        assert_eq!(expression_simplify("x"), "x");
        assert_eq!(expression_simplify(""), "");
    }
}

//! Wrapping code blocks in preprocessor and C conditionals.

use hdrgen_core::{CodeBlock, DEFAULT_INDENT, strip_all};

/// Wrap `a` (and optionally an `#else` branch `b`) in `#if expr`.
///
/// An empty `expr` returns `a` unchanged and drops `b`. The result has the
/// same shape as `a`; `b` is converted to that shape.
///
/// ```
/// use hdrgen_codegen::wrap_if;
/// use hdrgen_core::CodeBlock;
///
/// let wrapped = wrap_if("FOO", CodeBlock::from(["x"]), Some(CodeBlock::from(["y"])));
/// assert_eq!(
///     wrapped,
///     CodeBlock::from(["#if FOO", "x", "#else /* FOO*/", "y", "#endif /* FOO */"])
/// );
/// ```
pub fn wrap_if(expr: &str, a: CodeBlock, b: Option<CodeBlock>) -> CodeBlock {
    if expr.is_empty() {
        return a;
    }

    let open = format!("#if {expr}");
    let otherwise = format!("#else /* {expr}*/");
    let close = format!("#endif /* {expr} */");

    match a {
        CodeBlock::Lines(a) => {
            let mut lines = vec![open];
            lines.extend(a);
            if let Some(b) = b {
                lines.push(otherwise);
                lines.extend(b.into_lines());
            }
            lines.push(close);
            CodeBlock::Lines(lines)
        }
        CodeBlock::Text(a) => {
            let mut text = format!("{open}\n{a}");
            if let Some(b) = b {
                text.push_str(&otherwise);
                text.push('\n');
                text.push_str(&b.into_text());
            }
            text.push_str(&close);
            text.push('\n');
            CodeBlock::Text(text)
        }
    }
}

/// Wrap `a` (and optionally an `else` branch `b`) in a C `if (expr)` statement.
///
/// `expr` is whitespace-normalized first; if nothing remains, `a` is
/// returned unchanged. Branch bodies are indented by two spaces.
pub fn wrap_c_if(expr: &str, a: CodeBlock, b: Option<CodeBlock>) -> CodeBlock {
    let expr = strip_all(expr);
    if expr.is_empty() {
        return a;
    }

    let is_lines = a.is_lines();
    let a = a.indent(DEFAULT_INDENT);
    let b = b.map(|b| b.indent(DEFAULT_INDENT));

    if is_lines {
        let mut lines = vec![format!("if ({expr})"), "{".to_string()];
        lines.extend(a.into_lines());
        lines.push("}".to_string());
        if let Some(b) = b {
            lines.push(format!("else /* {expr}*/"));
            lines.push("{".to_string());
            lines.extend(b.into_lines());
            lines.push("}".to_string());
        }
        CodeBlock::Lines(lines)
    } else {
        let mut text = format!("if ({expr})\n{{\n{}}}\n", a.into_text());
        if let Some(b) = b {
            text.push_str(&format!("else /* {expr}*/\n{{\n{}}}\n", b.into_text()));
        }
        CodeBlock::Text(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_if_empty_expr_returns_block() {
        let block = CodeBlock::from(["x", "y"]);
        assert_eq!(
            wrap_if("", block.clone(), Some(CodeBlock::from(["z"]))),
            block
        );
    }

    #[test]
    fn test_wrap_if_lines_without_else() {
        assert_eq!(
            wrap_if("defined(__cplusplus)", CodeBlock::from(["extern \"C\" {"]), None),
            CodeBlock::from([
                "#if defined(__cplusplus)",
                "extern \"C\" {",
                "#endif /* defined(__cplusplus) */",
            ])
        );
    }

    #[test]
    fn test_wrap_if_empty_else_still_emitted() {
        let wrapped = wrap_if("A", CodeBlock::from(["x"]), Some(CodeBlock::Lines(Vec::new())));
        assert_eq!(wrapped, CodeBlock::from(["#if A", "x", "#else /* A*/", "#endif /* A */"]));
    }

    #[test]
    fn test_wrap_if_text() {
        let wrapped = wrap_if("A", CodeBlock::from("x;\n"), Some(CodeBlock::from("y;\n")));
        assert_eq!(
            wrapped,
            CodeBlock::from("#if A\nx;\n#else /* A*/\ny;\n#endif /* A */\n")
        );
    }

    #[test]
    fn test_wrap_c_if_lines() {
        let wrapped = wrap_c_if(
            "  a  &&\t\tb ",
            CodeBlock::from(["x();"]),
            Some(CodeBlock::from(["y();"])),
        );
        assert_eq!(
            wrapped,
            CodeBlock::from([
                "if (a && b)",
                "{",
                "  x();",
                "}",
                "else /* a && b*/",
                "{",
                "  y();",
                "}",
            ])
        );
    }

    #[test]
    fn test_wrap_c_if_text() {
        let wrapped = wrap_c_if("ok", CodeBlock::from("return 1;\n"), None);
        assert_eq!(wrapped, CodeBlock::from("if (ok)\n{\n  return 1;\n}\n"));
    }

    #[test]
    fn test_wrap_c_if_blank_expr() {
        let block = CodeBlock::from("x;\n");
        assert_eq!(wrap_c_if(" \t ", block.clone(), None), block);
    }
}

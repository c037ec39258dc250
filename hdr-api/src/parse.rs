//! API description parsing from files and strings.

use std::{path::Path, str::FromStr};

use crate::{Api, Error, ParseContext, Parameter, Result, error::SourceContext};

/// Default filename used in diagnostics for in-memory descriptions.
pub const DEFAULT_API_FILE: &str = "api.toml";

impl FromStr for Api {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_api(s, DEFAULT_API_FILE)
    }
}

impl Api {
    /// Parse an API description file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_api(&content, &path.display().to_string())
    }

    /// Parse an API description from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_api(content, filename)
    }
}

/// Parse an API description from content with the given filename for error reporting.
pub fn parse_api(content: &str, filename: &str) -> Result<Api> {
    let source_ctx = SourceContext::new(content, filename);
    let api: Api = toml::from_str(content).map_err(|e| source_ctx.parse_error(e))?;
    validate_api(&api, content, filename)?;
    Ok(api)
}

/// Validate names after parsing.
fn validate_api(api: &Api, src: &str, filename: &str) -> Result<()> {
    let ctx = ParseContext::new(src, filename);

    ctx.validate_name(&api.api.name, "api")?;
    if let Some(guard) = &api.api.include_guard {
        ctx.validate_name(guard, "include guard")?;
    }

    let enumerants = ctx.push("enumerants");
    for enumerant in &api.enumerants {
        enumerants.validate_name(&enumerant.name, "enumerant")?;
    }

    let typedefs = ctx.push("typedefs");
    for typedef in &api.typedefs {
        typedefs.validate_name(&typedef.name, "typedef")?;
        if typedef.ty.trim().is_empty() {
            return Err(ctx.source_context().validation_error(
                format!("typedef '{}' has an empty type", typedef.name),
                ctx.find_span(&typedef.name),
            ));
        }
        validate_parameters(&typedefs.push(&typedef.name), &typedef.parameters)?;
    }

    let functions = ctx.push("functions");
    for function in &api.functions {
        functions.validate_name(&function.name, "function")?;
        validate_parameters(&functions.push(&function.name), &function.parameters)?;
    }

    Ok(())
}

fn validate_parameters(ctx: &ParseContext<'_>, parameters: &[Parameter]) -> Result<()> {
    for parameter in parameters {
        // Unnamed parameters get a generated name
        if !parameter.name.is_empty() {
            ctx.validate_name(&parameter.name, "parameter")?;
        }
        if parameter.ty.trim().is_empty() {
            return Err(ctx.source_context().validation_error(
                format!(
                    "parameter '{}' in '{}' has an empty type",
                    parameter.name,
                    ctx.path_string()
                ),
                None,
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EnumValue;

    #[test]
    fn test_parse_full_description() {
        let api: Api = r##"
            [api]
            name = "gl"
            version = "1.1"
            includes = ["GL/gl.h"]

            [output]
            category-guard = "#ifndef REGAL_NO_{}"

            [[enumerants]]
            name = "GL_TEXTURE_2D"
            value = "0x0DE1"
            category = "GL_VERSION_1_0"

            [[typedefs]]
            name = "GLenum"
            type = "unsigned int"

            [[functions]]
            name = "glBindTexture"
            version = "1.1"
            category = "GL_VERSION_1_1"
            parameters = [
                { name = "target", type = "GLenum" },
                { name = "texture", type = "GLuint" },
            ]
        "##
        .parse()
        .unwrap();

        assert_eq!(api.api.name, "gl");
        assert_eq!(
            api.output.category_guard.as_deref(),
            Some("#ifndef REGAL_NO_{}")
        );
        assert_eq!(
            api.enumerants[0].value,
            EnumValue::Text("0x0DE1".to_string())
        );
        assert_eq!(api.typedefs[0].ty, "unsigned int");
        assert_eq!(api.functions[0].parameters.len(), 2);
    }

    #[test]
    fn test_parse_error_has_span() {
        let err = Api::from_str("[api]\nname = ").unwrap_err();
        match *err {
            Error::Parse { span, .. } => assert!(span.is_some()),
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_version_is_parse_error() {
        let err = Api::from_str("[api]\nname = \"gl\"\nversion = \"four\"").unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_keyword_function_name() {
        let err = Api::from_str(
            r#"
            [api]
            name = "gl"

            [[functions]]
            name = "delete"
            "#,
        )
        .unwrap_err();

        match *err {
            Error::ReservedKeyword { name, context, span, .. } => {
                assert_eq!(name, "delete");
                assert_eq!(context, "function in 'functions'");
                assert!(span.is_some());
            }
            other => panic!("expected reserved keyword error, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_parameter_name() {
        let err = Api::from_str(
            r#"
            [api]
            name = "gl"

            [[functions]]
            name = "glClear"
            parameters = [{ name = "bad-name", type = "GLbitfield" }]
            "#,
        )
        .unwrap_err();

        match *err {
            Error::InvalidIdentifier { name, context, .. } => {
                assert_eq!(name, "bad-name");
                assert_eq!(context, "parameter in 'functions.glClear'");
            }
            other => panic!("expected invalid identifier error, got {:?}", other),
        }
    }

    #[test]
    fn test_unnamed_parameter_allowed() {
        let api = Api::from_str(
            r#"
            [api]
            name = "gl"

            [[functions]]
            name = "glClear"
            parameters = [{ type = "GLbitfield" }]
            "#,
        )
        .unwrap();
        assert_eq!(api.functions[0].parameters[0].name, "");
    }

    #[test]
    fn test_empty_typedef_type() {
        let err = Api::from_str(
            r#"
            [api]
            name = "gl"

            [[typedefs]]
            name = "GLvoid"
            type = " "
            "#,
        )
        .unwrap_err();
        assert!(matches!(*err, Error::Validation { .. }));
    }

    #[test]
    fn test_from_file_missing() {
        let err = Api::from_file("/nonexistent/api.toml").unwrap_err();
        assert!(matches!(*err, Error::Io { .. }));
    }
}

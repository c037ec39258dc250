//! Entities of an API surface: enumerants, typedefs, functions and parameters.

use std::fmt;

use hdrgen_core::Version;
use serde::Deserialize;

/// A named constant, emitted as a `#define` or an enum member.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Enumerant {
    /// Constant name (e.g. `GL_TEXTURE_2D`)
    pub name: String,

    /// Value, either an integer or verbatim C text such as `0x0DE1`
    #[serde(default)]
    pub value: EnumValue,

    /// Extension or version group the constant belongs to
    #[serde(default)]
    pub category: String,

    /// Version that introduced the constant
    pub version: Option<Version>,

    /// Trailing comment placed after the value
    pub comment: Option<String>,
}

/// The value of an enumerant.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum EnumValue {
    Int(i64),
    Text(String),
}

impl EnumValue {
    /// Whether the value renders to nothing.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Text(text) if text.is_empty())
    }
}

impl Default for EnumValue {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

impl fmt::Display for EnumValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(value) => write!(f, "{}", value),
            Self::Text(text) => f.write_str(text),
        }
    }
}

/// A function parameter.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Parameter {
    /// Parameter name, empty when the declaration leaves it unnamed
    #[serde(default)]
    pub name: String,

    /// C type, possibly with a trailing array suffix (e.g. `const GLfloat[4]`)
    #[serde(rename = "type")]
    pub ty: String,

    /// Default argument for C++ declarations
    pub default: Option<DefaultValue>,
}

/// A default argument value.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum DefaultValue {
    Int(i64),
    Float(f64),
    Text(String),
}

/// A type alias, either a plain typedef or a function pointer typedef.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Typedef {
    /// Name of the new type
    pub name: String,

    /// Aliased type, or the return type for function pointer typedefs
    #[serde(rename = "type")]
    pub ty: String,

    /// Whether this is a function pointer typedef
    #[serde(default)]
    pub function: bool,

    /// Parameters of a function pointer typedef
    #[serde(default)]
    pub parameters: Vec<Parameter>,

    #[serde(default)]
    pub category: String,

    pub version: Option<Version>,
}

/// An API entry point.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Function {
    pub name: String,

    /// Return type
    #[serde(default = "default_ret")]
    pub ret: String,

    #[serde(default)]
    pub parameters: Vec<Parameter>,

    #[serde(default)]
    pub category: String,

    pub version: Option<Version>,

    /// Preprocessor condition guarding the declaration (e.g. `#if REGAL_SYS_WGL`)
    #[serde(default)]
    pub condition: String,
}

fn default_ret() -> String {
    "void".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enum_value_untagged() {
        let int: Enumerant = toml::from_str("name = \"A\"\nvalue = 3").unwrap();
        assert_eq!(int.value, EnumValue::Int(3));

        let text: Enumerant = toml::from_str("name = \"B\"\nvalue = \"0x86b2\"").unwrap();
        assert_eq!(text.value, EnumValue::Text("0x86b2".to_string()));
        assert_eq!(text.value.to_string(), "0x86b2");

        let missing: Enumerant = toml::from_str("name = \"C\"").unwrap();
        assert!(missing.value.is_empty());
        assert_eq!(missing.category, "");
    }

    #[test]
    fn test_default_value_untagged() {
        let param: Parameter =
            serde_json::from_str(r#"{ "name": "x", "type": "int", "default": 4 }"#).unwrap();
        assert_eq!(param.default, Some(DefaultValue::Int(4)));

        let param: Parameter =
            serde_json::from_str(r#"{ "type": "float", "default": 0.5 }"#).unwrap();
        assert_eq!(param.name, "");
        assert_eq!(param.default, Some(DefaultValue::Float(0.5)));
    }

    #[test]
    fn test_function_defaults() {
        let function: Function = toml::from_str("name = \"glFlush\"").unwrap();
        assert_eq!(function.ret, "void");
        assert!(function.parameters.is_empty());
        assert!(function.condition.is_empty());
        assert!(function.version.is_none());
    }
}

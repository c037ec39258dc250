//! Parameter lists in their various declaration forms.
//!
//! Every list function takes `c_mode`: in C an empty parameter list is
//! spelled `void`, in C++ it is left empty.

use std::borrow::Cow;

use hdrgen_api::{DefaultValue, Parameter};

use super::types::{type_array_code, type_sans_array_code};

/// Function pointer spellings the parameter name is spliced into.
const FUNCTION_POINTER_MARKERS: [&str; 2] = ["GLUTCALLBACK *", "CDECL *"];

fn empty_list(c_mode: bool) -> String {
    if c_mode { "void".to_string() } else { String::new() }
}

/// A parameter name, or `arg_<index>` for unnamed parameters.
pub fn param_name_code(name: &str, index: usize) -> Cow<'_, str> {
    if name.is_empty() {
        Cow::Owned(format!("arg_{index}"))
    } else {
        Cow::Borrowed(name)
    }
}

/// `type name` pairs, naming unnamed parameters.
pub fn params_code(parameters: &[Parameter], c_mode: bool) -> String {
    if parameters.is_empty() {
        return empty_list(c_mode);
    }

    parameters
        .iter()
        .enumerate()
        .map(|(i, param)| {
            let marker = FUNCTION_POINTER_MARKERS
                .iter()
                .find(|marker| param.ty.contains(*marker));
            match marker {
                Some(marker) => type_sans_array_code(&param.ty)
                    .replace(marker, &format!("{marker}{}", param.name))
                    .trim()
                    .to_string(),
                None => format!(
                    "{}{}{}",
                    type_sans_array_code(&param.ty),
                    param_name_code(&param.name, i),
                    type_array_code(&param.ty)
                ),
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// `type name` pairs as declared; unnamed parameters stay unnamed.
pub fn params_decl_code(parameters: &[Parameter], c_mode: bool) -> String {
    if parameters.is_empty() {
        return empty_list(c_mode);
    }

    parameters
        .iter()
        .map(declarator)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Parameter types only.
pub fn params_type_code(parameters: &[Parameter], c_mode: bool) -> String {
    if parameters.is_empty() {
        return empty_list(c_mode);
    }

    parameters
        .iter()
        .map(|param| param.ty.trim())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Parameter names only, for forwarding calls.
pub fn params_name_code(parameters: &[Parameter]) -> String {
    parameters
        .iter()
        .enumerate()
        .map(|(i, param)| param_name_code(&param.name, i))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Declarations with C++ default arguments; defaults are dropped in C mode.
pub fn params_default_code(parameters: &[Parameter], c_mode: bool) -> String {
    if parameters.is_empty() {
        return empty_list(c_mode);
    }

    parameters
        .iter()
        .map(|param| {
            let mut code = declarator(param);
            if !c_mode {
                match &param.default {
                    Some(DefaultValue::Int(value)) => code.push_str(&format!(" = {value}")),
                    Some(DefaultValue::Float(value)) => code.push_str(&format!(" = {value:.6}")),
                    Some(DefaultValue::Text(text)) if !text.is_empty() => {
                        code.push_str(&format!(" = {text}"))
                    }
                    _ => {}
                }
            }
            code
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn declarator(param: &Parameter) -> String {
    format!(
        "{}{}{}",
        type_sans_array_code(&param.ty),
        param.name,
        type_array_code(&param.ty)
    )
}

//! Typedef, function pointer typedef and function pointer variable declarations.
//!
//! Each formatter takes the target API version and returns an empty string
//! for entities introduced after it.

use hdrgen_api::{Function, Typedef};
use hdrgen_core::{Version, valid_version};

use super::params::{params_decl_code, params_type_code};
use super::types::type_code;

/// `typedef T Name;` or `typedef R (*Name)(types);`, newline-terminated.
pub fn typedef_code(typedef: &Typedef, target: Option<Version>, c_mode: bool) -> String {
    if !valid_version(typedef.version, target) {
        return String::new();
    }

    if typedef.function {
        format!(
            "typedef {}(*{})({});\n",
            type_code(&typedef.ty),
            typedef.name,
            params_type_code(&typedef.parameters, c_mode)
        )
    } else {
        format!("typedef {}{};\n", type_code(&typedef.ty), typedef.name)
    }
}

/// The `PFN<NAME>PROC` pointer typedef of a function.
///
/// `call` is the calling convention placed inside the declarator.
pub fn func_proto_code(
    function: &Function,
    target: Option<Version>,
    call: Option<&str>,
    c_mode: bool,
) -> String {
    if !valid_version(function.version, target) {
        return String::new();
    }

    let call = match call.filter(|c| !c.is_empty()) {
        Some(call) => format!("{call} "),
        None => String::new(),
    };
    format!(
        "typedef {}({}*{})({});",
        type_code(&function.ret),
        call,
        pfn_name(&function.name),
        params_decl_code(&function.parameters, c_mode)
    )
}

/// A function pointer variable named after the function, newline-terminated.
pub fn func_var_code(function: &Function, target: Option<Version>) -> String {
    if !valid_version(function.version, target) {
        return String::new();
    }

    format!(
        "{}(*{})({});\n",
        type_code(&function.ret),
        function.name,
        params_type_code(&function.parameters, false)
    )
}

/// The pointer typedef name for a function (e.g. `glClear` -> `PFNGLCLEARPROC`).
pub fn pfn_name(name: &str) -> String {
    format!("PFN{}PROC", name.to_uppercase())
}

//! Formatters turning API entities into C/C++ declaration text.

mod decls;
mod enumerants;
mod includes;
mod lookup;
mod params;
mod types;

pub use decls::{func_proto_code, func_var_code, pfn_name, typedef_code};
pub use enumerants::{define_code, enumerant_code, enumerant_list_code, enumeration_query_code};
pub use includes::{header_code, include_code};
pub use lookup::{DEFAULT_VALUE_CAST, pointer_lookup_by_name_code};
pub use params::{
    param_name_code, params_code, params_decl_code, params_default_code, params_name_code,
    params_type_code,
};
pub use types::{expression_simplify, type_array_code, type_code, type_sans_array_code};

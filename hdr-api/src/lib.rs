//! API description model for the hdrgen header generator.
//!
//! An API description is a TOML file listing the enumerants, typedefs and
//! functions of a C API, each tagged with a category (an extension or
//! version group) and optionally the version that introduced it.
//!
//! ```text
//! api.toml (TOML) → hdrgen-api (parsing, validation) → hdrgen-codegen → .h / .cpp
//! ```

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod api;
mod entity;
mod error;
mod parse;
mod validate;

pub use api::{Api, ApiConfig, CategoryStats, OutputConfig};
pub use entity::{DefaultValue, EnumValue, Enumerant, Function, Parameter, Typedef};
pub use error::{Error, Result, SourceContext};
pub use parse::{DEFAULT_API_FILE, parse_api};
pub use validate::ParseContext;

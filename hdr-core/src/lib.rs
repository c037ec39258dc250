//! Core utilities and types for the hdrgen header generator.
//!
//! This crate provides the line-oriented text helpers and small value types
//! shared by the API description loader and the code generators.

mod banner;
mod block;
mod file;
mod utils;
mod version;

// Generated file banner
pub use banner::{auto_generated_code, auto_generated_message, path_basename};
// Code block representation
pub use block::CodeBlock;
// File operations
pub use file::{OutputFile, WriteResult};
// String utilities
pub use utils::{
    DEFAULT_INDENT, fill_template, indent_lines, indent_text, list_to_string, strip_all,
};
pub use version::{Version, valid_version};

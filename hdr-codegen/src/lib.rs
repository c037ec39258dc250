//! Categorized C/C++ code composition for the hdrgen header generator.
//!
//! Generated declarations travel through this crate as [`CategoryLine`]s:
//! lines tagged with the extension or version group they belong to. The
//! pipeline functions group, guard, align and flatten those lines, and the
//! generators assemble them into complete header and source files.
//!
//! # Example
//!
//! ```
//! use hdrgen_codegen::{CategoryLine, Guard, if_category, space_category};
//!
//! let lines = vec![
//!     CategoryLine::new("GL_ARB_foo", "#define GL_FOO 1"),
//!     CategoryLine::new("GL_ARB_bar", "#define GL_BAR 2"),
//! ];
//! let guarded = if_category(lines, &Guard::template("#ifndef NO_{}"));
//! let spaced = space_category(guarded);
//!
//! assert_eq!(spaced.len(), 8);
//! assert_eq!(spaced[0].line, "#ifndef NO_GL_ARB_foo");
//! ```

mod align;
mod category;
mod condition;
pub mod format;
pub mod generator;
pub mod lint;
mod wrap;

// Category pipeline
pub use align::align_define_category;
pub use category::{
    CategoryLine, DEFAULT_BANNER, DEFAULT_GUARD, GUARD_CLOSE, Guard, Run, UnfoldOptions,
    if_category, runs, space_category, unfold_category,
};
// Conditional blocks
pub use condition::{ConditionState, condition_code, condition_lines};
pub use wrap::{wrap_c_if, wrap_if};
// Generators
pub use generator::{GenerateResult, Generator, HeaderGenerator, SourceGenerator};
pub use lint::{Diagnostic, Lint, Linter, Severity};

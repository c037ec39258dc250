//! Built-in lints.

mod duplicate_name;
mod future_version;
mod missing_value;

pub use duplicate_name::DuplicateNameLint;
pub use future_version::FutureVersionLint;
pub use missing_value::MissingValueLint;

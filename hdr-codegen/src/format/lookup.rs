//! Sorted, `NULL`-terminated lookup tables keyed by name.

use hdrgen_core::fill_template;

/// Cast applied to each value when none is given; `{}` stands for the value.
pub const DEFAULT_VALUE_CAST: &str = "reinterpret_cast<void *>({})";

/// A name array and a parallel value array, both sorted by name.
///
/// ```text
/// const char * const names[3] = {
///   "a",
///   "b",
///   NULL
/// };
///
/// const void *values[3] = {
///   reinterpret_cast<void *>(_a),
///   reinterpret_cast<void *>(_b),
///   NULL
/// };
///
/// ```
///
/// Each array is followed by a blank line.
pub fn pointer_lookup_by_name_code<N, V>(
    entries: &[(N, V)],
    (names_var, values_var): (&str, &str),
    value_cast: &str,
) -> Vec<String>
where
    N: AsRef<str>,
    V: AsRef<str>,
{
    let mut entries: Vec<(&str, &str)> = entries
        .iter()
        .map(|(name, value)| (name.as_ref(), value.as_ref()))
        .collect();
    entries.sort_unstable();
    let size = entries.len() + 1;

    let mut code = Vec::with_capacity(2 * size + 6);
    code.push(format!("const char * const {names_var}[{size}] = {{"));
    code.extend(entries.iter().map(|(name, _)| format!("  \"{name}\",")));
    code.extend(["  NULL".to_string(), "};".to_string(), String::new()]);

    code.push(format!("const void *{values_var}[{size}] = {{"));
    code.extend(
        entries
            .iter()
            .map(|(_, value)| format!("  {},", fill_template(value_cast, value))),
    );
    code.extend(["  NULL".to_string(), "};".to_string(), String::new()]);
    code
}

//! Enumerant declarations: `#define`s, enum members and C++ query predicates.

use hdrgen_api::{EnumValue, Enumerant};

/// An enum member: the name padded to `width`, then ` = value` when set.
pub fn enumerant_code(enumerant: &Enumerant, width: usize) -> String {
    let mut line = format!("{:<width$}", enumerant.name);
    match &enumerant.value {
        EnumValue::Int(value) => line.push_str(&format!(" = {value}")),
        EnumValue::Text(text) if !text.is_empty() => line.push_str(&format!(" = {text}")),
        EnumValue::Text(_) => {}
    }
    line
}

/// A `#define NAME VALUE` line with the comment trailing it, if any.
///
/// Fields are separated by single spaces, ready for
/// [`align_define_category`](crate::align_define_category).
pub fn define_code(enumerant: &Enumerant) -> String {
    let mut line = format!("#define {}", enumerant.name);
    if !enumerant.value.is_empty() {
        line.push(' ');
        line.push_str(&enumerant.value.to_string());
    }
    if let Some(comment) = enumerant.comment.as_deref().filter(|c| !c.is_empty()) {
        line.push_str(&format!(" /* {comment} */"));
    }
    line
}

/// The body lines of an enum: comma-separated names with aligned comments.
///
/// `comments` pairs with `names` by index; missing or empty entries produce
/// no comment. Every line is right-trimmed.
pub fn enumerant_list_code<S: AsRef<str>>(names: &[S], comments: &[&str]) -> Vec<String> {
    let name_width = names.iter().map(|n| n.as_ref().len()).max().unwrap_or(0) + 1;
    let comment_width = comments.iter().map(|c| c.len()).max().unwrap_or(0);
    let last = names.len().saturating_sub(1);

    names
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let mut entry = name.as_ref().to_string();
            if i < last {
                entry.push(',');
            }
            let comment = match comments.get(i) {
                Some(comment) if !comment.is_empty() => {
                    format!(" /* {comment:<comment_width$} */")
                }
                _ => String::new(),
            };
            format!("{entry:<name_width$}{comment}").trim_end().to_string()
        })
        .collect()
}

/// An inline C++ predicate testing a value against the matching enumerants.
///
/// ```text
///
/// inline bool isTessProfile(const CGprofile p)
/// {
///   return
///     p==CG_PROFILE_GP5TEP ||
///     p==CG_PROFILE_DS_5_0;
/// }
/// ```
///
/// The parameter is named `t` for `CGtype`, `p` otherwise. The result starts
/// with a newline and has no trailing one.
pub fn enumeration_query_code(
    enumerants: &[Enumerant],
    test: impl Fn(&Enumerant) -> bool,
    name: &str,
    ty: &str,
) -> String {
    let var = if ty == "CGtype" { "t" } else { "p" };
    let mut lines = vec![format!("\ninline bool {name}(const {ty} {var})"), "{".to_string()];

    let subset: Vec<&Enumerant> = enumerants.iter().filter(|e| test(e)).collect();
    match subset.split_last() {
        Some((last, rest)) => {
            let width = subset.iter().map(|e| e.name.len()).max().unwrap_or(0);
            lines.push("  return".to_string());
            for enumerant in rest {
                lines.push(format!("    {var}=={:<width$} ||", enumerant.name));
            }
            lines.push(format!("    {var}=={};", last.name));
        }
        None => lines.push("  return false;".to_string()),
    }

    lines.push("}".to_string());
    lines.join("\n")
}

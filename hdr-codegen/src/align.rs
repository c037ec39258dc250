//! Column alignment of `#define` lines.
//!
//! ```text
//! #define GL_MULTISAMPLE_BIT_3DFX 0x20000000
//! #define GL_MULTISAMPLE_3DFX 0x86b2
//! #define GL_SAMPLES_3DFX 0x86b4
//! ->
//! #define GL_MULTISAMPLE_BIT_3DFX 0x20000000
//! #define GL_MULTISAMPLE_3DFX     0x86b2
//! #define GL_SAMPLES_3DFX         0x86b4
//! ```

use crate::category::{CategoryLine, Run, runs};

/// Extra value-column width reserved when a run carries trailing comments.
const TRAILING_PAD: usize = 4;

/// Align names and values of `#define` lines within each run.
///
/// Lines are split on single spaces into the directive, the name, the value
/// and whatever trails (re-joined with single spaces). Lines with fewer
/// fields are padded with empty ones; the leading token is always rewritten
/// as `#define`. Name and value are padded to one past their column width
/// and the trailing text is appended as is, so padding is kept even when
/// nothing trails. Category and line count are preserved.
pub fn align_define_category(lines: Vec<CategoryLine>) -> Vec<CategoryLine> {
    runs(lines).into_iter().flat_map(align_run).collect()
}

fn align_run(run: Run) -> Vec<CategoryLine> {
    let mut widths = [0usize; 4];
    for line in &run.lines {
        for (width, field) in widths.iter_mut().zip(line.line.split(' ')) {
            *width = (*width).max(field.chars().count());
        }
    }
    if run.lines.len() > 1 && widths[3] > 0 {
        widths[2] += TRAILING_PAD;
    }

    run.lines
        .into_iter()
        .map(|line| {
            let fields: Vec<&str> = line.line.split(' ').collect();
            let name = fields.get(1).copied().unwrap_or_default();
            let value = fields.get(2).copied().unwrap_or_default();
            let trailing = fields.get(3..).map(|rest| rest.join(" ")).unwrap_or_default();
            let aligned = format!(
                "#define {:<name_width$}{:<value_width$}{}",
                name,
                value,
                trailing,
                name_width = widths[1] + 1,
                value_width = widths[2] + 1,
            );
            CategoryLine::new(line.category, aligned)
        })
        .collect()
}

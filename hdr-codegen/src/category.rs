//! Category-tagged lines and the transformations over them.
//!
//! Formatters emit one [`CategoryLine`] per declaration, tagged with the
//! extension or version group it belongs to. The functions here group
//! consecutive lines sharing a category (a *run*) and separate, guard or
//! flatten those runs. None of them sort implicitly: a category that appears
//! in two places forms two runs unless [`unfold_category`] is asked to sort.

use std::{borrow::Cow, cmp::Ordering};

use hdrgen_core::fill_template;

/// Guard line opening a run when no other guard is supplied.
pub const DEFAULT_GUARD: &str = "#if 1";

/// Line closing a guarded run.
pub const GUARD_CLOSE: &str = "#endif";

/// Banner template used by [`unfold_category`] when none is supplied.
pub const DEFAULT_BANNER: &str = "/* {} */";

/// One line of generated code tagged with its category.
///
/// An empty category marks lines that are never grouped or guarded.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CategoryLine {
    pub category: String,
    pub line: String,
}

impl CategoryLine {
    pub fn new(category: impl Into<String>, line: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            line: line.into(),
        }
    }

    /// A line that belongs to no category.
    pub fn uncategorized(line: impl Into<String>) -> Self {
        Self::new(String::new(), line)
    }
}

impl<C: Into<String>, L: Into<String>> From<(C, L)> for CategoryLine {
    fn from((category, line): (C, L)) -> Self {
        Self::new(category, line)
    }
}

/// A maximal sequence of consecutive lines sharing one category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Run {
    pub category: String,
    pub lines: Vec<CategoryLine>,
}

/// Split a sequence into runs, preserving order.
///
/// Every returned run is non-empty.
pub fn runs(lines: Vec<CategoryLine>) -> Vec<Run> {
    let mut runs: Vec<Run> = Vec::new();
    for line in lines {
        match runs.last_mut() {
            Some(run) if run.category == line.category => run.lines.push(line),
            _ => runs.push(Run {
                category: line.category.clone(),
                lines: vec![line],
            }),
        }
    }
    runs
}

/// Insert a blank line, tagged with the closing category, after every run.
pub fn space_category(lines: Vec<CategoryLine>) -> Vec<CategoryLine> {
    let mut result = Vec::with_capacity(lines.len());
    for run in runs(lines) {
        result.extend(run.lines);
        result.push(CategoryLine::new(run.category, ""));
    }
    result
}

/// The line opening a guarded run.
pub enum Guard<'a> {
    /// The same text for every category.
    Fixed(Cow<'a, str>),
    /// Text computed from the category name.
    PerCategory(Box<dyn Fn(&str) -> String + 'a>),
}

impl<'a> Guard<'a> {
    /// A guard computed from each category name.
    pub fn per_category(f: impl Fn(&str) -> String + 'a) -> Self {
        Self::PerCategory(Box::new(f))
    }

    /// A guard filled from a template, `{}` standing for the category name.
    pub fn template(template: &'a str) -> Self {
        Self::per_category(move |category| fill_template(template, category))
    }

    /// The opening line for `category`.
    pub fn open(&self, category: &str) -> String {
        match self {
            Self::Fixed(text) => text.to_string(),
            Self::PerCategory(f) => f(category),
        }
    }
}

impl Default for Guard<'_> {
    fn default() -> Self {
        Self::Fixed(Cow::Borrowed(DEFAULT_GUARD))
    }
}

impl<'a> From<&'a str> for Guard<'a> {
    fn from(text: &'a str) -> Self {
        Self::Fixed(Cow::Borrowed(text))
    }
}

impl From<String> for Guard<'_> {
    fn from(text: String) -> Self {
        Self::Fixed(Cow::Owned(text))
    }
}

impl std::fmt::Debug for Guard<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Fixed(text) => f.debug_tuple("Fixed").field(text).finish(),
            Self::PerCategory(_) => f.write_str("PerCategory(..)"),
        }
    }
}

/// Wrap every run with a non-empty category between `guard` and `#endif`.
///
/// Uncategorized runs pass through unguarded.
pub fn if_category(lines: Vec<CategoryLine>, guard: &Guard<'_>) -> Vec<CategoryLine> {
    let mut result = Vec::with_capacity(lines.len());
    for run in runs(lines) {
        if run.category.is_empty() {
            result.extend(run.lines);
            continue;
        }
        result.push(CategoryLine::new(
            run.category.clone(),
            guard.open(&run.category),
        ));
        result.extend(run.lines);
        result.push(CategoryLine::new(run.category, GUARD_CLOSE));
    }
    result
}

type PairOrder<'a> = Box<dyn Fn(&CategoryLine, &CategoryLine) -> Ordering + 'a>;
type LineOrder<'a> = Box<dyn Fn(&str, &str) -> Ordering + 'a>;

/// Options for [`unfold_category`].
///
/// # Example
///
/// ```
/// use hdrgen_codegen::{CategoryLine, UnfoldOptions, unfold_category};
///
/// let lines = vec![
///     CategoryLine::new("b", "x"),
///     CategoryLine::new("a", "y"),
/// ];
/// let options = UnfoldOptions::new()
///     .banner("// {}")
///     .sort_category(|l, r| l.category.cmp(&r.category));
///
/// assert_eq!(
///     unfold_category(lines, &options),
///     vec!["", "// a", "", "y", "", "// b", "", "x"]
/// );
/// ```
pub struct UnfoldOptions<'a> {
    banner: Cow<'a, str>,
    sort_category: Option<PairOrder<'a>>,
    sort_within: Option<LineOrder<'a>>,
}

impl<'a> UnfoldOptions<'a> {
    pub fn new() -> Self {
        Self {
            banner: Cow::Borrowed(DEFAULT_BANNER),
            sort_category: None,
            sort_within: None,
        }
    }

    /// Banner template, `{}` standing for the category name.
    pub fn banner(mut self, template: impl Into<Cow<'a, str>>) -> Self {
        self.banner = template.into();
        self
    }

    /// Sort the whole sequence before grouping.
    ///
    /// The sort is stable, so lines of one category keep their relative order.
    pub fn sort_category(
        mut self,
        compare: impl Fn(&CategoryLine, &CategoryLine) -> Ordering + 'a,
    ) -> Self {
        self.sort_category = Some(Box::new(compare));
        self
    }

    /// Sort the lines of each group after grouping.
    pub fn sort_within(mut self, compare: impl Fn(&str, &str) -> Ordering + 'a) -> Self {
        self.sort_within = Some(Box::new(compare));
        self
    }
}

impl Default for UnfoldOptions<'_> {
    fn default() -> Self {
        Self::new()
    }
}

/// Flatten a sequence to plain lines, introducing each category with a banner.
///
/// Each categorized group is preceded by a blank line, the banner and another
/// blank line; uncategorized groups are emitted bare.
pub fn unfold_category(mut lines: Vec<CategoryLine>, options: &UnfoldOptions<'_>) -> Vec<String> {
    if let Some(compare) = &options.sort_category {
        lines.sort_by(|l, r| compare(l, r));
    }

    let mut result = Vec::with_capacity(lines.len());
    for run in runs(lines) {
        let mut group: Vec<String> = run.lines.into_iter().map(|l| l.line).collect();
        if let Some(compare) = &options.sort_within {
            group.sort_by(|l, r| compare(l, r));
        }

        if !run.category.is_empty() {
            result.push(String::new());
            result.push(fill_template(&options.banner, &run.category));
            result.push(String::new());
        }
        result.extend(group);
    }
    result
}

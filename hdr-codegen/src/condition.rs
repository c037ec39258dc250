//! Preprocessor condition segments.
//!
//! Consecutive declarations sharing a platform condition (for example
//! `#if defined(_WIN32)`) are emitted inside a single `#if ... #endif`
//! segment. [`ConditionState`] carries the currently open condition between
//! declarations.

use crate::category::GUARD_CLOSE;

/// Emit the code moving from the `current` condition to `next`.
///
/// `next` is trimmed before comparison. Returns the code to emit and the
/// condition that is open afterwards.
pub fn condition_code(current: &str, next: &str) -> (String, String) {
    let next = next.trim();
    if current == next {
        return (String::new(), current.to_string());
    }

    let mut code = String::new();
    if !current.is_empty() {
        code.push_str(GUARD_CLOSE);
        code.push('\n');
    }
    if !next.is_empty() {
        code.push_str(next);
        code.push('\n');
    }
    (code, next.to_string())
}

/// The condition currently open while emitting a sequence of declarations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConditionState {
    current: String,
}

impl ConditionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The open condition, empty when none.
    pub fn current(&self) -> &str {
        &self.current
    }

    pub fn is_open(&self) -> bool {
        !self.current.is_empty()
    }

    /// Move to `next`, returning the code to emit before the next declaration.
    pub fn advance(self, next: &str) -> (String, Self) {
        let (code, current) = condition_code(&self.current, next);
        (code, Self { current })
    }

    /// Close any open condition.
    pub fn finish(self) -> String {
        self.advance("").0
    }
}

/// Wrap blocks of lines in their conditions, merging neighbours that share one.
///
/// Every open condition is closed at the end of the sequence.
pub fn condition_lines<'a, I>(blocks: I) -> Vec<String>
where
    I: IntoIterator<Item = (&'a str, Vec<String>)>,
{
    let mut state = ConditionState::new();
    let mut result = Vec::new();
    for (condition, lines) in blocks {
        let (code, next) = state.advance(condition);
        result.extend(code.lines().map(str::to_string));
        result.extend(lines);
        state = next;
    }
    result.extend(state.finish().lines().map(str::to_string));
    result
}

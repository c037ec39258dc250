//! Diagnostics reported by lints.

use serde::Serialize;

/// Severity level for a diagnostic message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// The API description cannot produce correct output.
    Error,
    /// Output will be produced but probably not as intended.
    Warning,
}

impl Severity {
    pub fn is_error(&self) -> bool {
        *self == Severity::Error
    }

    pub fn is_warning(&self) -> bool {
        *self == Severity::Warning
    }

    fn label(self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A finding about an API description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    /// Lint that reported it, e.g. `duplicate-name`.
    pub lint: String,
    pub message: String,
    /// Dotted path into the description, e.g. `functions.glClear`.
    pub location: Option<String>,
}

impl Diagnostic {
    fn with_severity(severity: Severity, lint: String, message: String) -> Self {
        Self {
            severity,
            lint,
            message,
            location: None,
        }
    }

    pub fn error(lint: impl Into<String>, message: impl Into<String>) -> Self {
        Self::with_severity(Severity::Error, lint.into(), message.into())
    }

    pub fn warning(lint: impl Into<String>, message: impl Into<String>) -> Self {
        Self::with_severity(Severity::Warning, lint.into(), message.into())
    }

    pub fn at(self, location: impl Into<String>) -> Self {
        Self {
            location: Some(location.into()),
            ..self
        }
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let Self {
            severity,
            lint,
            message,
            location,
        } = self;
        match location {
            Some(location) => write!(f, "{severity}[{lint}]: {message} (at {location})"),
            None => write!(f, "{severity}[{lint}]: {message}"),
        }
    }
}

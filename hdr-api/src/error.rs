use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result of loading or validating an API description.
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// An API description's text, kept around so errors can point into it.
#[derive(Debug, Clone)]
pub struct SourceContext {
    named: NamedSource<String>,
}

impl SourceContext {
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        let filename: String = filename.into();
        Self {
            named: NamedSource::new(filename, src.into()),
        }
    }

    /// The raw description text.
    pub fn src(&self) -> &str {
        self.named.inner()
    }

    pub fn filename(&self) -> &str {
        self.named.name()
    }

    /// A fresh copy of the source for attaching to a diagnostic.
    pub fn named_source(&self) -> NamedSource<String> {
        self.named.clone()
    }

    /// Wrap a TOML decoding failure, keeping its span.
    pub fn parse_error(&self, source: toml::de::Error) -> Box<Error> {
        Box::new(Error::Parse {
            span: source.span().map(Into::into),
            src: self.named_source(),
            source,
        })
    }

    pub fn validation_error(
        &self,
        message: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        let message = message.into();
        Box::new(Error::Validation {
            src: self.named_source(),
            span,
            message,
        })
    }

    /// `name` collides with a C or C++ keyword; `context` says what kind of
    /// entity it names (parameter, function, ...).
    pub fn reserved_keyword_error(
        &self,
        name: impl Into<String>,
        context: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        let (name, context) = (name.into(), context.into());
        Box::new(Error::ReservedKeyword {
            src: self.named_source(),
            span,
            name,
            context,
        })
    }

    pub fn invalid_identifier_error(
        &self,
        name: impl Into<String>,
        context: impl Into<String>,
        reason: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        let (name, context, reason) = (name.into(), context.into(), reason.into());
        Box::new(Error::InvalidIdentifier {
            src: self.named_source(),
            span,
            name,
            context,
            reason,
        })
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("cannot read API description '{path}'")]
    #[diagnostic(
        code(hdrgen::io),
        help("pass the API description with '--api <path>'")
    )]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed API description")]
    #[diagnostic(code(hdrgen::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("{message}")]
    #[diagnostic(code(hdrgen::validation_error))]
    Validation {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },

    #[error("{context} '{name}' collides with a C/C++ keyword")]
    #[diagnostic(
        code(hdrgen::reserved_keyword),
        help("rename the {context} '{name}', e.g. '{name}_' or 'p_{name}'")
    )]
    ReservedKeyword {
        #[source_code]
        src: NamedSource<String>,
        #[label("keyword")]
        span: Option<SourceSpan>,
        name: String,
        context: String,
    },

    #[error("'{name}' is not a valid C identifier for a {context}")]
    #[diagnostic(
        code(hdrgen::invalid_identifier),
        help("{reason}; C identifiers match [A-Za-z_][A-Za-z0-9_]*")
    )]
    InvalidIdentifier {
        #[source_code]
        src: NamedSource<String>,
        #[label("not an identifier")]
        span: Option<SourceSpan>,
        name: String,
        context: String,
        reason: String,
    },
}

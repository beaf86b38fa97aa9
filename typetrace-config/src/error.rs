use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for configuration operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(help("run 'typetrace init' to create a configuration file"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse typetrace.toml")]
    #[diagnostic(code(typetrace::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("{message}")]
    #[diagnostic(code(typetrace::validation_error))]
    Validation {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },

    #[error("no tracking plans configured")]
    #[diagnostic(
        code(typetrace::no_tracking_plans),
        help("add a [[tracking_plans]] entry, or run 'typetrace init' to scaffold one")
    )]
    NoTrackingPlans {
        #[source_code]
        src: NamedSource<String>,
    },

    #[error("{phase} script failed: {command}")]
    #[diagnostic(
        code(typetrace::script_error),
        help("the script runs with 'sh -c' in the configuration directory and must exit 0")
    )]
    Script {
        phase: String,
        command: String,
        detail: String,
    },
}

impl Error {
    /// Create a parse error from a toml error with source context
    pub fn parse(source: toml::de::Error, src: &str, filename: &str) -> Box<Self> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            src: NamedSource::new(filename, src.to_string()),
            span,
            source,
        })
    }

    /// Create a validation error with source context
    pub fn validation(message: impl Into<String>, src: &str, filename: &str) -> Box<Self> {
        Box::new(Error::Validation {
            src: NamedSource::new(filename, src.to_string()),
            span: None,
            message: message.into(),
        })
    }

    /// Create the zero-plans error with source context
    pub fn no_tracking_plans(src: &str, filename: &str) -> Box<Self> {
        Box::new(Error::NoTrackingPlans {
            src: NamedSource::new(filename, src.to_string()),
        })
    }

    /// Create a script failure error
    pub fn script(
        phase: impl Into<String>,
        command: impl Into<String>,
        detail: impl Into<String>,
    ) -> Box<Self> {
        Box::new(Error::Script {
            phase: phase.into(),
            command: command.into(),
            detail: detail.into(),
        })
    }
}

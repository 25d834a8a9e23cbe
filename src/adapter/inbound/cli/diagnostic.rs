//! Miette-based error diagnostics for CLI error presentation.
//!
//! Configuration parse errors are rendered with the offending file content
//! and a label pointing at the problem.

use std::path::Path;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Configuration error with source location context.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(vestcalc::config))]
pub struct ConfigDiagnostic {
    /// Human-readable error message.
    pub message: String,

    /// The configuration file content.
    #[source_code]
    pub src: NamedSource<String>,

    /// Byte offset and length of the problematic region.
    #[label("here")]
    pub span: SourceSpan,

    /// Optional help text with suggestions for fixing the error.
    #[help]
    pub help: Option<String>,
}

impl ConfigDiagnostic {
    #[must_use]
    pub fn new(
        message: impl Into<String>,
        name: impl AsRef<str>,
        src: impl Into<String>,
        offset: usize,
        len: usize,
    ) -> Self {
        Self {
            message: message.into(),
            src: NamedSource::new(name, src.into()),
            span: (offset, len).into(),
            help: None,
        }
    }

    #[must_use]
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// Build a diagnostic from a TOML parse failure in `path`.
    ///
    /// Returns `None` when the parser reported no location.
    #[must_use]
    pub fn from_toml(path: &Path, src: &str, err: &toml::de::Error) -> Option<Self> {
        let span = err.span()?;
        Some(
            Self::new(
                err.message(),
                path.display().to_string(),
                src,
                span.start,
                span.len(),
            )
            .with_help("run `vestcalc config init` to generate a documented template"),
        )
    }
}

/// Print a rendered diagnostic to stderr.
pub fn emit(diagnostic: ConfigDiagnostic) {
    eprintln!("{:?}", miette::Report::new(diagnostic));
}

//! Diagnostics produced while extracting styled components.
//!
//! Nothing in the extraction engine aborts a scan. Every failure degrades to
//! fewer or less precise results plus one of these diagnostics, which the CLI
//! layer renders on stderr.

use std::fmt;

use crate::core::SourceContext;

/// Identifier for each diagnostic kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DiagnosticKind {
    /// The file could not be read from disk.
    ReadError,
    /// The file could not be parsed into a syntax tree.
    ParseError,
    /// A definition site whose styled target is not an identifier.
    UnknownComponent,
    /// An object property whose key is not statically known.
    UnknownPropertyKey,
    /// Spread elements, methods, getters and setters inside a style object.
    UnsupportedProperty,
    /// A value collapsed to `$EXPRESSION$` because its shape is not resolvable.
    UnsupportedValue,
    /// The source text of a node could not be sliced from the source map.
    MissingSource,
    /// A shorthand property parsed but could not be expanded.
    ShorthandExpansion,
}

impl DiagnosticKind {
    /// File-level failures mean the whole file contributed no instances.
    pub fn is_file_level(&self) -> bool {
        matches!(self, DiagnosticKind::ReadError | DiagnosticKind::ParseError)
    }
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticKind::ReadError => write!(f, "read-error"),
            DiagnosticKind::ParseError => write!(f, "parse-error"),
            DiagnosticKind::UnknownComponent => write!(f, "unknown-component"),
            DiagnosticKind::UnknownPropertyKey => write!(f, "unknown-key"),
            DiagnosticKind::UnsupportedProperty => write!(f, "unsupported-property"),
            DiagnosticKind::UnsupportedValue => write!(f, "unsupported-value"),
            DiagnosticKind::MissingSource => write!(f, "missing-source"),
            DiagnosticKind::ShorthandExpansion => write!(f, "shorthand-expansion"),
        }
    }
}

/// Where a diagnostic points to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagnosticLocation {
    /// Whole file (read and parse errors).
    File { path: String },
    /// A node inside a file, with its source text.
    Source(SourceContext),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub location: DiagnosticLocation,
    pub message: String,
}

impl Diagnostic {
    pub fn file(kind: DiagnosticKind, path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            location: DiagnosticLocation::File { path: path.into() },
            message: message.into(),
        }
    }

    pub fn source(kind: DiagnosticKind, context: SourceContext, message: impl Into<String>) -> Self {
        Self {
            kind,
            location: DiagnosticLocation::Source(context),
            message: message.into(),
        }
    }

    pub fn file_path(&self) -> &str {
        match &self.location {
            DiagnosticLocation::File { path } => path,
            DiagnosticLocation::Source(context) => context.file_path(),
        }
    }

    pub fn is_file_level(&self) -> bool {
        self.kind.is_file_level()
    }
}

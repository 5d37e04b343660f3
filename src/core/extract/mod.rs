//! Style extraction: turns one source file into its styled-component instances.
//!
//! Extraction never fails. A file that cannot be parsed yields no instances
//! and a single file-level diagnostic; anything the analyzer cannot make sense
//! of inside a definition degrades to an empty name or `$EXPRESSION$` plus a
//! diagnostic pointing at the offending node.

pub mod source_text;
pub mod styled_analyzer;
pub mod value_resolver;


pub use source_text::SourceText;
pub use styled_analyzer::StyledAnalyzer;
pub use value_resolver::ValueResolver;

use crate::core::Instance;
use crate::core::parsers::jsx::parse_jsx_source;
use crate::issues::{Diagnostic, DiagnosticKind};

/// Everything extracted from a single file.
#[derive(Debug, Default)]
pub struct FileExtraction {
    /// Definitions in pre-order traversal order.
    pub instances: Vec<Instance>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Parse `source` and collect all styled-component definitions in it.
///
/// `file_path` picks the parser syntax (see `parse_jsx_source`) and is
/// recorded as the `filename` of every instance.
pub fn analyze_source(source: &str, file_path: &str) -> FileExtraction {
    let parsed = match parse_jsx_source(source.to_string(), file_path) {
        Ok(parsed) => parsed,
        Err(e) => {
            return FileExtraction {
                instances: Vec::new(),
                diagnostics: vec![Diagnostic::file(
                    DiagnosticKind::ParseError,
                    file_path,
                    e.to_string(),
                )],
            };
        }
    };

    let source_text = SourceText::new(file_path, &parsed.source_map);
    StyledAnalyzer::new(source_text).analyze(&parsed.module)
}

/// Instances only; diagnostics are discarded.
pub fn extract(source: &str, file_path: &str) -> Vec<Instance> {
    analyze_source(source, file_path).instances
}

/// Pure position information in source code files (TSX/JSX/TS/JS).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct SourceLocation {
    pub file_path: String,
    pub line: usize,
    pub col: usize,
}

impl SourceLocation {
    pub fn new(file_path: impl Into<String>, line: usize, col: usize) -> Self {
        Self {
            file_path: file_path.into(),
            line,
            col,
        }
    }
}

/// Position with the source text of the offending node.
///
/// Used by diagnostics so the reporter can show what the analyzer could not
/// make sense of.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceContext {
    pub location: SourceLocation,
    /// Source text of the node, collapsed to a single line.
    pub snippet: String,
}

impl SourceContext {
    pub fn new(location: SourceLocation, snippet: &str) -> Self {
        Self {
            location,
            snippet: collapse_whitespace(snippet),
        }
    }

    // Convenience accessors
    pub fn file_path(&self) -> &str {
        &self.location.file_path
    }

    pub fn line(&self) -> usize {
        self.location.line
    }

    pub fn col(&self) -> usize {
        self.location.col
    }
}

/// Maximum number of characters kept from a node's source text.
const MAX_SNIPPET_CHARS: usize = 80;

fn collapse_whitespace(text: &str) -> String {
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.chars().count() <= MAX_SNIPPET_CHARS {
        return collapsed;
    }
    let mut truncated: String = collapsed.chars().take(MAX_SNIPPET_CHARS).collect();
    truncated.push('…');
    truncated
}

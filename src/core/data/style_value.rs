//! Normalized semantic value of a style declaration.
//!
//! Every right-hand side found in source code is collapsed into one of four
//! shapes so that identical styling intent aggregates under identical keys:
//!
//! ```ignore
//! { color: 'salmon' }                         → StyleValue::Str("salmon")
//! { zIndex: 10 }                              → StyleValue::Number { value: 10.0, raw: "10" }
//! { width: SIZE }                             → StyleValue::Reference("SIZE")          "(SIZE)"
//! { color: p => p.theme.colors.primary }      → StyleValue::Reference("theme.colors.primary")
//! { color: p => p.active ? 'red' : 'blue' }   → StyleValue::Expression                "$EXPRESSION$"
//! ```

use std::fmt;

use serde::{Serialize, Serializer};

/// Placeholder for values too complex to represent as a stable token.
pub const EXPRESSION_SENTINEL: &str = "$EXPRESSION$";

#[derive(Debug, Clone, PartialEq)]
pub enum StyleValue {
    /// A string literal, verbatim. Also used for longhand values produced by
    /// shorthand expansion.
    Str(String),

    /// A numeric literal. `raw` keeps the source spelling (`1.50`, `0x10`).
    Number { value: f64, raw: String },

    /// A resolvable but non-literal expression: a variable name or a theme
    /// path with the props parameter stripped. Rendered as `(path)`.
    Reference(String),

    /// Anything that cannot be rendered as a path. Rendered as `$EXPRESSION$`.
    Expression,
}

impl StyleValue {
    /// Build a reference token, collapsing to `Expression` when the text
    /// contains characters that would corrupt regenerated CSS text.
    pub fn reference(text: impl Into<String>) -> Self {
        let text = text.into();
        if text.contains(':') || text.contains('`') {
            StyleValue::Expression
        } else {
            StyleValue::Reference(text)
        }
    }

    /// Classify a declaration value read from template CSS text.
    ///
    /// Interpolations were spliced into the CSS as their rendered tokens, so a
    /// value that is exactly `$EXPRESSION$` or a single `(path)` token maps back
    /// to the value it came from. Anything else stays verbatim text.
    pub fn from_css_text(text: impl Into<String>) -> Self {
        let text = text.into();
        if text == EXPRESSION_SENTINEL {
            return StyleValue::Expression;
        }
        let path = text
            .strip_prefix('(')
            .and_then(|rest| rest.strip_suffix(')'))
            .filter(|path| {
                !path.is_empty()
                    && !path.contains(|c: char| c.is_whitespace() || matches!(c, '(' | ')' | ',' | ':' | '`'))
            });
        match path {
            Some(path) => StyleValue::Reference(path.to_string()),
            None => StyleValue::Str(text),
        }
    }
}

impl fmt::Display for StyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleValue::Str(s) => f.write_str(s),
            StyleValue::Number { raw, .. } => f.write_str(raw),
            StyleValue::Reference(path) => write!(f, "({})", path),
            StyleValue::Expression => f.write_str(EXPRESSION_SENTINEL),
        }
    }
}

impl Serialize for StyleValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            StyleValue::Number { value, .. } => serializer.serialize_f64(*value),
            other => serializer.collect_str(other),
        }
    }
}

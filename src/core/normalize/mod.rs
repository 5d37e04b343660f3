//! Property normalization: kebab-case names and longhand expansion.
//!
//! ```ignore
//! fontWeight: 'bold'   → font-weight: bold
//! margin: 0            → margin-top: 0, margin-right: 0, margin-bottom: 0, margin-left: 0
//! border: 1px solid    → border: 1px solid          (never expanded)
//! padding: (SIZE)      → padding: (SIZE)            (value not parsable)
//! ```

pub mod shorthand;

pub use shorthand::{Expansion, ShorthandError, expand_shorthand};

use crate::core::{StyleDeclaration, StyleValue};
use crate::utils::kebab_case;

/// Shorthands that are always kept as written. Their values fold width,
/// style, color and sides together, and expanding them would add longhands
/// the author never wrote.
pub const NON_EXPANDABLE: &[&str] = &[
    "border",
    "border-width",
    "border-style",
    "border-color",
    "border-top",
    "border-right",
    "border-bottom",
    "border-left",
    "border-radius",
    "outline",
];

/// Normalize one object-style declaration into zero or more longhand
/// declarations. The key is kebab-cased first.
///
/// Returns an error only when a value parsed as a shorthand but its
/// components could not be spread over the longhands. Callers drop the
/// declaration in that case.
pub fn normalize(raw_name: &str, value: StyleValue) -> Result<Vec<StyleDeclaration>, ShorthandError> {
    expand(kebab_case(raw_name), value)
}

/// Like [`normalize`], for a property name written in CSS text. The name is
/// kept exactly as written.
pub fn normalize_css(name: &str, value: StyleValue) -> Result<Vec<StyleDeclaration>, ShorthandError> {
    expand(name.to_string(), value)
}

fn expand(name: String, value: StyleValue) -> Result<Vec<StyleDeclaration>, ShorthandError> {
    if NON_EXPANDABLE.contains(&name.as_str()) {
        return Ok(vec![StyleDeclaration::new(name, value)]);
    }

    match expand_shorthand(&name, &value.to_string())? {
        Expansion::Longhands(longhands) => Ok(longhands
            .into_iter()
            .map(|(name, text)| StyleDeclaration::new(name, StyleValue::Str(text)))
            .collect()),
        Expansion::NotApplicable => Ok(vec![StyleDeclaration::new(name, value)]),
    }
}

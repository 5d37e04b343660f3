use serde::Serialize;

use super::StyleValue;
use crate::utils::is_component_name;

/// A single CSS declaration of a styled component, already normalized:
/// the name is kebab-case and shorthands are expanded.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StyleDeclaration {
    pub name: String,
    pub value: StyleValue,
}

impl StyleDeclaration {
    pub fn new(name: impl Into<String>, value: StyleValue) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// One styled-component definition found in one file.
///
/// Created once per definition site during a file scan and never mutated
/// afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Instance {
    pub filename: String,
    /// Line of the definition site (1-indexed).
    pub line: usize,
    /// Column of the definition site (1-indexed).
    pub column: usize,
    /// Element tag (`div`) or component identifier (`Text`). Empty when
    /// the target could not be determined.
    pub component: String,
    /// Declarations in source order. Duplicates are preserved.
    pub styles: Vec<StyleDeclaration>,
}

impl Instance {
    pub fn is_component(&self) -> bool {
        is_component_name(&self.component)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_serialize_instance() {
        let instance = Instance {
            filename: "src/a.js".to_string(),
            line: 2,
            column: 15,
            component: "p".to_string(),
            styles: vec![StyleDeclaration::new(
                "color",
                StyleValue::Reference("theme.colors.primary".to_string()),
            )],
        };

        let json = serde_json::to_string(&instance).unwrap();
        assert_eq!(
            json,
            r#"{"filename":"src/a.js","line":2,"column":15,"component":"p","styles":[{"name":"color","value":"(theme.colors.primary)"}]}"#
        );
        assert!(!instance.is_component());
    }
}

use std::sync::LazyLock;

use lightningcss::traits::Parse;
use lightningcss::values::color::CssColor;
use regex::Regex;

use crate::core::stats::{Aggregate, CountRow, count_rows};
use crate::core::{Instance, StyleDeclaration};

const COLOR_PROPERTIES: &[&str] = &["color", "background-color", "border-color", "outline-color"];

const SPACING_PROPERTIES: &[&str] = &[
    "margin-top",
    "margin-right",
    "margin-bottom",
    "margin-left",
    "padding-top",
    "padding-right",
    "padding-bottom",
    "padding-left",
];

/// A single CSS length: a number with an absolute, relative or percentage
/// unit, or a bare `0`.
static LENGTH_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[+-]?(?:\d+(?:\.\d+)?|\.\d+)(?:px|em|rem|ex|ch|vw|vh|vmin|vmax|%|in|cm|mm|pt|pc)|[+-]?0)$")
        .unwrap()
});

fn declarations(instances: &[Instance]) -> impl Iterator<Item = &StyleDeclaration> {
    instances.iter().flat_map(|i| i.styles.iter())
}

pub fn is_color(value: &str) -> bool {
    CssColor::parse_string(value).is_ok()
}

pub fn is_length(value: &str) -> bool {
    LENGTH_REGEX.is_match(value)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ElementsStats;

impl Aggregate for ElementsStats {
    fn name(&self) -> &'static str {
        "elements"
    }

    fn title(&self) -> &'static str {
        "Elements"
    }

    fn aggregate(&self, instances: &[Instance]) -> Vec<CountRow> {
        count_rows(
            instances
                .iter()
                .filter(|i| !i.is_component())
                .map(|i| i.component.as_str()),
        )
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ComponentsStats;

impl Aggregate for ComponentsStats {
    fn name(&self) -> &'static str {
        "components"
    }

    fn title(&self) -> &'static str {
        "Components"
    }

    fn aggregate(&self, instances: &[Instance]) -> Vec<CountRow> {
        count_rows(
            instances
                .iter()
                .filter(|i| i.is_component())
                .map(|i| i.component.as_str()),
        )
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PropertiesStats;

impl Aggregate for PropertiesStats {
    fn name(&self) -> &'static str {
        "properties"
    }

    fn title(&self) -> &'static str {
        "Properties"
    }

    fn aggregate(&self, instances: &[Instance]) -> Vec<CountRow> {
        count_rows(declarations(instances).map(|d| d.name.as_str()))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValuesStats;

impl Aggregate for ValuesStats {
    fn name(&self) -> &'static str {
        "values"
    }

    fn title(&self) -> &'static str {
        "Values"
    }

    fn aggregate(&self, instances: &[Instance]) -> Vec<CountRow> {
        count_rows(declarations(instances).map(|d| d.value.to_string()))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColorsStats;

impl Aggregate for ColorsStats {
    fn name(&self) -> &'static str {
        "colors"
    }

    fn title(&self) -> &'static str {
        "Colors"
    }

    fn aggregate(&self, instances: &[Instance]) -> Vec<CountRow> {
        count_rows(
            declarations(instances)
                .filter(|d| COLOR_PROPERTIES.contains(&d.name.as_str()))
                .map(|d| d.value.to_string())
                .filter(|value| is_color(value)),
        )
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpacingStats;

impl Aggregate for SpacingStats {
    fn name(&self) -> &'static str {
        "spacing"
    }

    fn title(&self) -> &'static str {
        "Spacing"
    }

    fn aggregate(&self, instances: &[Instance]) -> Vec<CountRow> {
        count_rows(
            declarations(instances)
                .filter(|d| SPACING_PROPERTIES.contains(&d.name.as_str()))
                .map(|d| d.value.to_string())
                .filter(|value| is_length(value)),
        )
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ComponentPropertiesStats;

impl Aggregate for ComponentPropertiesStats {
    fn name(&self) -> &'static str {
        "component-properties"
    }

    fn title(&self) -> &'static str {
        "Component properties"
    }

    fn aggregate(&self, instances: &[Instance]) -> Vec<CountRow> {
        count_rows(instances.iter().filter(|i| i.is_component()).flat_map(|i| {
            i.styles
                .iter()
                .map(move |d| format!("<{}> {}", i.component, d.name))
        }))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ComponentValuesStats;

impl Aggregate for ComponentValuesStats {
    fn name(&self) -> &'static str {
        "component-values"
    }

    fn title(&self) -> &'static str {
        "Component values"
    }

    fn aggregate(&self, instances: &[Instance]) -> Vec<CountRow> {
        count_rows(instances.iter().filter(|i| i.is_component()).flat_map(|i| {
            i.styles
                .iter()
                .map(move |d| format!("<{}> {} = {}", i.component, d.name, d.value))
        }))
    }
}

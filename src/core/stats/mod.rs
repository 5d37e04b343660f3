//! Aggregate statistics over extracted instances.
//!
//! Every table is a list of `(key, count)` rows. Rows are ordered by count,
//! highest first, with ties broken by key so output is stable.

pub mod aggregators;

use std::collections::HashMap;

use enum_dispatch::enum_dispatch;
use serde::Serialize;

pub use aggregators::{
    ColorsStats, ComponentPropertiesStats, ComponentValuesStats, ComponentsStats, ElementsStats,
    PropertiesStats, SpacingStats, ValuesStats,
};

use crate::core::Instance;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountRow {
    pub key: String,
    pub count: usize,
}

impl CountRow {
    pub fn new(key: impl Into<String>, count: usize) -> Self {
        Self {
            key: key.into(),
            count,
        }
    }
}

/// One statistics table.
#[enum_dispatch]
pub trait Aggregate {
    /// Table identifier, as accepted on the command line.
    fn name(&self) -> &'static str;

    /// Heading shown above the table.
    fn title(&self) -> &'static str;

    fn aggregate(&self, instances: &[Instance]) -> Vec<CountRow>;
}

#[enum_dispatch(Aggregate)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Aggregator {
    Elements(ElementsStats),
    Components(ComponentsStats),
    Properties(PropertiesStats),
    Values(ValuesStats),
    Colors(ColorsStats),
    Spacing(SpacingStats),
    ComponentProperties(ComponentPropertiesStats),
    ComponentValues(ComponentValuesStats),
}

impl Aggregator {
    /// All tables, in display order.
    pub fn all() -> Vec<Aggregator> {
        vec![
            ElementsStats.into(),
            ComponentsStats.into(),
            PropertiesStats.into(),
            ValuesStats.into(),
            ColorsStats.into(),
            SpacingStats.into(),
            ComponentPropertiesStats.into(),
            ComponentValuesStats.into(),
        ]
    }
}

/// Count occurrences of each key and sort into rows.
pub fn count_rows<I, K>(keys: I) -> Vec<CountRow>
where
    I: IntoIterator<Item = K>,
    K: Into<String>,
{
    let mut counts: HashMap<String, usize> = HashMap::new();
    for key in keys {
        *counts.entry(key.into()).or_default() += 1;
    }

    let mut rows: Vec<CountRow> = counts
        .into_iter()
        .map(|(key, count)| CountRow { key, count })
        .collect();
    rows.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.key.cmp(&b.key)));
    rows
}

/// Average number of declarations per scanned file.
pub fn styles_per_module(instances: &[Instance], file_count: usize) -> f64 {
    if file_count == 0 {
        return 0.0;
    }
    let declarations: usize = instances.iter().map(|i| i.styles.len()).sum();
    declarations as f64 / file_count as f64
}

/// Headline numbers for a scan.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub files: usize,
    pub instances: usize,
    pub elements: usize,
    pub components: usize,
    pub declarations: usize,
    pub styles_per_module: f64,
}

impl Summary {
    pub fn new(instances: &[Instance], file_count: usize) -> Self {
        let components = instances.iter().filter(|i| i.is_component()).count();
        Self {
            files: file_count,
            instances: instances.len(),
            elements: instances.len() - components,
            components,
            declarations: instances.iter().map(|i| i.styles.len()).sum(),
            styles_per_module: styles_per_module(instances, file_count),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::core::stats::*;
    use crate::core::{StyleDeclaration, StyleValue};

    fn instance(component: &str, styles: &[(&str, &str)]) -> Instance {
        Instance {
            filename: "test.js".to_string(),
            line: 1,
            column: 1,
            component: component.to_string(),
            styles: styles
                .iter()
                .map(|(name, value)| StyleDeclaration::new(*name, StyleValue::Str(value.to_string())))
                .collect(),
        }
    }

    #[test]
    fn test_count_rows_ordering() {
        let rows = count_rows(["b", "a", "c", "a", "b", "a"]);
        assert_eq!(
            rows,
            vec![
                CountRow::new("a", 3),
                CountRow::new("b", 2),
                CountRow::new("c", 1),
            ]
        );
    }

    #[test]
    fn test_count_rows_ties_sorted_by_key() {
        let rows = count_rows(["z", "m", "a"]);
        let keys: Vec<_> = rows.iter().map(|r| r.key.as_str()).collect();
        assert_eq!(keys, vec!["a", "m", "z"]);
    }

    #[test]
    fn test_styles_per_module() {
        let instances = vec![
            instance("div", &[("color", "red"), ("margin-top", "0")]),
            instance("Box", &[("color", "blue")]),
        ];
        assert_eq!(styles_per_module(&instances, 2), 1.5);
        assert_eq!(styles_per_module(&instances, 0), 0.0);
        assert_eq!(styles_per_module(&[], 3), 0.0);
    }

    #[test]
    fn test_summary() {
        let instances = vec![
            instance("div", &[("color", "red")]),
            instance("Box", &[("color", "blue"), ("padding-top", "4px")]),
            instance("Box", &[]),
        ];
        let summary = Summary::new(&instances, 4);
        assert_eq!(summary.files, 4);
        assert_eq!(summary.instances, 3);
        assert_eq!(summary.elements, 1);
        assert_eq!(summary.components, 2);
        assert_eq!(summary.declarations, 3);
        assert_eq!(summary.styles_per_module, 0.75);
    }

    #[test]
    fn test_all_tables_have_unique_names() {
        let names: Vec<_> = Aggregator::all().iter().map(|a| a.name()).collect();
        assert_eq!(
            names,
            vec![
                "elements",
                "components",
                "properties",
                "values",
                "colors",
                "spacing",
                "component-properties",
                "component-values",
            ]
        );
    }
}

use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;

use super::super::{
    args::{OutputFormat, StatsCommand},
    exit_status::ExitStatus,
    report,
};
use crate::core::{
    Instance, ScanContext,
    stats::{
        Aggregate, Aggregator, ColorsStats, ComponentPropertiesStats, ComponentValuesStats,
        ComponentsStats, CountRow, ElementsStats, PropertiesStats, SpacingStats, Summary,
        ValuesStats,
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum StatTable {
    Elements,
    Components,
    Properties,
    Values,
    Colors,
    Spacing,
    ComponentProperties,
    ComponentValues,
}

impl From<StatTable> for Aggregator {
    fn from(table: StatTable) -> Self {
        match table {
            StatTable::Elements => ElementsStats.into(),
            StatTable::Components => ComponentsStats.into(),
            StatTable::Properties => PropertiesStats.into(),
            StatTable::Values => ValuesStats.into(),
            StatTable::Colors => ColorsStats.into(),
            StatTable::Spacing => SpacingStats.into(),
            StatTable::ComponentProperties => ComponentPropertiesStats.into(),
            StatTable::ComponentValues => ComponentValuesStats.into(),
        }
    }
}

/// One rendered table: the top rows plus the number of distinct keys.
#[derive(Debug, Serialize)]
pub struct TableReport {
    pub name: &'static str,
    pub title: &'static str,
    pub total: usize,
    pub rows: Vec<CountRow>,
}

#[derive(Debug, Serialize)]
pub struct StatsReport {
    pub summary: Summary,
    pub tables: Vec<TableReport>,
}

/// Build the report for `aggregators`, keeping at most `top` rows per table.
pub fn build_report(
    aggregators: &[Aggregator],
    instances: &[Instance],
    file_count: usize,
    top: usize,
) -> StatsReport {
    let tables = aggregators
        .iter()
        .map(|aggregator| {
            let mut rows = aggregator.aggregate(instances);
            let total = rows.len();
            rows.truncate(top);
            TableReport {
                name: aggregator.name(),
                title: aggregator.title(),
                total,
                rows,
            }
        })
        .collect();

    StatsReport {
        summary: Summary::new(instances, file_count),
        tables,
    }
}

pub fn stats(cmd: StatsCommand) -> Result<ExitStatus> {
    let ctx = ScanContext::new(&cmd.common, &cmd.patterns)?;
    let top = cmd.top.unwrap_or(ctx.config.top);

    let aggregators: Vec<Aggregator> = if cmd.tables.is_empty() {
        Aggregator::all()
    } else {
        let mut tables: Vec<StatTable> = Vec::new();
        for table in cmd.tables {
            if !tables.contains(&table) {
                tables.push(table);
            }
        }
        tables.into_iter().map(Aggregator::from).collect()
    };

    let output = ctx.output();
    let stats_report = build_report(&aggregators, &output.instances, ctx.files.len(), top);

    match cmd.common.format {
        OutputFormat::Json => report::print_json(&stats_report)?,
        OutputFormat::Text => {
            report::print_stats(&stats_report);
            report::print_success(stats_report.summary.instances, ctx.files.len());
        }
    }
    report::print_diagnostics(&output.diagnostics, ctx.verbose);

    Ok(ExitStatus::Success)
}

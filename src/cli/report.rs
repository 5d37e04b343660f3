//! Report formatting and printing utilities.
//!
//! Instances and statistics go to stdout, diagnostics to stderr in
//! cargo-style format. Separate from core logic so the engine can be used as
//! a library.

use std::io::{self, Write};

use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;
use unicode_width::UnicodeWidthStr;

use super::commands::stats::StatsReport;
use crate::core::Instance;
use crate::issues::{Diagnostic, DiagnosticLocation};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Shown in place of a component name that could not be determined.
const UNKNOWN_COMPONENT: &str = "(unknown)";

/// Print every instance with its declarations.
pub fn print_instances(instances: &[Instance]) {
    print_instances_to(instances, &mut io::stdout().lock());
}

pub fn print_instances_to<W: Write>(instances: &[Instance], writer: &mut W) {
    for instance in instances {
        let component = if instance.component.is_empty() {
            UNKNOWN_COMPONENT
        } else {
            instance.component.as_str()
        };
        let _ = writeln!(
            writer,
            "{}  {}",
            component.bold(),
            format!(
                "{}:{}:{}",
                instance.filename, instance.line, instance.column
            )
            .dimmed()
        );

        if instance.styles.is_empty() {
            let _ = writeln!(writer, "  {}", "(no declarations)".dimmed());
        }

        let name_width = instance
            .styles
            .iter()
            .map(|d| UnicodeWidthStr::width(d.name.as_str()))
            .max()
            .unwrap_or(0);
        for declaration in &instance.styles {
            let padding = name_width - UnicodeWidthStr::width(declaration.name.as_str());
            let _ = writeln!(
                writer,
                "  {}{:padding$}  {}",
                declaration.name.cyan(),
                "",
                declaration.value.to_string().magenta(),
                padding = padding
            );
        }

        let _ = writeln!(writer);
    }
}

/// Print statistics tables and the per-module average.
pub fn print_stats(report: &StatsReport) {
    print_stats_to(report, &mut io::stdout().lock());
}

pub fn print_stats_to<W: Write>(report: &StatsReport, writer: &mut W) {
    for table in &report.tables {
        let _ = writeln!(
            writer,
            "{} {}",
            table.title.bold(),
            format!("({})", table.total).dimmed()
        );

        if table.rows.is_empty() {
            let _ = writeln!(writer, "  {}", "(none)".dimmed());
        }

        let key_width = table
            .rows
            .iter()
            .map(|row| UnicodeWidthStr::width(row.key.as_str()))
            .max()
            .unwrap_or(0);
        let count_width = table
            .rows
            .iter()
            .map(|row| row.count.to_string().len())
            .max()
            .unwrap_or(1);

        for row in &table.rows {
            let padding = key_width - UnicodeWidthStr::width(row.key.as_str());
            let _ = writeln!(
                writer,
                "  {}{:padding$}  {:>count_width$}",
                row.key,
                "",
                row.count,
                padding = padding,
                count_width = count_width
            );
        }

        let hidden = table.total.saturating_sub(table.rows.len());
        if hidden > 0 {
            let _ = writeln!(
                writer,
                "  {}",
                format!("... and {} more", hidden).dimmed()
            );
        }

        let _ = writeln!(writer);
    }

    let _ = writeln!(
        writer,
        "{} {:.2}",
        "Styles per module:".bold(),
        report.summary.styles_per_module
    );
}

/// Print a value as pretty JSON to stdout.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    print_json_to(value, &mut io::stdout().lock())
}

pub fn print_json_to<T: Serialize + ?Sized, W: Write>(value: &T, writer: &mut W) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    writeln!(writer, "{}", json).context("Failed to write output")?;
    Ok(())
}

/// Print the closing summary line.
pub fn print_success(instances: usize, source_files: usize) {
    print_success_to(instances, source_files, &mut io::stdout().lock());
}

pub fn print_success_to<W: Write>(instances: usize, source_files: usize, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Found {} styled component(s) in {} source file(s)",
            instances, source_files
        )
        .green()
    );
}

/// Print diagnostics to stderr: all of them when verbose, otherwise only a
/// count of files that could not be parsed.
pub fn print_diagnostics(diagnostics: &[Diagnostic], verbose: bool) {
    print_diagnostics_to(diagnostics, verbose, &mut io::stderr().lock());
}

pub fn print_diagnostics_to<W: Write>(diagnostics: &[Diagnostic], verbose: bool, writer: &mut W) {
    if verbose {
        let max_line_width = calculate_max_line_width(diagnostics);
        for diagnostic in diagnostics {
            print_diagnostic(diagnostic, writer, max_line_width);
        }
    } else {
        let failed = diagnostics.iter().filter(|d| d.is_file_level()).count();
        print_parse_warning_to(failed, verbose, writer);
    }
}

/// Print a parse warning to a custom writer.
pub fn print_parse_warning_to<W: Write>(count: usize, verbose: bool, writer: &mut W) {
    if count > 0 && !verbose {
        let _ = writeln!(
            writer,
            "{} {} file(s) could not be parsed (use {} for details)",
            "warning:".bold().yellow(),
            count,
            "-v".cyan()
        );
    }
}

// ============================================================
// Internal Functions
// ============================================================

fn print_diagnostic<W: Write>(diagnostic: &Diagnostic, writer: &mut W, max_line_width: usize) {
    let severity = if diagnostic.is_file_level() {
        "error".bold().red()
    } else {
        "warning".bold().yellow()
    };

    let _ = writeln!(
        writer,
        "{}: {}  {}",
        severity,
        diagnostic.message,
        diagnostic.kind.to_string().dimmed().cyan()
    );

    match &diagnostic.location {
        DiagnosticLocation::File { path } => {
            let _ = writeln!(writer, "  {} {}", "-->".blue(), path);
        }
        DiagnosticLocation::Source(ctx) => {
            let _ = writeln!(
                writer,
                "  {} {}:{}:{}",
                "-->".blue(),
                ctx.file_path(),
                ctx.line(),
                ctx.col()
            );
            let _ = writeln!(
                writer,
                "{:>width$} {}",
                "",
                "|".blue(),
                width = max_line_width
            );
            let _ = writeln!(
                writer,
                "{:>width$} {} {}",
                ctx.line().to_string().blue(),
                "|".blue(),
                ctx.snippet,
                width = max_line_width
            );
        }
    }

    let _ = writeln!(writer); // Empty line between diagnostics
}

fn calculate_max_line_width(diagnostics: &[Diagnostic]) -> usize {
    diagnostics
        .iter()
        .filter_map(|d| match &d.location {
            DiagnosticLocation::Source(ctx) => Some(ctx.line()),
            DiagnosticLocation::File { .. } => None,
        })
        .max()
        .map(|n| n.to_string().len())
        .unwrap_or(1)
}

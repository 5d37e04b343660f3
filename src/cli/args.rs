//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `list`: Print every styled-component definition and its declarations
//! - `stats`: Print aggregate statistics tables
//! - `init`: Write a default configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};

use super::commands::stats::StatTable;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Source code root directory (defaults to the current directory)
    #[arg(long)]
    pub source_root: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Debug, Args)]
pub struct ListCommand {
    /// Glob patterns of files to scan (default: configured directories)
    pub patterns: Vec<String>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct StatsCommand {
    /// Tables to print (default: all)
    #[arg(value_enum)]
    pub tables: Vec<StatTable>,

    /// Glob pattern of files to scan, repeatable (default: configured directories)
    #[arg(short = 'p', long = "pattern")]
    pub patterns: Vec<String>,

    /// Rows shown per table (overrides config file)
    #[arg(long)]
    pub top: Option<usize>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List every styled component with its normalized declarations
    List(ListCommand),
    /// Print usage statistics of elements, components, properties and values
    Stats(StatsCommand),
    /// Initialize a new .styledrc.json configuration file
    Init,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_list() {
        let args = Arguments::try_parse_from(["styled-census", "list", "src/**/*.js", "-v"]).unwrap();
        let Some(Command::List(cmd)) = &args.command else {
            panic!("expected list command");
        };
        assert_eq!(cmd.patterns, vec!["src/**/*.js"]);
        assert_eq!(cmd.common.format, OutputFormat::Text);
        assert!(cmd.common.verbose);
    }

    #[test]
    fn test_parse_stats() {
        let args = Arguments::try_parse_from([
            "styled-census",
            "stats",
            "colors",
            "component-values",
            "--top",
            "5",
            "--format",
            "json",
        ])
        .unwrap();
        let Some(Command::Stats(cmd)) = args.command else {
            panic!("expected stats command");
        };
        assert_eq!(
            cmd.tables,
            vec![StatTable::Colors, StatTable::ComponentValues]
        );
        assert_eq!(cmd.top, Some(5));
        assert_eq!(cmd.common.format, OutputFormat::Json);
        assert!(cmd.patterns.is_empty());
    }

    #[test]
    fn test_parse_stats_patterns() {
        let args = Arguments::try_parse_from([
            "styled-census",
            "stats",
            "elements",
            "--pattern",
            "src/**/*.js",
            "-p",
            "lib/*.tsx",
        ])
        .unwrap();
        let Some(Command::Stats(cmd)) = args.command else {
            panic!("expected stats command");
        };
        assert_eq!(cmd.tables, vec![StatTable::Elements]);
        assert_eq!(cmd.patterns, vec!["src/**/*.js", "lib/*.tsx"]);
    }

    #[test]
    fn test_unknown_table_is_rejected() {
        assert!(Arguments::try_parse_from(["styled-census", "stats", "fonts"]).is_err());
    }
}

//! Scan context: configuration, the file list and the lazily computed
//! extraction output for one CLI run.

use std::{
    cell::OnceCell,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context as _, Result};
use colored::Colorize;
use rayon::prelude::*;

use crate::{
    cli::args::CommonArgs,
    config::{CONFIG_FILE_NAME, Config, load_config},
    core::{
        Instance,
        extract::{FileExtraction, analyze_source},
        file_scanner::{ScanResult, expand_patterns, scan_files},
    },
    issues::{Diagnostic, DiagnosticKind},
};

/// Instances and diagnostics of all scanned files, in file order.
#[derive(Debug, Default)]
pub struct ScanOutput {
    pub instances: Vec<Instance>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Extract every file, in parallel. Output order follows `files`.
pub fn extract_files(files: &[String]) -> ScanOutput {
    let results: Vec<FileExtraction> = files.par_iter().map(|file| extract_file(file)).collect();

    let mut output = ScanOutput::default();
    for result in results {
        output.instances.extend(result.instances);
        output.diagnostics.extend(result.diagnostics);
    }
    output
}

fn extract_file(file_path: &str) -> FileExtraction {
    match fs::read_to_string(file_path) {
        Ok(source) => analyze_source(&source, file_path),
        Err(e) => FileExtraction {
            instances: Vec::new(),
            diagnostics: vec![Diagnostic::file(
                DiagnosticKind::ReadError,
                file_path,
                e.to_string(),
            )],
        },
    }
}

/// Configuration priority: CLI arguments > `.styledrc.json` > defaults.
pub struct ScanContext {
    pub config: Config,

    /// Directory the scan is rooted at.
    pub root_dir: PathBuf,

    /// Files to extract, sorted.
    pub files: Vec<String>,

    pub verbose: bool,

    output: OnceCell<ScanOutput>,
}

impl ScanContext {
    /// Load configuration and collect the files to scan.
    ///
    /// With `patterns`, exactly the files matching them are scanned. Without,
    /// the configured `includes` under the source root are walked.
    pub fn new(common_args: &CommonArgs, patterns: &[String]) -> Result<Self> {
        let verbose = common_args.verbose;

        let root_dir = common_args
            .source_root
            .clone()
            .unwrap_or_else(|| PathBuf::from("."));
        let root = root_dir
            .to_str()
            .with_context(|| format!("Invalid path: {:?}", root_dir))?;

        let config_result = load_config(Path::new(root))?;
        if verbose && !config_result.from_file {
            eprintln!(
                "Note: No {} found, using default configuration",
                CONFIG_FILE_NAME
            );
        }
        let config = config_result.config;

        let scan_result: ScanResult = if patterns.is_empty() {
            scan_files(
                root,
                &config.includes,
                &config.ignores,
                config.ignore_test_files,
                verbose,
            )
        } else {
            expand_patterns(root, patterns, verbose)
        };

        if scan_result.skipped_count > 0 {
            eprintln!(
                "{} {} path(s) skipped due to access errors{}",
                "warning:".bold().yellow(),
                scan_result.skipped_count,
                if verbose { "" } else { " (use -v for details)" }
            );
        }

        Ok(Self {
            config,
            root_dir,
            files: scan_result.files,
            verbose,
            output: OnceCell::new(),
        })
    }

    /// Extraction output for all files (computed on first access).
    pub fn output(&self) -> &ScanOutput {
        self.output.get_or_init(|| extract_files(&self.files))
    }
}

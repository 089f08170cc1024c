//! Check command implementation

use super::init_logging;
use crate::config::CliConfig;
use crate::document::{self, DocumentKind};
use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader};
use crate::output::{create_formatter, FileReport, OutputFormat};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::Args;
use rayon::prelude::*;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use termlint_core::{apply_fixes, Diagnostic, NodeKind, TermSource, Terminology};

/// Arguments for the check command
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Configuration file (TOML)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Term file (JSON with comments), replaces terms from the config
    #[arg(short, long, value_name = "FILE")]
    pub terms: Option<PathBuf>,

    /// Do not merge in the built-in term list
    #[arg(long)]
    pub no_default_terms: bool,

    /// Drop a term (word or pattern source); repeatable
    #[arg(short = 'x', long, value_name = "TERM")]
    pub exclude: Vec<String>,

    /// Output format [default: text]
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Rewrite files in place with the suggested fixes
    #[arg(long)]
    pub fix: bool,

    /// Number of worker threads (0 = auto)
    #[arg(short = 'j', long, value_name = "N")]
    pub threads: Option<usize>,

    /// Suppress progress output and logging
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Outcome of a check run
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CheckSummary {
    /// Files checked
    pub files: usize,
    /// Incorrect terms left in the files
    pub findings: usize,
    /// Fixes written
    pub fixed: usize,
}

impl CheckSummary {
    /// Whether no incorrect term remains
    pub fn is_clean(&self) -> bool {
        self.findings == 0
    }
}

impl CheckArgs {
    /// Execute the check command
    pub fn execute(&self) -> Result<CheckSummary> {
        init_logging(self.verbose, self.quiet);

        log::info!("Starting terminology check");
        log::debug!("Arguments: {:?}", self);

        let config = self.effective_config()?;
        let terminology = Terminology::from_options(&config.terminology)
            .context("Failed to build the term set")?;
        log::info!(
            "Compiled {} rule(s) from {} term(s)",
            terminology.rules().len(),
            terminology.terms().len()
        );

        let files = resolve_patterns(&self.input)?;
        let threads = self.threads.unwrap_or(config.performance.worker_threads);
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(match threads {
                0 => config.performance.threads(),
                n => n,
            })
            .build()
            .context("Failed to start worker threads")?;

        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_files(files.len() as u64);

        let skip = &config.terminology.skip;
        let reports = pool.install(|| {
            files
                .par_iter()
                .map(|path| {
                    let report = check_file(path, &terminology, skip, self.fix);
                    progress.file_completed(&path.display().to_string());
                    report
                })
                .collect::<Result<Vec<_>>>()
        })?;
        progress.finish();

        let format = self.format.unwrap_or(config.output.format);
        let mut formatter = create_formatter(format, self.writer()?, config.output.pretty_json);

        let mut summary = CheckSummary {
            files: reports.len(),
            ..CheckSummary::default()
        };
        for report in &reports {
            summary.findings += report.findings.len();
            summary.fixed += report.fixed;
            formatter.format_file(report)?;
        }
        formatter.finish()?;

        log::info!(
            "Checked {} file(s): {} incorrect term(s), {} fixed",
            summary.files,
            summary.findings,
            summary.fixed
        );
        Ok(summary)
    }

    /// Config file values with command-line overrides applied
    fn effective_config(&self) -> Result<CliConfig> {
        let mut config = CliConfig::load_or_default(self.config.as_deref())?;

        if let Some(terms) = &self.terms {
            config.terminology.terms = TermSource::File(terms.clone());
        }
        if self.no_default_terms {
            config.terminology.default_terms = false;
        }
        config.terminology.exclude.extend(self.exclude.iter().cloned());

        Ok(config)
    }

    fn writer(&self) -> Result<Box<dyn Write + Send + Sync>> {
        Ok(match &self.output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?;
                Box::new(BufWriter::new(file))
            }
            None => Box::new(io::stdout()),
        })
    }
}

/// Check one file, fixing it in place when `fix` is set
pub fn check_file(
    path: &Path,
    terminology: &Terminology,
    skip: &[NodeKind],
    fix: bool,
) -> Result<FileReport> {
    let display = path.display().to_string();
    let kind = DocumentKind::from_path(path);
    let source = FileReader::read_text(path)?;

    let diagnostics = collect_diagnostics(&source, kind, terminology, skip)
        .map_err(|e| CliError::CheckFailed(format!("{display}: {e}")))?;
    log::debug!("{}: {} incorrect term(s)", display, diagnostics.len());

    if !fix || diagnostics.is_empty() {
        return Ok(FileReport::new(display, &source, diagnostics, 0));
    }

    let (fixed_source, applied) = apply_fixes(&source, diagnostics.iter().map(|d| &d.fix));
    FileReader::write_text(path, &fixed_source)?;
    log::info!("Fixed {} term(s) in {}", applied, display);

    let remaining = collect_diagnostics(&fixed_source, kind, terminology, skip)
        .map_err(|e| CliError::CheckFailed(format!("{display}: {e}")))?;
    Ok(FileReport::new(display, &fixed_source, remaining, applied))
}

/// Diagnostics for every text node of `source`, in document coordinates
pub fn collect_diagnostics(
    source: &str,
    kind: DocumentKind,
    terminology: &Terminology,
    skip: &[NodeKind],
) -> termlint_core::Result<Vec<Diagnostic>> {
    let mut diagnostics = Vec::new();

    for node in document::split(source, kind, skip) {
        diagnostics.extend(
            terminology
                .diagnostics(node.text)?
                .into_iter()
                .map(|diagnostic| diagnostic.shifted(node.offset)),
        );
    }

    diagnostics.sort_by_key(|diagnostic| diagnostic.start);
    Ok(diagnostics)
}

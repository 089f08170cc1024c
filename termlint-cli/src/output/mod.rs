//! Output formatting module

use crate::document;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;
use termlint_core::Diagnostic;

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One `path:line:column: message` line per finding
    #[default]
    Text,
    /// JSON array of files with their findings
    Json,
    /// Markdown report grouped by file
    Markdown,
}

impl OutputFormat {
    /// Every format, in declaration order
    pub const ALL: [OutputFormat; 3] = [
        OutputFormat::Text,
        OutputFormat::Json,
        OutputFormat::Markdown,
    ];

    /// Name accepted by `--format`
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Markdown => "markdown",
        }
    }

    /// One-line description for `list formats`
    pub fn description(&self) -> &'static str {
        match self {
            OutputFormat::Text => "one line per finding (path:line:column: message)",
            OutputFormat::Json => "JSON array of files with their findings",
            OutputFormat::Markdown => "Markdown report grouped by file",
        }
    }
}

/// A diagnostic with its position in the file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Located {
    /// 1-based line
    pub line: usize,
    /// 1-based column, in characters
    pub column: usize,
    #[serde(flatten)]
    pub diagnostic: Diagnostic,
}

/// Findings for one checked file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileReport {
    /// Path as given on the command line
    pub path: String,
    /// Number of fixes written to the file
    pub fixed: usize,
    /// Findings still present in the file
    pub findings: Vec<Located>,
}

impl FileReport {
    /// Attach line and column to diagnostics computed against `source`
    pub fn new(path: String, source: &str, diagnostics: Vec<Diagnostic>, fixed: usize) -> Self {
        let findings = diagnostics
            .into_iter()
            .map(|diagnostic| {
                let (line, column) = document::line_col(source, diagnostic.start);
                Located {
                    line,
                    column,
                    diagnostic,
                }
            })
            .collect();

        Self {
            path,
            fixed,
            findings,
        }
    }
}

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format the report of a single file
    fn format_file(&mut self, report: &FileReport) -> Result<()>;

    /// Finalize output (e.g., close JSON array, print totals)
    fn finish(&mut self) -> Result<()>;
}

/// Create the formatter for `format` writing to `writer`
pub fn create_formatter<W>(
    format: OutputFormat,
    writer: W,
    pretty_json: bool,
) -> Box<dyn OutputFormatter>
where
    W: Write + Send + Sync + 'static,
{
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(writer)),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer, pretty_json)),
        OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
    }
}

/// Totals shared by the summary lines of the formatters
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Totals {
    pub files: usize,
    pub findings: usize,
    pub fixed: usize,
}

impl Totals {
    pub fn add(&mut self, report: &FileReport) {
        if !report.findings.is_empty() {
            self.files += 1;
        }
        self.findings += report.findings.len();
        self.fixed += report.fixed;
    }
}

//! Markdown output formatter

use super::{FileReport, OutputFormatter, Totals};
use anyhow::Result;
use std::io::Write;

/// Markdown formatter - one section with a finding table per file
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    totals: Totals,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            totals: Totals::default(),
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn format_file(&mut self, report: &FileReport) -> Result<()> {
        self.totals.add(report);
        if report.findings.is_empty() {
            return Ok(());
        }

        writeln!(self.writer, "## {}", report.path)?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Line | Column | Message |")?;
        writeln!(self.writer, "|-----:|-------:|---------|")?;
        for finding in &report.findings {
            writeln!(
                self.writer,
                "| {} | {} | {} |",
                finding.line,
                finding.column,
                finding.diagnostic.message.replace('|', "\\|")
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer, "---")?;
        writeln!(
            self.writer,
            "*Total incorrect terms: {} in {} file(s)*",
            self.totals.findings, self.totals.files
        )?;
        if self.totals.fixed > 0 {
            writeln!(self.writer, "*Fixed terms: {}*", self.totals.fixed)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

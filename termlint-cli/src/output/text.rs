//! Plain text output formatter

use super::{FileReport, OutputFormatter, Totals};
use anyhow::Result;
use std::io::Write;

/// Plain text formatter - one line per finding, then a summary
pub struct TextFormatter<W: Write> {
    writer: W,
    totals: Totals,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            totals: Totals::default(),
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_file(&mut self, report: &FileReport) -> Result<()> {
        self.totals.add(report);
        for finding in &report.findings {
            writeln!(
                self.writer,
                "{}:{}:{}: {}",
                report.path, finding.line, finding.column, finding.diagnostic.message
            )?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        let totals = self.totals;
        if totals.findings > 0 {
            writeln!(
                self.writer,
                "\n{} incorrect term(s) in {} file(s)",
                totals.findings, totals.files
            )?;
        }
        if totals.fixed > 0 {
            writeln!(self.writer, "Fixed {} term(s)", totals.fixed)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

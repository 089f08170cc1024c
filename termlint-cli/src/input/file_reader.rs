//! File reading and writing utilities

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// File access with UTF-8 validation
pub struct FileReader;

impl FileReader {
    /// Read a file as UTF-8 text
    pub fn read_text(path: &Path) -> Result<String> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        Ok(content)
    }

    /// Replace a file's content, used when fixing in place
    pub fn write_text(path: &Path, content: &str) -> Result<()> {
        fs::write(path, content)
            .with_context(|| format!("Failed to write file: {}", path.display()))
    }
}

//! Configuration module
//!
//! A TOML file with three sections:
//!
//! ```toml
//! [terminology]
//! defaultTerms = true
//! terms = "terms.jsonc"
//! exclude = ["CSS"]
//! skip = ["BlockQuote"]
//!
//! [output]
//! format = "text"
//! pretty_json = true
//!
//! [performance]
//! worker_threads = 0
//! ```

use crate::error::CliError;
use crate::input::FileReader;
use crate::output::OutputFormat;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;
use termlint_core::{Options, TermSource};

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    /// Checker options
    #[serde(default)]
    pub terminology: Options,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Performance configuration
    #[serde(default)]
    pub performance: PerformanceConfig,
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub format: OutputFormat,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            pretty_json: true,
        }
    }
}

/// Performance-related configuration
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct PerformanceConfig {
    /// Number of worker threads (0 = auto)
    pub worker_threads: usize,
}

impl PerformanceConfig {
    /// Worker threads to use, resolving 0 to the number of CPUs
    pub fn threads(&self) -> usize {
        match self.worker_threads {
            0 => num_cpus::get(),
            n => n,
        }
    }
}

impl CliConfig {
    /// Load a configuration file.
    ///
    /// A relative term file path is resolved against the directory of the
    /// configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = FileReader::read_text(path)?;
        let mut config = Self::parse(&content)
            .map_err(|e| CliError::ConfigError(format!("{}: {e}", path.display())))?;

        if let TermSource::File(terms) = &config.terminology.terms {
            if terms.is_relative() {
                let base = path.parent().unwrap_or_else(|| Path::new(""));
                config.terminology.terms = TermSource::File(base.join(terms));
            }
        }

        log::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Load `path` when given, otherwise use the defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}

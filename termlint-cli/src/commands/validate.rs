//! Validate command implementation

use crate::config::CliConfig;
use anyhow::Result;
use clap::Args;
use std::path::{Path, PathBuf};
use termlint_core::terms::load_terms_file;
use termlint_core::Terminology;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Term file (JSON with comments) to validate
    #[arg(short, long, value_name = "FILE", required_unless_present = "config")]
    pub terms: Option<PathBuf>,

    /// Configuration file (TOML) to validate, including its terms
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        if let Some(config) = &self.config {
            validate(config, "configuration", || {
                let config = CliConfig::load(config)?;
                Ok(Terminology::from_options(&config.terminology)?)
            })?;
        }

        if let Some(terms) = &self.terms {
            validate(terms, "term file", || {
                let terms = load_terms_file(terms)?;
                Ok(Terminology::new(terms)?)
            })?;
        }

        Ok(())
    }
}

fn validate<F>(path: &Path, what: &str, build: F) -> Result<()>
where
    F: FnOnce() -> Result<Terminology>,
{
    println!("Validating {}: {}", what, path.display());

    match build() {
        Ok(terminology) => {
            let words = terminology.terms().iter().filter(|t| t.is_word()).count();
            println!("✓ The {what} is valid!");
            println!("  Words: {}", words);
            println!("  Patterns: {}", terminology.terms().len() - words);
            println!("  Compiled rules: {}", terminology.rules().len());
            Ok(())
        }
        Err(e) => {
            println!("✗ The {what} is invalid!");
            println!("  Error: {e:#}");
            Err(anyhow::anyhow!("Validation failed: {:#}", e))
        }
    }
}

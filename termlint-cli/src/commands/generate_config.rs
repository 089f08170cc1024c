//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

const TEMPLATE: &str = r#"# termlint configuration

[terminology]
# Merge the built-in term list
defaultTerms = true

# Extra terms, checked before the built-in ones. Either a list:
#   a string is the only correct spelling of a word or phrase,
#   [pattern, replacement] replaces a case-insensitive regular expression
#   ($1 refers to a capture group), and
#   [pattern, [variants...]] picks the variant matching case-insensitively.
# or a path to a JSON term file, relative to this file:
#   terms = "terms.jsonc"
terms = [
    # "WordPress",
    # ["bug[- ]fix(es)?", "bugfix$1"],
    # ["pasta|spaghetti", ["pasta", "spaghetti"]],
]

# Words or pattern sources to drop from the term list
exclude = []

# Document regions that are never checked (see `termlint list nodes`)
skip = ["BlockQuote"]

[output]
# text, json or markdown
format = "text"
pretty_json = true

[performance]
# Number of worker threads (0 = auto)
worker_threads = 0
"#;

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        println!("Generating configuration template...");
        println!("  Output file: {}", self.output.display());

        fs::write(&self.output, TEMPLATE)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the configuration file to add your own terms");
        println!("2. Validate your configuration:");
        println!("   termlint validate --config {}", self.output.display());
        println!("3. Use it for checking:");
        println!(
            "   termlint check -i 'docs/**/*.md' --config {}",
            self.output.display()
        );

        Ok(())
    }
}

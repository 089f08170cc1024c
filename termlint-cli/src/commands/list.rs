//! List command implementation

use crate::config::CliConfig;
use crate::output::OutputFormat;
use anyhow::Result;
use clap::Subcommand;
use std::io::{self, Write};
use std::path::PathBuf;
use termlint_core::{build_term_set, NodeKind, Options, Replacement, Term};

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List the effective term set, in priority order
    Terms {
        /// Configuration file (TOML)
        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Do not merge in the built-in term list
        #[arg(long)]
        no_default_terms: bool,
    },

    /// List available output formats
    Formats,

    /// List document regions that can be skipped
    Nodes,
}

impl ListCommands {
    /// Print the list to stdout
    pub fn execute(&self) -> Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.write_to(&mut out)?;
        out.flush()?;
        Ok(())
    }

    /// Write the list to `out`
    pub fn write_to<W: Write>(&self, out: &mut W) -> Result<()> {
        match self {
            ListCommands::Terms {
                config,
                no_default_terms,
            } => {
                let config = CliConfig::load_or_default(config.as_deref())?;
                let options = Options {
                    default_terms: config.terminology.default_terms && !no_default_terms,
                    ..config.terminology
                };
                let terms =
                    build_term_set(options.default_terms, &options.terms, &options.exclude)?;
                for term in &terms {
                    writeln!(out, "{}", describe(term))?;
                }
            }
            ListCommands::Formats => {
                writeln!(out, "Available output formats:")?;
                for format in OutputFormat::ALL {
                    writeln!(out, "  {:<10} {}", format.as_str(), format.description())?;
                }
            }
            ListCommands::Nodes => {
                let skipped = Options::default().skip;
                writeln!(out, "Skippable document regions:")?;
                for kind in NodeKind::ALL {
                    let marker = if skipped.contains(&kind) {
                        " (skipped by default)"
                    } else {
                        ""
                    };
                    writeln!(out, "  {}{}", kind.as_str(), marker)?;
                }
            }
        }
        Ok(())
    }
}

/// One-line description of a term
fn describe(term: &Term) -> String {
    match term {
        Term::Word(word) => word.clone(),
        Term::Pattern(pattern, Replacement::Template(template)) => {
            format!("{pattern} → {template}")
        }
        Term::Pattern(pattern, Replacement::Variants(variants)) => {
            format!("{pattern} → {}", variants.join(" | "))
        }
    }
}

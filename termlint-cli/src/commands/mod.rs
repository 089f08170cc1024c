//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;

pub mod check;
pub mod generate_config;
pub mod list;
pub mod validate;

pub use list::ListCommands;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check files for incorrect terms
    Check(check::CheckArgs),

    /// Validate a term file or configuration file
    Validate(validate::ValidateArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },

    /// Generate a configuration file template
    GenerateConfig(generate_config::GenerateConfigArgs),
}

impl Commands {
    /// Run the command; `Ok(false)` means incorrect terms remain
    pub fn execute(&self) -> Result<bool> {
        match self {
            Commands::Check(args) => Ok(args.execute()?.is_clean()),
            Commands::Validate(args) => args.execute().map(|_| true),
            Commands::List { subcommand } => subcommand.execute().map(|_| true),
            Commands::GenerateConfig(args) => args.execute().map(|_| true),
        }
    }
}

/// Initialize logging based on verbosity level
///
/// `RUST_LOG` takes precedence over the level picked by `-v`.
pub(crate) fn init_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    // A second initialization only happens in tests and is harmless
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check_args() -> check::CheckArgs {
        check::CheckArgs {
            input: vec!["README.md".to_string()],
            config: None,
            terms: None,
            no_default_terms: false,
            exclude: Vec::new(),
            format: None,
            output: None,
            fix: false,
            threads: None,
            quiet: true,
            verbose: 0,
        }
    }

    #[test]
    fn test_commands_debug_format() {
        let debug_str = format!("{:?}", Commands::Check(check_args()));
        assert!(debug_str.contains("Check"));
        assert!(debug_str.contains("README.md"));

        let list_cmd = Commands::List {
            subcommand: ListCommands::Nodes,
        };
        let debug_str = format!("{:?}", list_cmd);
        assert!(debug_str.contains("List"));
        assert!(debug_str.contains("Nodes"));
    }

    #[test]
    fn test_list_executes() {
        let list_cmd = Commands::List {
            subcommand: ListCommands::Formats,
        };
        assert!(list_cmd.execute().unwrap());
    }

    #[test]
    fn test_generate_config_executes() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let output = temp_dir.path().join("termlint.toml");
        let cmd = Commands::GenerateConfig(generate_config::GenerateConfigArgs {
            output: output.clone(),
        });

        assert!(cmd.execute().unwrap());
        assert!(output.exists());
    }

    #[test]
    fn test_missing_input_is_an_error() {
        let mut args = check_args();
        args.input = vec!["/nonexistent/*.md".to_string()];
        assert!(Commands::Check(args).execute().is_err());
    }
}

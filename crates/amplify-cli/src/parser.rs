//! Main CLI parser and top-level argument handling.
//!
//! This module defines the root CLI structure with global options.

use amplify_model::{Settings, ValidationMode};
use clap::Parser;

use crate::commands::Commands;

/// Command-line interface for inspecting Amplify API model documents.
#[derive(Parser)]
#[command(name = "amplify-model")]
#[command(about = "Inspect, validate and route Amplify API model documents")]
#[command(version)]
pub struct Cli {
    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    /// Constraint handling when decoding documents (advisory or strict)
    #[arg(long = "validation", global = true, env = "AMPLIFY_MODEL_VALIDATION")]
    pub validation: Option<ValidationMode>,

    /// Pretty-print JSON output
    #[arg(long = "pretty", global = true, env = "AMPLIFY_MODEL_PRETTY")]
    pub pretty: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Model settings selected by the global options.
    pub fn settings(&self) -> Settings {
        Settings {
            validation_mode: self.validation,
            pretty_json: Some(self.pretty),
            ..Settings::with_defaults()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parser_builds() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_args() {
        let cli = Cli::parse_from([
            "amplify-model",
            "--verbose",
            "--validation",
            "STRICT",
            "shapes",
        ]);
        assert!(cli.verbose);
        assert_eq!(cli.validation, Some(ValidationMode::Strict));
        assert_eq!(
            cli.settings().effective_validation_mode(),
            ValidationMode::Strict
        );
    }

    #[test]
    fn test_global_args_after_subcommand() {
        let cli = Cli::parse_from(["amplify-model", "describe", "App", "--pretty"]);
        assert!(cli.pretty);
        assert!(cli.settings().effective_pretty_json());
    }

    #[test]
    fn test_invalid_validation_mode_rejected() {
        let result = Cli::try_parse_from(["amplify-model", "--validation", "loose", "shapes"]);
        assert!(result.is_err());
    }
}

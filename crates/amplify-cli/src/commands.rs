//! Main commands enum.

use std::path::PathBuf;

use clap::Subcommand;

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the modelled shapes
    Shapes {
        /// Only operation request shapes
        #[arg(long, conflicts_with = "results")]
        requests: bool,
        /// Only operation result shapes
        #[arg(long)]
        results: bool,
    },

    /// Show a shape's fields and their constraints
    Describe {
        /// Shape name (e.g. "App", "CreateBranchRequest")
        shape: String,
    },

    /// Decode a JSON document and print its rendering and hash
    Inspect {
        /// Shape name to decode as
        shape: String,
        /// Path to the JSON document
        file: PathBuf,
    },

    /// Report constraint violations in a JSON document
    Validate {
        /// Shape name to decode as
        shape: String,
        /// Path to the JSON document
        file: PathBuf,
    },

    /// Resolve the HTTP route of an operation
    Route {
        /// Operation name (e.g. "GetBranch"), case-insensitive
        operation: String,
        /// Request document; without it the path template is printed
        file: Option<PathBuf>,
        /// Print the resolved route as JSON
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;
    use crate::parser::Cli;

    #[test]
    fn test_route_file_is_optional() {
        let cli = Cli::parse_from(["amplify-model", "route", "ListApps"]);
        assert!(matches!(
            cli.command,
            Some(Commands::Route { ref operation, file: None, json: false }) if operation == "ListApps"
        ));
    }

    #[test]
    fn test_shape_filters_conflict() {
        let result = Cli::try_parse_from(["amplify-model", "shapes", "--requests", "--results"]);
        assert!(result.is_err());
    }
}

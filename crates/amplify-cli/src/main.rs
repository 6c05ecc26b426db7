//! CLI entry point.
//!
//! Loads `.env`, parses arguments, initialises logging and dispatches to the
//! handlers. Handler errors carry their exit code through `anyhow`.

use std::process::ExitCode;

use amplify_cli::handlers::shapes::ShapeFilter;
use amplify_cli::{Cli, CliError, Commands, handlers};
use amplify_model::validate_settings;
use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: bool) {
    // Commands report violations themselves; advisory warnings only with -v
    let default = if verbose { "debug" } else { "error" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let settings = cli.settings();
    validate_settings(&settings).map_err(CliError::from)?;

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let output = match command {
        Commands::Shapes { requests, results } => {
            handlers::shapes::execute(ShapeFilter::from_flags(requests, results))
        }
        Commands::Describe { shape } => handlers::describe::execute(&shape)?,
        Commands::Inspect { shape, file } => handlers::inspect::execute(&settings, &shape, &file)?,
        Commands::Validate { shape, file } => {
            handlers::validate::execute(&settings, &shape, &file)?
        }
        Commands::Route {
            operation,
            file,
            json,
        } => handlers::route::execute(&settings, &operation, file.as_deref(), json)?,
    };
    println!("{output}");
    Ok(())
}

fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            let code = err.downcast_ref::<CliError>().map_or(1, CliError::exit_code);
            ExitCode::from(code)
        }
    }
}

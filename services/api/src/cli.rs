use crate::commands::{
    run_catalog_export, run_catalog_list, run_catalog_show, run_validate, CatalogExportArgs,
    CatalogShowArgs, CatalogSourceArgs, ValidateArgs,
};
use crate::server;
use clap::{Args, Parser, Subcommand};
use property_schema::error::AppError;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(
    name = "Property Schema Service",
    about = "Serve the property category catalog or inspect and validate listings from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Inspect or export the property category catalog
    Catalog {
        #[command(subcommand)]
        command: CatalogCommand,
    },
    /// Validate a listing submission (JSON file) against a category schema
    Validate(ValidateArgs),
}

#[derive(Subcommand, Debug)]
enum CatalogCommand {
    /// List registered categories
    List(CatalogSourceArgs),
    /// Print the full schema of one category as JSON
    Show(CatalogShowArgs),
    /// Write the versioned catalog document shared by clients and servers
    Export(CatalogExportArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<ExitCode, AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await.map(|()| ExitCode::SUCCESS),
        Command::Catalog {
            command: CatalogCommand::List(args),
        } => run_catalog_list(args).map(|()| ExitCode::SUCCESS),
        Command::Catalog {
            command: CatalogCommand::Show(args),
        } => run_catalog_show(args).map(|()| ExitCode::SUCCESS),
        Command::Catalog {
            command: CatalogCommand::Export(args),
        } => run_catalog_export(args).map(|()| ExitCode::SUCCESS),
        Command::Validate(args) => run_validate(args).map(|valid| {
            if valid {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(2)
            }
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_validate_arguments() {
        let cli = Cli::try_parse_from([
            "property-schema-api",
            "validate",
            "--category",
            "HOUSE",
            "--submission",
            "listing.json",
            "--reject-unknown-fields",
        ])
        .expect("arguments parse");

        match cli.command {
            Some(Command::Validate(args)) => {
                assert_eq!(args.category, "HOUSE");
                assert!(args.reject_unknown_fields);
            }
            other => panic!("expected validate command, got {other:?}"),
        }
    }

    #[test]
    fn serve_is_the_default_command() {
        let cli = Cli::try_parse_from(["property-schema-api"]).expect("arguments parse");
        assert!(cli.command.is_none());
    }
}

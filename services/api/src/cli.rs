use crate::render::{run_catalog, run_report, CatalogArgs, ReportArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use cra_readiness::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "CRA Readiness Assessment",
    about = "Serve and inspect Cyber Resilience Act readiness self-assessments",
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
    /// Print the question catalog for a sector and architecture
    Catalog(CatalogArgs),
    /// Re-score a stored assessment snapshot and print the report
    Report(ReportArgs),
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

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Catalog(args) => run_catalog(args),
        Command::Report(args) => run_report(args),
    }
}

use crate::infra::{load_catalog, parse_criterion};
use crate::server;
use cities::error::AppError;
use cities::ranking::Criterion;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "cities",
    about = "Rank a small catalog of cities by cost, climate, population, or name",
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
    /// Print the catalog, optionally ranked by a criterion
    List(ListArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// Seed the catalog from a CSV file instead of the built-in list
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub(crate) struct ListArgs {
    /// Criterion to rank by: name, population, cost, or climate
    #[arg(long, value_parser = parse_criterion)]
    pub(crate) by: Option<Criterion>,
    /// Seed the catalog from a CSV file instead of the built-in list
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::List(args) => run_list(args),
    }
}

fn run_list(args: ListArgs) -> Result<(), AppError> {
    let catalog = load_catalog(args.catalog.as_deref())?;

    match args.by {
        Some(criterion) => {
            println!("Cities by {criterion} (worst to best):");
            let ranked = catalog.ranked_by(criterion);
            println!("{}", cities::describe::describe_catalog(&ranked));
        }
        None => {
            println!("We have {} cities:", catalog.len());
            println!("{catalog}");
        }
    }

    Ok(())
}

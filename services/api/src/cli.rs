use crate::demo::{run_batch_file, run_cost, run_demo, BatchArgs, CostArgs, DemoArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use rcn_engine::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "RCN Valuation Engine",
    about = "Run and exercise the replacement cost engine from the command line",
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
    /// Price a single request and print the audit breakdown
    Cost(CostArgs),
    /// Price a CSV of requests and print a per-row summary
    Batch(BatchArgs),
    /// Run an end-to-end demo of the engine against the standard table
    Demo(DemoArgs),
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
        Command::Cost(args) => run_cost(args),
        Command::Batch(args) => run_batch_file(args),
        Command::Demo(args) => run_demo(args),
    }
}

use crate::demo::{run_demo, run_rate, DemoArgs, RateArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use di_scorecard::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "D&I Scorecard",
    about = "Rate diversity and inclusion workforce indicators from the command line or as a service",
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
    /// Rate an indicator template file and print the scorecard
    Rate(RateArgs),
    /// Run a canned evaluation with the 2022 energy-sector sample values
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
        Command::Rate(args) => run_rate(args),
        Command::Demo(args) => run_demo(args),
    }
}

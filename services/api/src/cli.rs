use crate::demo::{run_demo, run_pipeline_report, DemoArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use talent_flow::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Talent Flow",
    about = "Run and demonstrate the recruitment pipeline service from the command line",
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
    /// Inspect the recruitment pipeline using seeded demo records
    Pipeline {
        #[command(subcommand)]
        command: PipelineCommand,
    },
    /// Run an end-to-end CLI demo of the status cascade
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum PipelineCommand {
    /// Print a pipeline snapshot built from seeded demo records
    Report,
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
        Command::Pipeline {
            command: PipelineCommand::Report,
        } => run_pipeline_report(),
        Command::Demo(args) => run_demo(args),
    }
}

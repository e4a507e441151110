mod commands;
mod dispatch;
mod helpers;

use clap::Parser;
use nusinov_core::domain::NusinovError;

pub fn run_from_env() -> i32 {
    let args: Vec<String> = std::env::args().skip(1).collect();

    match run(args) {
        Ok(code) => code,
        Err(error) => {
            let core_error = error.as_nusinov_error();
            eprintln!("{}", core_error.diagnostic_line());
            eprintln!("{}", core_error.fatal_exit_line());
            core_error.exit_code()
        }
    }
}

pub fn run<I, S>(args: I) -> Result<i32, CliError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let full_args = std::iter::once("nusinov".to_string())
        .chain(args.into_iter().map(Into::into))
        .collect::<Vec<_>>();
    parse_and_dispatch(full_args)
}

fn parse_and_dispatch(args: Vec<String>) -> Result<i32, CliError> {
    match Cli::try_parse_from(&args) {
        Ok(cli) => {
            helpers::init_tracing(cli.verbose);
            dispatch_parsed(cli.command)
        }
        Err(err) => match err.kind() {
            clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => {
                print!("{}", err);
                Ok(0)
            }
            _ => Err(CliError::Usage(err.to_string())),
        },
    }
}

#[derive(Parser)]
#[command(
    name = "nusinov",
    version,
    about = "Empirical solar EUV/FUV/XUV irradiance models"
)]
struct Cli {
    /// Log coefficient loading and evaluation details to stderr
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: CliCommand,
}

#[derive(clap::Subcommand)]
enum CliCommand {
    /// Evaluate a model for one or more proxy values
    Predict(commands::PredictArgs),
    /// Show the resources and regression settings of a model
    Describe(commands::DescribeArgs),
    /// List the available model variants
    Variants,
}

fn dispatch_parsed(command: CliCommand) -> Result<i32, CliError> {
    match command {
        CliCommand::Predict(args) => commands::run_predict_command(args),
        CliCommand::Describe(args) => commands::run_describe_command(args),
        CliCommand::Variants => commands::run_variants_command(),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("{0}")]
    Usage(String),
    #[error("{0}")]
    Compute(NusinovError),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl From<NusinovError> for CliError {
    fn from(error: NusinovError) -> Self {
        Self::Compute(error)
    }
}

impl CliError {
    fn as_nusinov_error(&self) -> NusinovError {
        match self {
            Self::Usage(message) => {
                NusinovError::invalid_input_type("INPUT.CLI_USAGE", message.trim_end().to_string())
            }
            Self::Compute(error) => error.clone(),
            Self::Internal(error) => NusinovError::resource_not_found("IO.CLI", format!("{error:#}")),
        }
    }
}

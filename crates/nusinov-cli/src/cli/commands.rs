use super::CliError;
use super::dispatch::{OutputFormat, OutputKind, evaluate_output};
use super::helpers::{describe_text, open_store, parse_proxy, render_output};
use nusinov_core::domain::ModelVariant;
use nusinov_core::models::{build_model, describe};
use std::path::PathBuf;

#[derive(clap::Args)]
pub(super) struct PredictArgs {
    /// Model variant, e.g. euvn1984 or fuvt2021
    #[arg(long, short)]
    model: String,

    /// Which table to compute
    #[arg(long, value_enum, default_value_t = OutputKind::Bands)]
    output: OutputKind,

    /// Output rendering
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,

    /// Coefficient directory; overrides NUSINOV_COEFFICIENTS_DIR
    #[arg(long)]
    coefficients: Option<PathBuf>,

    /// Proxy value(s) as JSON, e.g. `100` or `[100, 120.5]`
    #[arg(value_name = "PROXY", allow_hyphen_values = true)]
    proxy: String,
}

#[derive(clap::Args)]
pub(super) struct DescribeArgs {
    /// Model variant to describe
    #[arg(long, short)]
    model: String,
}

pub(super) fn run_predict_command(args: PredictArgs) -> Result<i32, CliError> {
    let variant: ModelVariant = args.model.parse()?;
    let proxy = parse_proxy(&args.proxy)?;
    let store = open_store(args.coefficients)?;
    let model = build_model(variant, &store)?;

    tracing::debug!(
        variant = variant.as_str(),
        observations = proxy.len(),
        "running prediction"
    );
    let output = evaluate_output(model.as_ref(), args.output, &proxy)?;
    print!("{}", render_output(&output, args.format)?);
    Ok(0)
}

pub(super) fn run_describe_command(args: DescribeArgs) -> Result<i32, CliError> {
    let variant: ModelVariant = args.model.parse()?;
    print!("{}", describe_text(&describe(variant)));
    Ok(0)
}

pub(super) fn run_variants_command() -> Result<i32, CliError> {
    for variant in ModelVariant::ALL {
        println!("{:<10}{}", variant.as_str(), variant.description());
    }
    Ok(0)
}

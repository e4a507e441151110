use super::CliError;
use super::dispatch::{OutputFormat, PredictionOutput};
use anyhow::Context;
use nusinov_core::coefficients::CoefficientStore;
use nusinov_core::common::RuntimeConfig;
use nusinov_core::domain::{NusinovError, ProxyInput, validate_proxy};
use nusinov_core::models::{Evaluation, ModelSummary};
use nusinov_core::spectra::render_table;
use serde_json::{Value, json};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Installs the stderr subscriber once. `RUST_LOG` wins over the default
/// level.
pub(super) fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

pub(super) fn open_store(coefficients: Option<PathBuf>) -> Result<CoefficientStore, CliError> {
    let mut config = RuntimeConfig::from_env();
    if let Some(dir) = coefficients {
        config = config.with_coefficients_dir(dir);
    }
    Ok(CoefficientStore::from_config(&config)?)
}

/// Parses the positional proxy as JSON and validates it before any resource
/// is touched.
pub(super) fn parse_proxy(text: &str) -> Result<ProxyInput, CliError> {
    let value: Value = serde_json::from_str(text).map_err(|error| {
        NusinovError::invalid_input_type(
            "INPUT.PROXY_JSON",
            format!("proxy '{text}' is not valid JSON: {error}"),
        )
    })?;
    Ok(validate_proxy(&value)?)
}

pub(super) fn render_output(
    output: &PredictionOutput,
    format: OutputFormat,
) -> Result<String, CliError> {
    match (output, format) {
        (PredictionOutput::Single(result), OutputFormat::Json) => pretty_json(&result.to_json()),
        (PredictionOutput::Spectra(spectra), OutputFormat::Json) => pretty_json(&json!({
            "bands": spectra.bands.to_json(),
            "lines": spectra.lines.as_ref().map(|lines| lines.to_json()),
        })),
        (PredictionOutput::Single(result), OutputFormat::Table) => Ok(render_table(result)),
        (PredictionOutput::Spectra(spectra), OutputFormat::Table) => {
            let mut rendered = render_table(&spectra.bands);
            if let Some(lines) = &spectra.lines {
                rendered.push('\n');
                rendered.push_str(&render_table(lines));
            }
            Ok(rendered)
        }
    }
}

fn pretty_json(value: &Value) -> Result<String, CliError> {
    let mut rendered =
        serde_json::to_string_pretty(value).context("failed to serialize prediction result")?;
    rendered.push('\n');
    Ok(rendered)
}

pub(super) fn describe_text(summary: &ModelSummary) -> String {
    let evaluation = match summary.evaluation {
        Evaluation::Linear { basis, scale } => format!("linear regression {basis}, scale {scale:e}"),
        Evaluation::PowerLaw => "power law (I * (index / 1.35)^d)".to_string(),
    };

    let mut lines = vec![
        format!("model: {}", summary.variant),
        format!("description: {}", summary.description),
        format!("evaluation: {evaluation}"),
        format!("coordinate: {}", summary.coordinate),
        format!("variable: {}", summary.variable),
        "resources:".to_string(),
    ];
    for schema in summary.resources {
        lines.push(format!(
            "  {:<24}{:<7}{:>4} rows  [{}]",
            schema.resource,
            schema.kind.as_str(),
            schema.rows,
            schema.columns.join(", ")
        ));
    }

    let mut rendered = lines.join("\n");
    rendered.push('\n');
    rendered
}

#[cfg(test)]
mod tests {
    use super::{describe_text, parse_proxy};
    use crate::cli::CliError;
    use nusinov_core::domain::{ModelVariant, ProxyInput};
    use nusinov_core::models::describe;

    #[test]
    fn proxies_parse_as_json_scalars_and_lists() {
        assert_eq!(parse_proxy("100").expect("integer"), ProxyInput::Scalar(100.0));
        assert_eq!(
            parse_proxy("[100, 120.5]").expect("list"),
            ProxyInput::Sequence(vec![100.0, 120.5])
        );
    }

    #[test]
    fn invalid_proxies_are_input_errors() {
        for text in ["abc", "\"100\"", "[1, true]", "{}"] {
            let error = parse_proxy(text).expect_err("not a numeric proxy");
            match error {
                CliError::Compute(error) => assert_eq!(error.exit_code(), 2, "{text}"),
                other => panic!("unexpected error for {text}: {other}"),
            }
        }
    }

    #[test]
    fn description_lists_resources_and_settings() {
        let text = describe_text(&describe(ModelVariant::Euvn1984));
        assert!(text.starts_with("model: euvn1984\n"));
        assert!(text.contains("evaluation: linear regression [x, x^2], scale 1e13"));
        assert!(text.contains("coordinate: hei"));
        assert!(text.contains("euvn1984_full_coeffs"));
        assert!(text.contains("35 rows"));

        let text = describe_text(&describe(ModelVariant::Xuv1992));
        assert!(text.contains("evaluation: power law"));
        assert!(text.contains("[I, lband, uband, center]"));
    }
}

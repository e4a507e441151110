use nusinov_core::domain::{NusinovError, NusinovResult, ProxyInput};
use nusinov_core::models::{SpectralModel, SpectralModelExt, Spectra};
use nusinov_core::spectra::LabeledResult;

/// Which operation of a model `predict` runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub(super) enum OutputKind {
    /// Band table
    Bands,
    /// Discrete lines (EUV models only)
    Lines,
    /// Bands and lines from the same proxy
    Spectra,
    /// Full-spectrum table
    Full,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub(super) enum OutputFormat {
    Json,
    Table,
}

#[derive(Debug, Clone, PartialEq)]
pub(super) enum PredictionOutput {
    Single(LabeledResult),
    Spectra(Spectra),
}

pub(super) fn evaluate_output(
    model: &dyn SpectralModel,
    kind: OutputKind,
    proxy: &ProxyInput,
) -> NusinovResult<PredictionOutput> {
    match kind {
        OutputKind::Bands => model.spectral_bands(proxy).map(PredictionOutput::Single),
        OutputKind::Lines => model
            .spectral_lines(proxy)?
            .map(PredictionOutput::Single)
            .ok_or_else(|| {
                NusinovError::invalid_input_type(
                    "INPUT.OUTPUT_KIND",
                    format!("model {} has no discrete lines", model.variant()),
                )
            }),
        OutputKind::Spectra => model.spectra(proxy).map(PredictionOutput::Spectra),
        OutputKind::Full => model.predict(proxy).map(PredictionOutput::Single),
    }
}

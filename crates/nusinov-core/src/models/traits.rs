use crate::domain::{ModelVariant, NusinovResult, ProxyInput, ProxySource, validate_proxy};
use crate::spectra::LabeledResult;
use std::fmt::Debug;

/// Band and line results computed from the same proxy.
#[derive(Debug, Clone, PartialEq)]
pub struct Spectra {
    pub bands: LabeledResult,
    pub lines: Option<LabeledResult>,
}

/// One physical model variant over validated proxy input.
///
/// Implementors only see [`ProxyInput`]; the public, validating entry points
/// live on [`SpectralModelExt`].
pub trait SpectralModel: Debug + Send + Sync {
    fn variant(&self) -> ModelVariant;

    fn bands(&self, proxy: &ProxyInput) -> NusinovResult<LabeledResult>;

    fn lines(&self, _proxy: &ProxyInput) -> NusinovResult<Option<LabeledResult>> {
        Ok(None)
    }

    /// Combined full-range band table. Variants without one predict bands.
    fn full(&self, proxy: &ProxyInput) -> NusinovResult<LabeledResult> {
        self.bands(proxy)
    }
}

pub trait SpectralModelExt {
    fn spectral_bands<P>(&self, proxy: &P) -> NusinovResult<LabeledResult>
    where
        P: ProxySource + ?Sized;

    /// `None` for variants without discrete lines.
    fn spectral_lines<P>(&self, proxy: &P) -> NusinovResult<Option<LabeledResult>>
    where
        P: ProxySource + ?Sized;

    fn spectra<P>(&self, proxy: &P) -> NusinovResult<Spectra>
    where
        P: ProxySource + ?Sized;

    fn predict<P>(&self, proxy: &P) -> NusinovResult<LabeledResult>
    where
        P: ProxySource + ?Sized;
}

impl<T> SpectralModelExt for T
where
    T: SpectralModel + ?Sized,
{
    fn spectral_bands<P>(&self, proxy: &P) -> NusinovResult<LabeledResult>
    where
        P: ProxySource + ?Sized,
    {
        self.bands(&validate_proxy(proxy)?)
    }

    fn spectral_lines<P>(&self, proxy: &P) -> NusinovResult<Option<LabeledResult>>
    where
        P: ProxySource + ?Sized,
    {
        self.lines(&validate_proxy(proxy)?)
    }

    fn spectra<P>(&self, proxy: &P) -> NusinovResult<Spectra>
    where
        P: ProxySource + ?Sized,
    {
        let input = validate_proxy(proxy)?;
        Ok(Spectra {
            bands: self.bands(&input)?,
            lines: self.lines(&input)?,
        })
    }

    fn predict<P>(&self, proxy: &P) -> NusinovResult<LabeledResult>
    where
        P: ProxySource + ?Sized,
    {
        self.full(&validate_proxy(proxy)?)
    }
}

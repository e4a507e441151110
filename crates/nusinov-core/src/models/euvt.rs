//! 2021 EUVT model (10-105 nm), driven by the corrected Lyman-alpha flux.

use super::linear::{LinearTable, Regression, attributes};
use super::traits::SpectralModel;
use crate::coefficients::CoefficientStore;
use crate::coefficients::schema::{EUVT_BANDS, EUVT_FULL, EUVT_LINES};
use crate::common::constants::LAC_FLUX_SCALE;
use crate::domain::{ModelVariant, NusinovResult, ProxyInput};
use crate::numerics::BasisKind;
use crate::spectra::{
    Attributes, LabeledResult, RowAxis, band_axis_from_table, line_axis_from_table,
};

pub(crate) const LAC_UNITS: &str = "10^15 photons · m^-2 · s^-1";

pub(crate) const REGRESSION: Regression = Regression {
    basis: BasisKind::LinearSquare,
    scale: LAC_FLUX_SCALE,
    coordinate: "lac",
    variable: "euv_flux_spectra",
};

fn band_attributes() -> Attributes {
    attributes(&[
        ("lac units", LAC_UNITS),
        ("spectra units", LAC_UNITS),
        ("wavelength units", "nm"),
        ("euv_flux_spectra", "modeled EUV solar irradiance"),
        ("lband", "lower boundary of wavelength interval"),
        ("uband", "upper boundary of wavelength interval"),
    ])
}

fn line_attributes() -> Attributes {
    attributes(&[
        ("lac units", LAC_UNITS),
        ("spectra units", LAC_UNITS),
        ("wavelength units", "nm"),
        ("euv_flux_spectra", "modeled EUV solar irradiance"),
        ("wavelength", "the wavelength of a discrete line"),
    ])
}

#[derive(Debug, Clone)]
pub struct EuvtModel {
    bands: LinearTable,
    lines: LinearTable,
    full: LinearTable,
}

impl EuvtModel {
    pub fn euvt2021(store: &CoefficientStore) -> NusinovResult<Self> {
        let bands = store.load(&EUVT_BANDS)?;
        let lines = store.load(&EUVT_LINES)?;
        let full = store.load(&EUVT_FULL)?;

        let band_rows = RowAxis::Bands(band_axis_from_table(&bands)?);
        let line_rows = RowAxis::Lines(line_axis_from_table(&lines)?);
        let full_rows = RowAxis::Bands(band_axis_from_table(&full)?);

        Ok(Self {
            bands: LinearTable::new(&bands, band_rows, band_attributes())?,
            lines: LinearTable::new(&lines, line_rows, line_attributes())?,
            full: LinearTable::new(&full, full_rows, band_attributes())?,
        })
    }
}

impl SpectralModel for EuvtModel {
    fn variant(&self) -> ModelVariant {
        ModelVariant::Euvt2021
    }

    fn bands(&self, proxy: &ProxyInput) -> NusinovResult<LabeledResult> {
        self.bands.evaluate(&REGRESSION, proxy)
    }

    fn lines(&self, proxy: &ProxyInput) -> NusinovResult<Option<LabeledResult>> {
        self.lines.evaluate(&REGRESSION, proxy).map(Some)
    }

    fn full(&self, proxy: &ProxyInput) -> NusinovResult<LabeledResult> {
        self.full.evaluate(&REGRESSION, proxy)
    }
}
